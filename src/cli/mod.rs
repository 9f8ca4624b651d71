//! CLI argument parsing and user prompts for the footprint calculator.

mod args;
mod prompts;

pub use args::{parse_args, Args, RunMode, VERSION};
pub use prompts::prompt_inputs;
