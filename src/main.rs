use std::io::{self, stdout, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

mod app;
mod cli;
mod config;
mod error;
mod estimator;
mod logging;
mod models;
mod report;
mod theme;
mod ui;

use app::App;
use cli::{Args, RunMode, VERSION};
use error::AppError;
use models::Inputs;

fn main() -> ExitCode {
    let args = cli::parse_args();
    logging::init_logging(args.run_mode());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("footprint-tui: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let inputs = args.resolve_inputs()?;
    let mode = args.run_mode();
    tracing::info!(?mode, "footprint-tui v{} starting", VERSION);

    match mode {
        RunMode::Interactive => run_tui(inputs)?,
        RunMode::Prompt | RunMode::Report | RunMode::Json => {
            let stdin = io::stdin();
            run_batch(args, inputs, &mut stdin.lock(), &mut stdout(), &mut io::stderr())?;
        }
    }

    Ok(())
}

/// Optional prompts, then the text or JSON report on `out`.
/// With `--json` the prompts go to `err` so `out` stays valid JSON.
fn run_batch<R: BufRead, O: Write, E: Write>(
    args: &Args,
    mut inputs: Inputs,
    input: &mut R,
    out: &mut O,
    err: &mut E,
) -> Result<(), AppError> {
    if args.prompt {
        inputs = if args.json {
            cli::prompt_inputs(input, err, inputs, args.clamp)?
        } else {
            cli::prompt_inputs(input, out, inputs, args.clamp)?
        };
        inputs = args.finalize(inputs)?;
    }

    let outputs = estimator::compute(&inputs);
    if args.json {
        writeln!(out, "{}", report::Report::new(&inputs, &outputs).to_json()?)?;
    } else {
        write!(out, "{}", report::render_text(&inputs, &outputs))?;
    }
    out.flush()?;

    Ok(())
}

fn run_tui(inputs: Inputs) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(inputs);
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
