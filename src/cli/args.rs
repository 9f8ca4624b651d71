//! CLI argument parsing and input resolution.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_inputs_over, load_user_defaults};
use crate::error::{AppError, InputError};
use crate::models::{Diet, Inputs, TransportMode};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Estimate a yearly carbon footprint in kilograms of CO₂ equivalent.
///
/// Without --report or --json an interactive form opens in the terminal.
#[derive(Debug, Parser)]
#[command(name = "footprint-tui", version, about)]
pub struct Args {
    /// Primary mode of transport (petrol-diesel, public-transport, electric)
    #[arg(long)]
    pub transport: Option<TransportMode>,

    /// Kilometers travelled per week [0-2000]
    #[arg(long, value_name = "KM")]
    pub car_km: Option<f64>,

    /// Hours flown per year [0-500]
    #[arg(long, value_name = "HOURS")]
    pub flight_hours: Option<f64>,

    /// Electricity consumption per month [0-2000]
    #[arg(long, value_name = "KWH")]
    pub electricity_kwh: Option<f64>,

    /// Diet (heavy-meat, average, vegetarian, vegan)
    #[arg(long)]
    pub diet: Option<Diet>,

    /// Household waste per week [0-100]
    #[arg(long, value_name = "KG")]
    pub waste_kg: Option<f64>,

    /// Whether you recycle regularly (yes/no)
    #[arg(long, value_name = "YES|NO", value_parser = parse_yes_no)]
    pub recycle: Option<bool>,

    /// Read inputs from a JSON file (camelCase field names)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Clamp out-of-range values instead of rejecting them
    #[arg(long)]
    pub clamp: bool,

    /// Ask for each input on the command line
    #[arg(short, long, conflicts_with = "input")]
    pub prompt: bool,

    /// Print a text summary and exit
    #[arg(short, long, conflicts_with = "json")]
    pub report: bool,

    /// Print a JSON report and exit
    #[arg(long)]
    pub json: bool,

    /// Ignore the user defaults file
    #[arg(long)]
    pub no_config: bool,
}

/// How the estimate is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Prompt,
    Report,
    Json,
}

impl Args {
    pub fn run_mode(&self) -> RunMode {
        if self.json {
            RunMode::Json
        } else if self.report {
            RunMode::Report
        } else if self.prompt {
            RunMode::Prompt
        } else {
            RunMode::Interactive
        }
    }

    /// Overlay the individual flags onto `base`
    pub fn apply_overrides(&self, base: Inputs) -> Inputs {
        let mut inputs = base;
        if let Some(mode) = self.transport {
            inputs.transport_mode = mode;
        }
        if let Some(km) = self.car_km {
            inputs.weekly_car_km = km;
        }
        if let Some(hours) = self.flight_hours {
            inputs.annual_flight_hours = hours;
        }
        if let Some(kwh) = self.electricity_kwh {
            inputs.monthly_electricity_kwh = kwh;
        }
        if let Some(diet) = self.diet {
            inputs.diet = diet;
        }
        if let Some(kg) = self.waste_kg {
            inputs.weekly_waste_kg = kg;
        }
        if let Some(recycles) = self.recycle {
            inputs.recycles = recycles;
        }
        inputs
    }

    /// Validate, or clamp when `--clamp` was given
    pub fn finalize(&self, inputs: Inputs) -> Result<Inputs, InputError> {
        if self.clamp {
            let clamped = inputs.clamped();
            if clamped != inputs {
                tracing::warn!("clamped out-of-range inputs");
            }
            Ok(clamped)
        } else {
            inputs.validate()?;
            Ok(inputs)
        }
    }

    /// Defaults, then user config, then `--input`, then individual flags
    pub fn resolve_inputs(&self) -> Result<Inputs, AppError> {
        let user_defaults = if self.no_config {
            None
        } else {
            load_user_defaults()?
        };
        self.resolve_from(user_defaults)
    }

    /// Layer `--input` and the flags over `user_defaults` (or the built-in defaults)
    pub fn resolve_from(&self, user_defaults: Option<Inputs>) -> Result<Inputs, AppError> {
        let mut base = user_defaults.unwrap_or_default();
        if let Some(path) = &self.input {
            tracing::info!("reading inputs from {}", path.display());
            base = load_inputs_over(path, base)?;
        }
        Ok(self.finalize(self.apply_overrides(base))?)
    }
}

pub fn parse_yes_no(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" => Ok(false),
        other => Err(format!("expected yes or no, got {:?}", other)),
    }
}

/// Parse CLI arguments
pub fn parse_args() -> Args {
    Args::parse()
}
