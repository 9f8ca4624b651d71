//! User prompt functions for interactive CLI input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::models::{Diet, Inputs, NumericField, TransportMode};

use super::args::parse_yes_no;

/// Read one trimmed line after printing `question`
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a numeric field; empty or invalid input keeps `current`.
/// With `clamp`, out-of-range numbers are pulled into range instead.
pub fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    field: NumericField,
    current: f64,
    clamp: bool,
) -> io::Result<f64> {
    let (min, max) = field.range();
    let answer = ask(input, output, &format!("{} [{}]: ", question, current))?;
    if answer.is_empty() {
        return Ok(current);
    }

    let parsed = answer.parse::<f64>().map_err(|_| ()).and_then(|v| {
        if clamp && !v.is_nan() {
            Ok(field.clamp(v))
        } else {
            field.check(v).map_err(|_| ())
        }
    });
    match parsed {
        Ok(value) => Ok(value),
        Err(()) => {
            eprintln!("Enter a number between {} and {}. Using {}.", min, max, current);
            Ok(current)
        }
    }
}

/// Prompt for a choice by number or name; empty or invalid input keeps `current`
pub fn prompt_choice<R, W, T>(
    input: &mut R,
    output: &mut W,
    question: &str,
    options: &[T],
    label: fn(&T) -> &'static str,
    current: T,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    T: Copy + PartialEq + FromStr,
{
    writeln!(output, "{}", question)?;
    for (i, option) in options.iter().enumerate() {
        let marker = if *option == current { "*" } else { " " };
        writeln!(output, "  {}{}) {}", marker, i + 1, label(option))?;
    }

    let answer = ask(input, output, &format!("Select [1-{}]: ", options.len()))?;
    if answer.is_empty() {
        return Ok(current);
    }

    if let Ok(index) = answer.parse::<usize>() {
        if index >= 1 && index <= options.len() {
            return Ok(options[index - 1]);
        }
    } else if let Ok(value) = answer.parse::<T>() {
        return Ok(value);
    }

    eprintln!("Invalid selection. Using {}.", label(&current));
    Ok(current)
}

/// Prompt for a yes/no answer; empty or invalid input keeps `current`
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    current: bool,
) -> io::Result<bool> {
    let hint = if current { "Y/n" } else { "y/N" };
    let answer = ask(input, output, &format!("{} [{}]: ", question, hint))?;
    if answer.is_empty() {
        return Ok(current);
    }
    Ok(parse_yes_no(&answer).unwrap_or_else(|_| {
        eprintln!("Please answer yes or no. Keeping {}.", if current { "yes" } else { "no" });
        current
    }))
}

/// Walk through the form in order, starting from `start`
pub fn prompt_inputs<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    start: Inputs,
    clamp: bool,
) -> io::Result<Inputs> {
    let mut inputs = start;

    writeln!(output)?;
    writeln!(output, "╔═══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║  Carbon Footprint Calculator                                  ║")?;
    writeln!(output, "╚═══════════════════════════════════════════════════════════════╝")?;
    writeln!(output)?;
    writeln!(output, "Transportation")?;

    inputs.transport_mode = prompt_choice(
        input,
        output,
        "Select your primary mode of transport:",
        &TransportMode::ALL,
        TransportMode::label,
        inputs.transport_mode,
    )?;
    inputs.weekly_car_km = prompt_number(
        input,
        output,
        "How many kilometers do you travel per week?",
        NumericField::WeeklyCarKm,
        inputs.weekly_car_km,
        clamp,
    )?;
    inputs.annual_flight_hours = prompt_number(
        input,
        output,
        "How many hours do you fly per year?",
        NumericField::AnnualFlightHours,
        inputs.annual_flight_hours,
        clamp,
    )?;

    writeln!(output)?;
    writeln!(output, "Electricity")?;
    inputs.monthly_electricity_kwh = prompt_number(
        input,
        output,
        "Electricity consumption per month (kWh)?",
        NumericField::MonthlyElectricityKwh,
        inputs.monthly_electricity_kwh,
        clamp,
    )?;

    writeln!(output)?;
    writeln!(output, "Diet")?;
    inputs.diet = prompt_choice(
        input,
        output,
        "What best describes your diet?",
        &Diet::ALL,
        Diet::label,
        inputs.diet,
    )?;

    writeln!(output)?;
    writeln!(output, "Waste & Recycling")?;
    inputs.weekly_waste_kg = prompt_number(
        input,
        output,
        "Household waste per week (kg)?",
        NumericField::WeeklyWasteKg,
        inputs.weekly_waste_kg,
        clamp,
    )?;
    inputs.recycles = prompt_yes_no(input, output, "Do you recycle regularly?", inputs.recycles)?;
    writeln!(output)?;

    Ok(inputs)
}
