//! Lifestyle inputs collected by the form
//!
//! `Inputs` is the value handed to the estimator. Range checks and clamping
//! live here so the estimator can assume well-formed values.

use serde::{Deserialize, Serialize};

use super::enums::{Diet, TransportMode};
use crate::error::InputError;

/// The four numeric form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    WeeklyCarKm,
    AnnualFlightHours,
    MonthlyElectricityKwh,
    WeeklyWasteKg,
}

impl NumericField {
    pub const ALL: [NumericField; 4] = [
        NumericField::WeeklyCarKm,
        NumericField::AnnualFlightHours,
        NumericField::MonthlyElectricityKwh,
        NumericField::WeeklyWasteKg,
    ];

    /// Inclusive range accepted by the estimator
    pub fn range(&self) -> (f64, f64) {
        match self {
            NumericField::WeeklyCarKm => (0.0, 2000.0),
            NumericField::AnnualFlightHours => (0.0, 500.0),
            NumericField::MonthlyElectricityKwh => (0.0, 2000.0),
            NumericField::WeeklyWasteKg => (0.0, 100.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NumericField::WeeklyCarKm => "weeklyCarKm",
            NumericField::AnnualFlightHours => "annualFlightHours",
            NumericField::MonthlyElectricityKwh => "monthlyElectricityKwh",
            NumericField::WeeklyWasteKg => "weeklyWasteKg",
        }
    }

    /// Increment used by the interactive form
    pub fn step(&self) -> f64 {
        match self {
            NumericField::WeeklyCarKm => 10.0,
            NumericField::AnnualFlightHours => 1.0,
            NumericField::MonthlyElectricityKwh => 10.0,
            NumericField::WeeklyWasteKg => 1.0,
        }
    }

    /// Clamp a value into range; NaN maps to the minimum
    pub fn clamp(&self, value: f64) -> f64 {
        let (min, max) = self.range();
        if value.is_nan() {
            min
        } else {
            value.clamp(min, max)
        }
    }

    pub fn check(&self, value: f64) -> Result<f64, InputError> {
        let (min, max) = self.range();
        if value.is_finite() && value >= min && value <= max {
            Ok(value)
        } else {
            Err(InputError::OutOfRange {
                field: self.name(),
                value,
                min,
                max,
            })
        }
    }
}

/// Inputs for one calculation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inputs {
    pub transport_mode: TransportMode,
    pub weekly_car_km: f64,
    pub annual_flight_hours: f64,
    pub monthly_electricity_kwh: f64,
    pub diet: Diet,
    pub weekly_waste_kg: f64,
    pub recycles: bool,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            transport_mode: TransportMode::PetrolDiesel,
            weekly_car_km: 50.0,
            annual_flight_hours: 0.0,
            monthly_electricity_kwh: 90.0,
            diet: Diet::HeavyMeat,
            weekly_waste_kg: 10.0,
            recycles: true,
        }
    }
}

impl Inputs {
    pub fn get(&self, field: NumericField) -> f64 {
        match field {
            NumericField::WeeklyCarKm => self.weekly_car_km,
            NumericField::AnnualFlightHours => self.annual_flight_hours,
            NumericField::MonthlyElectricityKwh => self.monthly_electricity_kwh,
            NumericField::WeeklyWasteKg => self.weekly_waste_kg,
        }
    }

    pub fn set(&mut self, field: NumericField, value: f64) {
        let slot = match field {
            NumericField::WeeklyCarKm => &mut self.weekly_car_km,
            NumericField::AnnualFlightHours => &mut self.annual_flight_hours,
            NumericField::MonthlyElectricityKwh => &mut self.monthly_electricity_kwh,
            NumericField::WeeklyWasteKg => &mut self.weekly_waste_kg,
        };
        *slot = value;
    }

    /// Reject the first numeric field outside its range
    pub fn validate(&self) -> Result<(), InputError> {
        for field in NumericField::ALL {
            field.check(self.get(field))?;
        }
        Ok(())
    }

    /// Copy with every numeric field clamped into range
    pub fn clamped(&self) -> Inputs {
        let mut out = *self;
        for field in NumericField::ALL {
            out.set(field, field.clamp(self.get(field)));
        }
        out
    }
}
