//! Enums used throughout the footprint calculator
//!
//! This module contains the choice types collected by the form and the
//! classification types produced by the estimator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::inputs::NumericField;
use crate::error::InputError;

/// Primary mode of transport for weekly travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    #[default]
    PetrolDiesel,
    PublicTransport,
    Electric,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [
        TransportMode::PetrolDiesel,
        TransportMode::PublicTransport,
        TransportMode::Electric,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::PetrolDiesel => "Normal Vehicle (Petrol/Diesel)",
            TransportMode::PublicTransport => "Public Transport (Bus/Train)",
            TransportMode::Electric => "Electric Vehicle",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            TransportMode::PetrolDiesel => TransportMode::PublicTransport,
            TransportMode::PublicTransport => TransportMode::Electric,
            TransportMode::Electric => TransportMode::PetrolDiesel,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            TransportMode::PetrolDiesel => TransportMode::Electric,
            TransportMode::PublicTransport => TransportMode::PetrolDiesel,
            TransportMode::Electric => TransportMode::PublicTransport,
        }
    }
}

impl FromStr for TransportMode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "petrol-diesel" | "petrol" | "diesel" | "car" => Ok(TransportMode::PetrolDiesel),
            "public-transport" | "public" | "bus" | "train" => Ok(TransportMode::PublicTransport),
            "electric" | "ev" => Ok(TransportMode::Electric),
            _ => Err(InputError::UnknownVariant {
                kind: "transport mode",
                value: s.to_string(),
                expected: "petrol-diesel, public-transport, electric",
            }),
        }
    }
}

/// Self-described diet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    #[default]
    HeavyMeat,
    Average,
    Vegetarian,
    Vegan,
}

impl Diet {
    pub const ALL: [Diet; 4] = [Diet::HeavyMeat, Diet::Average, Diet::Vegetarian, Diet::Vegan];

    pub fn label(&self) -> &'static str {
        match self {
            Diet::HeavyMeat => "Heavy meat eater",
            Diet::Average => "Average",
            Diet::Vegetarian => "Vegetarian",
            Diet::Vegan => "Vegan",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Diet::HeavyMeat => Diet::Average,
            Diet::Average => Diet::Vegetarian,
            Diet::Vegetarian => Diet::Vegan,
            Diet::Vegan => Diet::HeavyMeat,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Diet::HeavyMeat => Diet::Vegan,
            Diet::Average => Diet::HeavyMeat,
            Diet::Vegetarian => Diet::Average,
            Diet::Vegan => Diet::Vegetarian,
        }
    }
}

impl FromStr for Diet {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heavy-meat" | "heavy" | "meat" => Ok(Diet::HeavyMeat),
            "average" | "avg" => Ok(Diet::Average),
            "vegetarian" | "veggie" => Ok(Diet::Vegetarian),
            "vegan" => Ok(Diet::Vegan),
            _ => Err(InputError::UnknownVariant {
                kind: "diet",
                value: s.to_string(),
                expected: "heavy-meat, average, vegetarian, vegan",
            }),
        }
    }
}

/// Coarse classification of the annual total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatingTier {
    High,
    Moderate,
    Low,
}

impl RatingTier {
    pub fn label(&self) -> &'static str {
        match self {
            RatingTier::High => "High",
            RatingTier::Moderate => "Moderate",
            RatingTier::Low => "Low",
        }
    }
}

impl fmt::Display for RatingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Breakdown category, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Transport,
    Flights,
    Electricity,
    Diet,
    Waste,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Transport,
        Category::Flights,
        Category::Electricity,
        Category::Diet,
        Category::Waste,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Flights => "Flights",
            Category::Electricity => "Electricity",
            Category::Diet => "Diet",
            Category::Waste => "Waste",
        }
    }
}

/// Form row selected in the interactive view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Transport,
    CarKm,
    FlightHours,
    ElectricityKwh,
    Diet,
    WasteKg,
    Recycles,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Transport,
        FormField::CarKm,
        FormField::FlightHours,
        FormField::ElectricityKwh,
        FormField::Diet,
        FormField::WasteKg,
        FormField::Recycles,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Transport => "Transport mode",
            FormField::CarKm => "Km per week",
            FormField::FlightHours => "Flight hours per year",
            FormField::ElectricityKwh => "Electricity kWh per month",
            FormField::Diet => "Diet",
            FormField::WasteKg => "Waste kg per week",
            FormField::Recycles => "Recycle regularly",
        }
    }

    /// Section heading the row sits under
    pub fn section(&self) -> &'static str {
        match self {
            FormField::Transport | FormField::CarKm | FormField::FlightHours => "Transportation",
            FormField::ElectricityKwh => "Electricity",
            FormField::Diet => "Diet",
            FormField::WasteKg | FormField::Recycles => "Waste & Recycling",
        }
    }

    pub fn numeric(&self) -> Option<NumericField> {
        match self {
            FormField::CarKm => Some(NumericField::WeeklyCarKm),
            FormField::FlightHours => Some(NumericField::AnnualFlightHours),
            FormField::ElectricityKwh => Some(NumericField::MonthlyElectricityKwh),
            FormField::WasteKg => Some(NumericField::WeeklyWasteKg),
            FormField::Transport | FormField::Diet | FormField::Recycles => None,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
