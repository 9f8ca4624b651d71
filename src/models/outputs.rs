//! Emission results for one calculation run

use super::enums::{Category, RatingTier};

/// Per-category and aggregate emissions in kg CO₂e
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outputs {
    pub car_emission: f64,
    pub flight_emission: f64,
    pub electricity_emission: f64,
    pub diet_emission: f64,
    pub waste_emission: f64,
    pub total_annual_emission: f64,
    pub weekly_emission: f64,
    pub monthly_emission: f64,
    pub rating_tier: RatingTier,
}

/// One slice of the breakdown chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub emission: f64,
    pub percent: f64,
}

impl Outputs {
    pub fn yearly(&self) -> f64 {
        self.total_annual_emission
    }

    pub fn emission(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.car_emission,
            Category::Flights => self.flight_emission,
            Category::Electricity => self.electricity_emission,
            Category::Diet => self.diet_emission,
            Category::Waste => self.waste_emission,
        }
    }

    /// Category shares of the annual total, in chart order
    pub fn breakdown(&self) -> [CategoryShare; 5] {
        let total = self.total_annual_emission;
        Category::ALL.map(|category| {
            let emission = self.emission(category);
            let percent = if total > 0.0 {
                emission / total * 100.0
            } else {
                0.0
            };
            CategoryShare {
                category,
                emission,
                percent,
            }
        })
    }
}
