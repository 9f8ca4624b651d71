//! Annual footprint estimate from lifestyle inputs.
//!
//! `compute` is a pure function of its inputs. It performs no validation;
//! callers clamp or reject out-of-range values first (see
//! [`Inputs::validate`] and [`Inputs::clamped`]).

use crate::models::{Diet, Inputs, Outputs, RatingTier, TransportMode};

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// kg CO₂e per flight-hour
pub const FLIGHT_FACTOR: f64 = 90.0;
/// kg CO₂e per kWh
pub const ELECTRICITY_FACTOR: f64 = 0.5;
/// kg CO₂e per kg of household waste
pub const WASTE_FACTOR: f64 = 0.8;
/// Share of waste emissions left after recycling
pub const RECYCLING_MULTIPLIER: f64 = 0.7;
/// Diet factors are tonnes per year
pub const DIET_SCALE: f64 = 1000.0;

pub const HIGH_THRESHOLD: f64 = 5000.0;
pub const MODERATE_THRESHOLD: f64 = 3000.0;

impl TransportMode {
    /// kg CO₂e per km travelled
    pub fn factor(&self) -> f64 {
        match self {
            TransportMode::PetrolDiesel => 0.21,
            TransportMode::PublicTransport => 0.05,
            TransportMode::Electric => 0.06,
        }
    }
}

impl Diet {
    /// Annual tonnes CO₂e
    pub fn factor(&self) -> f64 {
        match self {
            Diet::HeavyMeat => 3.3,
            Diet::Average => 2.5,
            Diet::Vegetarian => 1.7,
            Diet::Vegan => 1.5,
        }
    }
}

impl RatingTier {
    /// Thresholds are strict: exactly 5000 is Moderate, exactly 3000 is Low.
    pub fn from_total(total: f64) -> Self {
        if total > HIGH_THRESHOLD {
            RatingTier::High
        } else if total > MODERATE_THRESHOLD {
            RatingTier::Moderate
        } else {
            RatingTier::Low
        }
    }
}

pub fn compute(inputs: &Inputs) -> Outputs {
    let car_emission = inputs.weekly_car_km * WEEKS_PER_YEAR * inputs.transport_mode.factor();
    let flight_emission = inputs.annual_flight_hours * FLIGHT_FACTOR;

    let electricity_emission =
        inputs.monthly_electricity_kwh * MONTHS_PER_YEAR * ELECTRICITY_FACTOR;

    let diet_emission = inputs.diet.factor() * DIET_SCALE;

    let mut waste_emission = inputs.weekly_waste_kg * WEEKS_PER_YEAR * WASTE_FACTOR;
    if inputs.recycles {
        waste_emission *= RECYCLING_MULTIPLIER;
    }

    let total_annual_emission =
        car_emission + flight_emission + electricity_emission + diet_emission + waste_emission;

    Outputs {
        car_emission,
        flight_emission,
        electricity_emission,
        diet_emission,
        waste_emission,
        total_annual_emission,
        weekly_emission: total_annual_emission / WEEKS_PER_YEAR,
        monthly_emission: total_annual_emission / MONTHS_PER_YEAR,
        rating_tier: RatingTier::from_total(total_annual_emission),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS * b.abs().max(1.0)
    }

    fn zero_inputs(diet: Diet) -> Inputs {
        Inputs {
            transport_mode: TransportMode::PetrolDiesel,
            weekly_car_km: 0.0,
            annual_flight_hours: 0.0,
            monthly_electricity_kwh: 0.0,
            diet,
            weekly_waste_kg: 0.0,
            recycles: false,
        }
    }

    fn sample_inputs() -> Vec<Inputs> {
        let mut samples = Vec::new();
        for mode in TransportMode::ALL {
            for diet in Diet::ALL {
                for recycles in [false, true] {
                    for (km, hours, kwh, waste) in [
                        (0.0, 0.0, 0.0, 0.0),
                        (50.0, 0.0, 90.0, 10.0),
                        (137.5, 12.25, 333.3, 7.7),
                        (2000.0, 500.0, 2000.0, 100.0),
                    ] {
                        samples.push(Inputs {
                            transport_mode: mode,
                            weekly_car_km: km,
                            annual_flight_hours: hours,
                            monthly_electricity_kwh: kwh,
                            diet,
                            weekly_waste_kg: waste,
                            recycles,
                        });
                    }
                }
            }
        }
        samples
    }

    #[test]
    fn test_reference_scenario() {
        let inputs = Inputs {
            transport_mode: TransportMode::PetrolDiesel,
            weekly_car_km: 50.0,
            annual_flight_hours: 0.0,
            monthly_electricity_kwh: 90.0,
            diet: Diet::Average,
            weekly_waste_kg: 10.0,
            recycles: true,
        };
        let out = compute(&inputs);
        assert!(approx(out.car_emission, 546.0));
        assert_eq!(out.flight_emission, 0.0);
        assert!(approx(out.electricity_emission, 540.0));
        assert!(approx(out.diet_emission, 2500.0));
        assert!(approx(out.waste_emission, 291.2));
        assert!(approx(out.total_annual_emission, 3877.2));
        assert_eq!(out.rating_tier, RatingTier::Moderate);
    }

    #[test]
    fn test_all_zero_vegan_is_diet_only() {
        let out = compute(&zero_inputs(Diet::Vegan));
        assert_eq!(out.total_annual_emission, 1500.0);
        assert_eq!(out.rating_tier, RatingTier::Low);
    }

    #[test]
    fn test_heavy_travel_is_high() {
        let inputs = Inputs {
            weekly_car_km: 2000.0,
            annual_flight_hours: 500.0,
            ..zero_inputs(Diet::Vegan)
        };
        let out = compute(&inputs);
        assert!(approx(out.car_emission, 21840.0));
        assert_eq!(out.flight_emission, 45000.0);
        assert!(out.total_annual_emission > 5000.0);
        assert_eq!(out.rating_tier, RatingTier::High);
    }

    #[test]
    fn test_total_is_exact_sum() {
        for inputs in sample_inputs() {
            let out = compute(&inputs);
            let sum = out.car_emission
                + out.flight_emission
                + out.electricity_emission
                + out.diet_emission
                + out.waste_emission;
            assert_eq!(out.total_annual_emission, sum);
        }
    }

    #[test]
    fn test_period_conversions() {
        for inputs in sample_inputs() {
            let out = compute(&inputs);
            assert!(approx(out.weekly_emission * 52.0, out.total_annual_emission));
            assert!(approx(out.monthly_emission * 12.0, out.total_annual_emission));
            assert_eq!(out.yearly(), out.total_annual_emission);
        }
    }

    #[test]
    fn test_non_negative() {
        for inputs in sample_inputs() {
            let out = compute(&inputs);
            for category in Category::ALL {
                assert!(out.emission(category) >= 0.0);
            }
        }
    }

    #[test]
    fn test_monotonic_in_each_numeric_input() {
        use crate::models::NumericField;

        for base in sample_inputs() {
            let before = compute(&base);
            for field in NumericField::ALL {
                let (_, max) = field.range();
                let mut raised = base;
                raised.set(field, (base.get(field) + field.step()).min(max));
                let after = compute(&raised);
                assert!(after.total_annual_emission >= before.total_annual_emission);
                for category in Category::ALL {
                    assert!(after.emission(category) >= before.emission(category));
                }
            }
        }
    }

    #[test]
    fn test_recycling_is_exactly_seventy_percent() {
        for waste in [0.0, 1.0, 10.0, 33.3, 100.0] {
            let without = compute(&Inputs {
                weekly_waste_kg: waste,
                recycles: false,
                ..Inputs::default()
            });
            let with = compute(&Inputs {
                weekly_waste_kg: waste,
                recycles: true,
                ..Inputs::default()
            });
            assert_eq!(with.waste_emission, without.waste_emission * 0.7);
        }
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(RatingTier::from_total(0.0), RatingTier::Low);
        assert_eq!(RatingTier::from_total(3000.00), RatingTier::Low);
        assert_eq!(RatingTier::from_total(3000.01), RatingTier::Moderate);
        assert_eq!(RatingTier::from_total(5000.00), RatingTier::Moderate);
        assert_eq!(RatingTier::from_total(5000.01), RatingTier::High);
    }

    #[test]
    fn test_transport_factors() {
        let km = Inputs {
            weekly_car_km: 100.0,
            ..zero_inputs(Diet::Vegan)
        };
        let petrol = compute(&km).car_emission;
        let public = compute(&Inputs {
            transport_mode: TransportMode::PublicTransport,
            ..km
        })
        .car_emission;
        let electric = compute(&Inputs {
            transport_mode: TransportMode::Electric,
            ..km
        })
        .car_emission;
        assert!(approx(petrol, 1092.0));
        assert!(approx(public, 260.0));
        assert!(approx(electric, 312.0));
    }

    #[test]
    fn test_diet_factors() {
        let expected = [3300.0, 2500.0, 1700.0, 1500.0];
        for (diet, kg) in Diet::ALL.into_iter().zip(expected) {
            assert!(approx(compute(&zero_inputs(diet)).diet_emission, kg));
        }
    }

    #[test]
    fn test_deterministic() {
        for inputs in sample_inputs() {
            assert_eq!(compute(&inputs), compute(&inputs));
        }
    }

    #[test]
    fn test_breakdown_shares() {
        let out = compute(&Inputs::default());
        let shares = out.breakdown();
        let order: Vec<Category> = shares.iter().map(|s| s.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        let total_pct: f64 = shares.iter().map(|s| s.percent).sum();
        assert!(approx(total_pct, 100.0));
        assert_eq!(shares[3].emission, out.diet_emission);
    }
}
