//! Plain-text and JSON rendering of a footprint estimate.

use serde::{Serialize, Serializer};

use crate::models::{Category, Inputs, Outputs, RatingTier};

/// Width of the text breakdown bars
const BAR_WIDTH: usize = 30;

/// Format an emission value as "1234.56 kg CO₂e"
pub fn format_kg(value: f64) -> String {
    format!("{:.2} kg CO₂e", value)
}

/// Advisory message shown under the period metrics
pub fn advisory(tier: RatingTier) -> &'static str {
    match tier {
        RatingTier::High => {
            "Your carbon footprint is high. Consider making eco-friendly changes."
        }
        RatingTier::Moderate => "Moderate footprint. There's room for improvement.",
        RatingTier::Low => "Great job! Your carbon footprint is low compared to the average.",
    }
}

/// Round to the two decimals used for display
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn serialize_2dp<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_2dp(*value))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportShare {
    pub category: Category,
    #[serde(serialize_with = "serialize_2dp")]
    pub emission: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEmissions {
    #[serde(serialize_with = "serialize_2dp")]
    pub car_emission: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub flight_emission: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub electricity_emission: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub diet_emission: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub waste_emission: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub total_annual_emission: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub weekly_emission: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub monthly_emission: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub yearly_emission: f64,
}

/// JSON document printed by `--json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub inputs: Inputs,
    pub emissions: ReportEmissions,
    pub rating_tier: RatingTier,
    pub advisory: &'static str,
    pub breakdown: Vec<ReportShare>,
}

impl Report {
    pub fn new(inputs: &Inputs, outputs: &Outputs) -> Self {
        Self {
            inputs: *inputs,
            emissions: ReportEmissions {
                car_emission: outputs.car_emission,
                flight_emission: outputs.flight_emission,
                electricity_emission: outputs.electricity_emission,
                diet_emission: outputs.diet_emission,
                waste_emission: outputs.waste_emission,
                total_annual_emission: outputs.total_annual_emission,
                weekly_emission: outputs.weekly_emission,
                monthly_emission: outputs.monthly_emission,
                yearly_emission: outputs.yearly(),
            },
            rating_tier: outputs.rating_tier,
            advisory: advisory(outputs.rating_tier),
            breakdown: outputs
                .breakdown()
                .iter()
                .map(|share| ReportShare {
                    category: share.category,
                    emission: share.emission,
                    percent: share.percent,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Render the summary shown by `--report` and the prompt mode
pub fn render_text(inputs: &Inputs, outputs: &Outputs) -> String {
    let mut out = String::new();

    out.push_str("Your Carbon Footprint Summary\n");
    out.push_str("─────────────────────────────\n");
    out.push_str(&format!(
        "  Transport:   {} ({:.0} km/week)\n",
        inputs.transport_mode.label(),
        inputs.weekly_car_km
    ));
    out.push_str(&format!(
        "  Diet:        {}   Recycling: {}\n",
        inputs.diet.label(),
        if inputs.recycles { "Yes" } else { "No" }
    ));
    out.push('\n');
    out.push_str(&format!(
        "Estimated Annual CO₂ Emissions: {}\n\n",
        format_kg(outputs.total_annual_emission)
    ));
    out.push_str(&format!("  Weekly:  {}\n", format_kg(outputs.weekly_emission)));
    out.push_str(&format!("  Monthly: {}\n", format_kg(outputs.monthly_emission)));
    out.push_str(&format!("  Yearly:  {}\n\n", format_kg(outputs.yearly())));
    out.push_str(&format!(
        "[{}] {}\n\n",
        outputs.rating_tier,
        advisory(outputs.rating_tier)
    ));

    out.push_str("Emission Breakdown by Category\n");
    for share in outputs.breakdown() {
        let filled = ((share.percent / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(filled.min(BAR_WIDTH)),
            "░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
        );
        out.push_str(&format!(
            "  {:<12} {} {:>5.1}%  {}\n",
            share.category.label(),
            bar,
            share.percent,
            format_kg(share.emission)
        ));
    }

    out
}
