//! Cost estimation for the appliance registry
//!
//! The estimate is a flat-rate projection:
//! - daily energy = watts * hours / 1000 (kWh)
//! - monthly energy = daily energy * 30 (no calendar awareness)
//! - monthly cost = monthly energy * tariff
//!
//! summed over every appliance in registry order.

use crate::core::{Appliance, ApplianceCost, CostSummary};
use crate::registry::ApplianceRegistry;

/// Fixed month length used by the estimate
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Tariff shown in the price field before the user edits it
pub const DEFAULT_TARIFF_PER_KWH: f64 = 0.85;

/// Cost breakdown of one appliance at `tariff_per_kwh`
pub fn appliance_cost(appliance: &Appliance, tariff_per_kwh: f64) -> ApplianceCost {
    let daily_kwh = appliance.power_watts() as f64 * appliance.daily_usage_hours() as f64
        / WATTS_PER_KILOWATT;
    let monthly_kwh = daily_kwh * DAYS_PER_MONTH;

    ApplianceCost {
        daily_kwh,
        monthly_kwh,
        monthly_cost: monthly_kwh * tariff_per_kwh,
    }
}

/// Total monthly cost of `appliances` at `tariff_per_kwh`.
///
/// Sums in sequence order. An empty sequence yields exactly `0.0`.
pub fn monthly_cost<'a, I>(appliances: I, tariff_per_kwh: f64) -> f64
where
    I: IntoIterator<Item = &'a Appliance>,
{
    // fold from +0.0: `Sum for f64` starts at -0.0
    appliances
        .into_iter()
        .fold(0.0, |total, a| total + appliance_cost(a, tariff_per_kwh).monthly_cost)
}

/// Total monthly consumption of `appliances` in kWh
pub fn monthly_kwh<'a, I>(appliances: I) -> f64
where
    I: IntoIterator<Item = &'a Appliance>,
{
    appliances
        .into_iter()
        .fold(0.0, |total, a| total + appliance_cost(a, 0.0).monthly_kwh)
}

/// Parse a user-entered tariff.
///
/// Surrounding whitespace is ignored. Empty, non-numeric, or non-finite input
/// is treated as `0.0` instead of failing.
pub fn parse_tariff(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            log::debug!("Unparseable tariff {:?}, using 0.0", text);
            0.0
        }
    }
}

/// Render a cost with exactly two decimals behind the currency symbol
pub fn format_cost(currency_symbol: &str, value: f64) -> String {
    // anything that rounds to zero cents prints as "0.00", never "-0.00"
    let value = if (value * 100.0).round() == 0.0 { 0.0 } else { value };
    format!("{} {:.2}", currency_symbol, value)
}

/// Estimator bound to a tariff and a display currency
#[derive(Debug, Clone)]
pub struct CostEstimator {
    tariff_per_kwh: f64,
    currency_symbol: String,
}

impl CostEstimator {
    /// Create a new estimator
    pub fn new(tariff_per_kwh: f64, currency_symbol: &str) -> Self {
        Self {
            tariff_per_kwh,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Update the tariff used by later computations
    pub fn set_tariff(&mut self, tariff_per_kwh: f64) {
        self.tariff_per_kwh = tariff_per_kwh;
    }

    pub fn tariff(&self) -> f64 {
        self.tariff_per_kwh
    }

    /// Get the currency symbol
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Total monthly cost of the registry
    pub fn monthly_cost(&self, registry: &ApplianceRegistry) -> f64 {
        monthly_cost(registry.appliances(), self.tariff_per_kwh)
    }

    /// Per-appliance costs in registry order
    pub fn breakdown(&self, registry: &ApplianceRegistry) -> Vec<ApplianceCost> {
        registry
            .appliances()
            .map(|a| appliance_cost(a, self.tariff_per_kwh))
            .collect()
    }

    /// Summary of the registry for display
    pub fn summary(&self, registry: &ApplianceRegistry) -> CostSummary {
        CostSummary {
            appliance_count: registry.len(),
            tariff_per_kwh: self.tariff_per_kwh,
            monthly_kwh: monthly_kwh(registry.appliances()),
            monthly_cost: self.monthly_cost(registry),
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_TARIFF_PER_KWH, "R$")
    }
}
