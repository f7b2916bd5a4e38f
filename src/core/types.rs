//! Common types used across the application

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon reference used when the caller does not pick one
pub const DEFAULT_IMAGE: &str = "ic_menu_manage";

fn default_image() -> String { DEFAULT_IMAGE.to_string() }

/// A recorded household appliance.
///
/// Values are immutable once built; replacing an entry in the registry is the
/// only way to "change" one. No field is validated: negative watts or hours
/// are carried as given and flow through the cost formula unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appliance {
    name: String,
    /// Opaque icon identifier, never used in computation
    #[serde(default = "default_image")]
    image: String,
    /// Rated power draw in watts
    power_watts: i64,
    /// Hours per day the appliance is assumed to run
    daily_usage_hours: i64,
}

impl Appliance {
    pub fn new(name: &str, image: &str, power_watts: i64, daily_usage_hours: i64) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            power_watts,
            daily_usage_hours,
        }
    }

    /// Build an appliance with the default icon
    pub fn with_default_image(name: &str, power_watts: i64, daily_usage_hours: i64) -> Self {
        Self::new(name, DEFAULT_IMAGE, power_watts, daily_usage_hours)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn power_watts(&self) -> i64 {
        self.power_watts
    }

    pub fn daily_usage_hours(&self) -> i64 {
        self.daily_usage_hours
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}W, {}h/day)", self.name, self.power_watts, self.daily_usage_hours)
    }
}

/// Stable handle of one registry entry.
///
/// Assigned at insertion and never reused by the registry that issued it, so
/// two value-equal appliances still have distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplianceId(pub(crate) u64);

impl fmt::Display for ApplianceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cost breakdown of a single appliance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplianceCost {
    /// Energy used per day in kWh
    pub daily_kwh: f64,
    /// Energy used over a 30-day month in kWh
    pub monthly_kwh: f64,
    /// Monthly cost at the given tariff
    pub monthly_cost: f64,
}

/// Cost summary returned to the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Number of appliances the total was computed over
    pub appliance_count: usize,
    /// Tariff used for the computation (currency per kWh)
    pub tariff_per_kwh: f64,
    /// Total monthly consumption in kWh
    pub monthly_kwh: f64,
    /// Total monthly cost
    pub monthly_cost: f64,
    /// Currency symbol used for display
    pub currency_symbol: String,
}

impl CostSummary {
    /// Total cost rendered with two decimals and the currency prefix
    pub fn formatted_cost(&self) -> String {
        crate::pricing::format_cost(&self.currency_symbol, self.monthly_cost)
    }
}
