//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, PricingConfig, SeedConfig};
pub use error::{Error, Result};
pub use types::{Appliance, ApplianceCost, ApplianceId, CostSummary, DEFAULT_IMAGE};
