//! Add-appliance form
//!
//! Holds the raw text typed into the form fields and turns it into an
//! [`Appliance`] on save. Numeric fields that do not parse become `0`.

use crate::core::Appliance;

/// Raw text of the add-appliance form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplianceForm {
    pub name: String,
    /// Power in watts, as typed
    pub power: String,
    /// Daily usage in hours, as typed
    pub daily_usage: String,
}

impl ApplianceForm {
    pub fn new(name: &str, power: &str, daily_usage: &str) -> Self {
        Self {
            name: name.to_string(),
            power: power.to_string(),
            daily_usage: daily_usage.to_string(),
        }
    }

    /// Build the appliance, defaulting unparseable numbers to zero.
    /// The name is kept exactly as typed.
    pub fn to_appliance(&self, image: &str) -> Appliance {
        Appliance::new(
            &self.name,
            image,
            parse_whole_number(&self.power),
            parse_whole_number(&self.daily_usage),
        )
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Parse an integer field, treating anything unparseable as `0`
pub fn parse_whole_number(text: &str) -> i64 {
    text.trim().parse().unwrap_or_else(|_| {
        log::debug!("Unparseable number {:?}, using 0", text);
        0
    })
}
