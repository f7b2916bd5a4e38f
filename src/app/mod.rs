//! Front-end state
//!
//! Owns the registry, the tariff text, and the last computed total, and
//! switches between the list screen and the add form. The total is only
//! refreshed when an operation here asks for it: on startup, on explicit
//! recompute, and after adding or deleting an appliance.

use crate::core::{Appliance, ApplianceId, Config, CostSummary, DEFAULT_IMAGE};
use crate::form::ApplianceForm;
use crate::pricing::{parse_tariff, CostEstimator};
use crate::registry::ApplianceRegistry;

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ListView,
    AddForm,
}

/// Application runtime state (not persisted)
pub struct App {
    registry: ApplianceRegistry,
    estimator: CostEstimator,
    tariff_text: String,
    summary: CostSummary,
    screen: Screen,
    form: ApplianceForm,
}

impl App {
    /// Build the startup state from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_registry(
            config.seed_registry(),
            &config.pricing.default_tariff,
            &config.pricing.currency_symbol,
        )
    }

    /// Build state around an existing registry and compute the initial total
    pub fn with_registry(registry: ApplianceRegistry, tariff_text: &str, currency_symbol: &str) -> Self {
        let estimator = CostEstimator::new(parse_tariff(tariff_text), currency_symbol);
        let summary = estimator.summary(&registry);

        log::info!(
            "Starting with {} appliances, monthly cost {}",
            registry.len(),
            summary.formatted_cost()
        );

        Self {
            registry,
            estimator,
            tariff_text: tariff_text.to_string(),
            summary,
            screen: Screen::ListView,
            form: ApplianceForm::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn registry(&self) -> &ApplianceRegistry {
        &self.registry
    }

    /// Entries in display order with their handles
    pub fn entries(&self) -> Vec<(ApplianceId, Appliance)> {
        self.registry.iter().map(|(id, a)| (id, a.clone())).collect()
    }

    /// Last computed total
    pub fn summary(&self) -> &CostSummary {
        &self.summary
    }

    pub fn tariff_text(&self) -> &str {
        &self.tariff_text
    }

    /// Change the tariff text. The total is not refreshed until [`App::recompute`].
    pub fn set_tariff_text(&mut self, text: &str) {
        self.tariff_text = text.to_string();
    }

    /// Re-read the tariff text and refresh the total
    pub fn recompute(&mut self) -> &CostSummary {
        self.estimator.set_tariff(parse_tariff(&self.tariff_text));
        self.summary = self.estimator.summary(&self.registry);

        log::debug!(
            "Recomputed total at {} per kWh: {}",
            self.estimator.tariff(),
            self.summary.formatted_cost()
        );
        &self.summary
    }

    /// Switch to the add form with empty fields
    pub fn open_add_form(&mut self) {
        self.form.clear();
        self.screen = Screen::AddForm;
    }

    /// Mutable access to the pending form fields
    pub fn form_mut(&mut self) -> &mut ApplianceForm {
        &mut self.form
    }

    /// Leave the add form without saving
    pub fn cancel_form(&mut self) {
        self.form.clear();
        self.screen = Screen::ListView;
    }

    /// Save the pending form as a new appliance and return to the list
    pub fn save_form(&mut self) -> ApplianceId {
        let appliance = self.form.to_appliance(DEFAULT_IMAGE);
        let id = self.registry.add(appliance);

        self.form.clear();
        self.screen = Screen::ListView;
        self.recompute();
        id
    }

    /// Delete an entry and refresh the total. Unknown handles are ignored.
    pub fn delete(&mut self, id: ApplianceId) -> Option<Appliance> {
        let removed = self.registry.remove(id);
        self.recompute();
        removed
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_initial_total_uses_default_tariff() {
        let app = App::default();
        assert_eq!(app.screen(), Screen::ListView);
        assert_eq!(app.tariff_text(), "0.85");
        assert_eq!(app.summary().appliance_count, 2);
        assert_eq!(app.summary().formatted_cost(), "R$ 198.90");
    }

    #[test]
    fn test_tariff_change_waits_for_recompute() {
        let mut app = App::default();
        app.set_tariff_text("1.0");
        assert!(approx(app.summary().tariff_per_kwh, 0.85));

        app.recompute();
        assert!(approx(app.summary().monthly_cost, 234.0));
    }

    #[test]
    fn test_invalid_tariff_recomputes_to_zero() {
        let mut app = App::default();
        app.set_tariff_text("abc");
        assert_eq!(app.recompute().monthly_cost, 0.0);
        assert_eq!(app.summary().formatted_cost(), "R$ 0.00");
    }

    #[test]
    fn test_add_then_delete_first() {
        let mut app = App::default();
        let first = app.entries()[0].0;

        app.open_add_form();
        assert_eq!(app.screen(), Screen::AddForm);
        *app.form_mut() = ApplianceForm::new("TV", "100", "10");
        app.save_form();

        assert_eq!(app.screen(), Screen::ListView);
        assert_eq!(app.registry().len(), 3);
        // 15.30 + 183.60 + 25.50
        assert!(approx(app.summary().monthly_cost, 224.4));

        let removed = app.delete(first).unwrap();
        assert_eq!(removed.name(), "Ventilador");
        assert_eq!(app.registry().len(), 2);
        // 183.60 + 25.50
        assert!(approx(app.summary().monthly_cost, 209.1));
    }

    #[test]
    fn test_cancel_form_keeps_registry() {
        let mut app = App::default();
        app.open_add_form();
        app.form_mut().name = "Micro-ondas".to_string();
        app.cancel_form();

        assert_eq!(app.screen(), Screen::ListView);
        assert_eq!(app.registry().len(), 2);

        app.open_add_form();
        assert_eq!(app.form_mut().name, "");
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut app = App::default();
        let id = app.entries()[1].0;
        assert!(app.delete(id).is_some());
        assert!(app.delete(id).is_none());
        assert_eq!(app.registry().len(), 1);
    }
}
