//! Appliance Cost - Demo CLI
//!
//! Scripted walkthrough of the registry and the monthly cost estimate:
//! the two seeded appliances, adding and removing an entry, and an
//! unparseable tariff.

use appliance_cost_lib::app::App;
use appliance_cost_lib::core::{Appliance, Config};
use appliance_cost_lib::form::ApplianceForm;
use appliance_cost_lib::pricing::{appliance_cost, format_cost, CostEstimator, DEFAULT_TARIFF_PER_KWH};
use appliance_cost_lib::registry::ApplianceRegistry;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Appliance Cost - Demo CLI");
    println!("==============================================\n");

    let symbol = Config::default().pricing.currency_symbol;

    // 1. Single appliances
    println!("[1/4] Single appliances at {:.2} {}/kWh", DEFAULT_TARIFF_PER_KWH, symbol);
    println!("----------------------------------------------");
    println!("  Appliance    |  Daily  | Monthly |  Cost");
    println!("               |  (kWh)  |  (kWh)  |");
    println!("----------------------------------------------");
    let seeded = Config::default().seed.appliances;
    for appliance in &seeded {
        print_row(appliance, &symbol);
    }
    println!("----------------------------------------------\n");

    // 2. Both together
    println!("[2/4] Registry total");
    let registry: ApplianceRegistry = seeded.iter().cloned().collect();
    let estimator = CostEstimator::new(DEFAULT_TARIFF_PER_KWH, &symbol);
    let summary = estimator.summary(&registry);
    println!("      Appliances: {}", summary.appliance_count);
    println!("      Energy:     {:.1} kWh/month", summary.monthly_kwh);
    println!("      Total:      {}\n", summary.formatted_cost());

    // 3. Add a third, then remove the first
    println!("[3/4] Add and remove");
    let mut app = App::with_registry(registry, "0.85", &symbol);
    let first = app.registry().id_at(0);
    println!("      Length: {}", app.registry().len());

    app.open_add_form();
    *app.form_mut() = ApplianceForm::new("Televisor", "100", "6");
    app.save_form();
    println!("      Added Televisor -> length {}, total {}", app.registry().len(), app.summary().formatted_cost());

    if let Some(id) = first {
        if let Some(removed) = app.delete(id) {
            println!("      Removed {} -> length {}, total {}", removed.name(), app.registry().len(), app.summary().formatted_cost());
        }
    }
    println!();

    // 4. Unparseable tariff
    println!("[4/4] Tariff \"abc\"");
    app.set_tariff_text("abc");
    let summary = app.recompute();
    println!("      Parsed tariff: {}", summary.tariff_per_kwh);
    println!("      Total:         {}", summary.formatted_cost());

    println!("\n==============================================\n");
}

fn print_row(appliance: &Appliance, symbol: &str) {
    let cost = appliance_cost(appliance, DEFAULT_TARIFF_PER_KWH);
    println!(
        "  {:<12} | {:>7.2} | {:>7.1} | {}",
        appliance.name(),
        cost.daily_kwh,
        cost.monthly_kwh,
        format_cost(symbol, cost.monthly_cost)
    );
}
