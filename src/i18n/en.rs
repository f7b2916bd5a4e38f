//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Energy Bill Tracker".into());
    t.insert("app.goodbye".into(), "Goodbye".into());

    // List screen
    t.insert("list.tariff".into(), "Price per kWh".into());
    t.insert("list.monthly_cost".into(), "Monthly cost".into());
    t.insert("list.empty".into(), "No appliances yet".into());
    t.insert("list.power".into(), "Power".into());
    t.insert("list.daily_usage".into(), "Daily usage".into());
    t.insert("list.help".into(), "Commands: add, del <n>, kwh <price>, calc, json, quit".into());
    t.insert("list.no_such_entry".into(), "No appliance at that position".into());
    t.insert("list.unknown_command".into(), "Unknown command".into());

    // Add form
    t.insert("form.title".into(), "New appliance".into());
    t.insert("form.name".into(), "Appliance name".into());
    t.insert("form.power".into(), "Power (W)".into());
    t.insert("form.daily_usage".into(), "Daily usage (h)".into());
    t.insert("form.save".into(), "Save".into());
    t.insert("form.cancel".into(), "Cancel".into());

    // Units
    t.insert("unit.watts".into(), "W".into());
    t.insert("unit.hours_per_day".into(), "h/day".into());
    t.insert("unit.kilowatt_hours".into(), "kWh".into());
    t.insert("unit.per_month".into(), "/month".into());

    t
}
