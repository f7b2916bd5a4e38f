//! Portuguese translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Controle de conta de energia".into());
    t.insert("app.goodbye".into(), "At\u{00E9} logo".into());

    // List screen
    t.insert("list.tariff".into(), "Valor do kWh".into());
    t.insert("list.monthly_cost".into(), "Gasto do m\u{00EA}s".into());
    t.insert("list.empty".into(), "Nenhum aparelho cadastrado".into());
    t.insert("list.power".into(), "Pot\u{00EA}ncia".into());
    t.insert("list.daily_usage".into(), "Uso di\u{00E1}rio".into());
    t.insert("list.help".into(), "Comandos: add, del <n>, kwh <valor>, calc, json, quit".into());
    t.insert("list.no_such_entry".into(), "Nenhum aparelho nessa posi\u{00E7}\u{00E3}o".into());
    t.insert("list.unknown_command".into(), "Comando desconhecido".into());

    // Add form
    t.insert("form.title".into(), "Novo aparelho".into());
    t.insert("form.name".into(), "Nome do aparelho".into());
    t.insert("form.power".into(), "Pot\u{00EA}ncia (W)".into());
    t.insert("form.daily_usage".into(), "Uso di\u{00E1}rio (h)".into());
    t.insert("form.save".into(), "Salvar".into());
    t.insert("form.cancel".into(), "Cancelar".into());

    // Units
    t.insert("unit.watts".into(), "W".into());
    t.insert("unit.hours_per_day".into(), "h/dia".into());
    t.insert("unit.kilowatt_hours".into(), "kWh".into());
    t.insert("unit.per_month".into(), "/m\u{00EA}s".into());

    t
}
