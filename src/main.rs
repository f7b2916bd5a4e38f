//! Appliance Cost - Main entry point
//!
//! Line-based terminal front end: a list screen showing the appliances and
//! the monthly total, and an add form that prompts for each field.

use anyhow::Context;
use appliance_cost_lib::app::{App, Screen};
use appliance_cost_lib::core::Config;
use appliance_cost_lib::i18n::I18n;
use appliance_cost_lib::pricing::format_cost;
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Appliance Cost v{}", env!("CARGO_PKG_VERSION"));

    // Load or create configuration
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let i18n = I18n::new(&config.general.language);
    let mut app = App::new(&config);

    let stdin = io::stdin();
    run(&mut app, &i18n, &mut stdin.lock(), &mut io::stdout())
}

/// Drive the screens until the user quits or input ends
fn run(
    app: &mut App,
    i18n: &I18n,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    loop {
        let keep_going = match app.screen() {
            Screen::ListView => list_screen(app, i18n, input, out)?,
            Screen::AddForm => add_form(app, i18n, input, out)?,
        };
        if !keep_going {
            break;
        }
    }

    writeln!(out, "{}", i18n.get("app.goodbye"))?;
    Ok(())
}

/// Read one trimmed line; `None` at end of input
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read input")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt(
    label: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Option<String>> {
    write!(out, "{}: ", label)?;
    out.flush()?;
    read_line(input)
}

fn render_list(app: &App, i18n: &I18n, out: &mut impl Write) -> io::Result<()> {
    let summary = app.summary();

    writeln!(out)?;
    writeln!(out, "=== {} ===", i18n.get("app.title"))?;
    writeln!(
        out,
        "{}: {}    {}: {}",
        i18n.get("list.tariff"),
        app.tariff_text(),
        i18n.get("list.monthly_cost"),
        format_cost(&summary.currency_symbol, summary.monthly_cost)
    )?;
    writeln!(
        out,
        "{}: {:.1} {}",
        i18n.get("unit.kilowatt_hours"),
        summary.monthly_kwh,
        i18n.get("unit.per_month")
    )?;
    writeln!(out, "----------------------------------------------")?;

    if app.registry().is_empty() {
        writeln!(out, "  {}", i18n.get("list.empty"))?;
    }
    for (pos, (_, appliance)) in app.registry().iter().enumerate() {
        writeln!(
            out,
            "  {:>2}. {:<20} {}: {}{}  {}: {}{}",
            pos + 1,
            appliance.name(),
            i18n.get("list.power"),
            appliance.power_watts(),
            i18n.get("unit.watts"),
            i18n.get("list.daily_usage"),
            appliance.daily_usage_hours(),
            i18n.get("unit.hours_per_day"),
        )?;
    }

    writeln!(out, "----------------------------------------------")?;
    writeln!(out, "{}", i18n.get("list.help"))?;
    Ok(())
}

/// Handle one command on the list screen. Returns false to quit.
fn list_screen(
    app: &mut App,
    i18n: &I18n,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    render_list(app, i18n, out)?;

    let Some(line) = prompt(">", input, out)? else {
        return Ok(false);
    };
    let line = line.trim();
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

    match command {
        "" => {}
        "quit" | "q" => return Ok(false),
        "add" | "a" => app.open_add_form(),
        "calc" | "c" => {
            app.recompute();
        }
        "kwh" | "k" => {
            app.set_tariff_text(arg.trim());
            app.recompute();
        }
        "del" | "d" => {
            let id = arg
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|pos| pos.checked_sub(1))
                .and_then(|index| app.registry().id_at(index));
            match id {
                Some(id) => {
                    app.delete(id);
                }
                None => writeln!(out, "{}", i18n.get("list.no_such_entry"))?,
            }
        }
        "json" | "j" => {
            let json = serde_json::to_string_pretty(app.summary())?;
            writeln!(out, "{}", json)?;
        }
        _ => writeln!(out, "{}: {}", i18n.get("list.unknown_command"), command)?,
    }

    Ok(true)
}

/// Prompt for the form fields, then save or cancel. Returns false at end of input.
fn add_form(
    app: &mut App,
    i18n: &I18n,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    writeln!(out)?;
    writeln!(out, "=== {} ===", i18n.get("form.title"))?;

    let fields = [
        i18n.get("form.name"),
        i18n.get("form.power"),
        i18n.get("form.daily_usage"),
    ];
    let mut values = Vec::with_capacity(fields.len());
    for label in &fields {
        match prompt(label, input, out)? {
            Some(value) => values.push(value),
            None => {
                app.cancel_form();
                return Ok(false);
            }
        }
    }

    let form = app.form_mut();
    form.name = values[0].clone();
    form.power = values[1].clone();
    form.daily_usage = values[2].clone();

    let confirm = format!("{} (s) / {} (c)", i18n.get("form.save"), i18n.get("form.cancel"));
    let answer = prompt(&confirm, input, out)?;
    match answer.as_deref().map(str::trim) {
        Some("s") | Some("S") => {
            app.save_form();
        }
        Some(_) => app.cancel_form(),
        None => {
            app.cancel_form();
            return Ok(false);
        }
    }

    Ok(true)
}
