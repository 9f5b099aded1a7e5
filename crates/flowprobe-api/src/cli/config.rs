//! `flowprobe config` -- show the effective configuration.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use crate::state::AppState;

pub fn show_config(state: &AppState, json: bool) -> Result<()> {
    let probe = &state.config.probe;

    if json {
        let out = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "config_file": state.config_source.as_ref().map(|p| p.display().to_string()),
            "config": state.config,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Setting").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);

    let rows: [(&str, String); 10] = [
        ("runtime", probe.runtime.clone()),
        ("container", probe.container.clone()),
        ("interpreter", probe.interpreter.clone()),
        ("timeout_secs", probe.timeout_secs.to_string()),
        ("host", probe.host.clone()),
        ("port", probe.port.to_string()),
        ("path", probe.path.clone()),
        ("method", probe.method.clone()),
        ("api_key_header", probe.api_key_header.clone()),
        ("api_key_secret", probe.api_key_secret.clone()),
    ];
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }

    println!();
    println!("  {}", style("── Probe ──").dim());
    println!("{table}");
    println!();
    println!("  Data dir:    {}", style(state.data_dir.display()).dim());
    match &state.config_source {
        Some(path) => println!("  Config file: {}", style(path.display()).dim()),
        None => println!("  Config file: {}", style("(none, using defaults)").dim()),
    }
    println!();

    Ok(())
}
