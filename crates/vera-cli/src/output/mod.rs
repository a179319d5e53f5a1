use serde::Serialize;
use serde_json::Value;
use vera_pipeline::AnalysisReport;

use crate::cli::OutputFormat;
use crate::ui;

pub mod card;
pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// Table output flattens nested objects into dotted keys.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let mut rows = Vec::new();
            flatten("", &serde_json::to_value(value)?, &mut rows);
            Ok(table::render_key_value_table(
                &rows,
                table::TableOptions {
                    max_width: prefs.term_width,
                    color: prefs.color,
                },
            ))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print an analysis outcome: a verdict card for table output, `payload`
/// (which carries the report plus metadata) for JSON output.
pub fn output_report<T: Serialize>(
    report: &AnalysisReport,
    payload: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        let prefs = ui::prefs();
        println!(
            "{}",
            card::render_report_card(
                report,
                card::CardOptions {
                    width: prefs.term_width,
                    color: prefs.color,
                },
            )
        );
        return Ok(());
    }
    output(payload, format)
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, rows);
            }
        }
        Value::Array(items) if items.iter().all(|item| !item.is_object()) => {
            let cells = items.iter().map(value_to_cell).collect::<Vec<_>>();
            rows.push((prefix.to_string(), cells.join(", ")));
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(&format!("{prefix}[{index}]"), item, rows);
            }
        }
        scalar => {
            let key = if prefix.is_empty() { "value" } else { prefix };
            rows.push((key.to_string(), value_to_cell(scalar)));
        }
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}
