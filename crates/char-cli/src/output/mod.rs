use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::Table;

/// Render a response in the requested format.
///
/// `table` shapes the response for `--format table`; JSON formats serialize
/// the response as-is.
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<String>
where
    T: Serialize,
    F: FnOnce(&T) -> Table,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table(value).render(table_options())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response with a command-specific table layout.
pub fn output_with<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> Table,
{
    println!("{}", render(value, format, table)?);
    Ok(())
}

/// Print a response, using a generic key/value table for `--format table`.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let json = serde_json::to_value(value)?;
    output_with(value, format, |_| value_table(&json))
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects become key/value rows, arrays of objects one row per element.
fn value_table(value: &Value) -> Table {
    match value {
        Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
            let mut headers = Vec::<String>::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
            let mut table = Table::new(headers.clone());
            for map in items.iter().filter_map(Value::as_object) {
                table.push_row(
                    headers
                        .iter()
                        .map(|h| map.get(h).map_or_else(|| "-".to_string(), cell))
                        .collect(),
                );
            }
            table
        }
        Value::Array(items) => {
            let mut table = Table::new(["value"]);
            for item in items {
                table.push_row(vec![cell(item)]);
            }
            table
        }
        Value::Object(map) => {
            let mut table = Table::new(["key", "value"]);
            for (key, value) in map {
                table.push_row(vec![key.clone(), cell(value)]);
            }
            table
        }
        scalar => {
            let mut table = Table::new(["value"]);
            table.push_row(vec![cell(scalar)]);
            table
        }
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
