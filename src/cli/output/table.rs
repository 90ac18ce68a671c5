//! Table output formatting for CLI commands
//!
//! Renders resolved configuration as `key | value` rows and the plugin list
//! as an ordered table, using comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use serde_json::Value;
use std::env;

use crate::cli::output::truncate;

/// Width at which long values are cut in table cells.
const MAX_VALUE_LEN: usize = 80;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format a JSON tree as one row per leaf, keyed by its dotted path.
    ///
    /// Arrays of scalars are joined with `, `; arrays of objects are indexed
    /// (`plugins.0.name`). Empty arrays and objects render as `[]` and `{}`.
    pub fn format_config(&self, value: &Value) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Key").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        let mut rows = Vec::new();
        flatten(value, String::new(), &mut rows);

        for (key, rendered) in rows {
            let value_cell = if self.use_colors && rendered == "null" {
                Cell::new(&rendered).fg(Color::DarkGrey)
            } else {
                Cell::new(truncate(&rendered, MAX_VALUE_LEN))
            };
            table.add_row(vec![Cell::new(key), value_cell]);
        }

        table.to_string()
    }

    /// Format ordered `(name, options)` pairs, numbering rows from 1.
    pub fn format_plugins(&self, plugins: &[(String, Value)]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Plugin").add_attribute(Attribute::Bold),
            Cell::new("Options").add_attribute(Attribute::Bold),
        ]);

        for (position, (name, options)) in plugins.iter().enumerate() {
            let name_cell = if self.use_colors {
                Cell::new(name).fg(Color::Cyan)
            } else {
                Cell::new(name)
            };
            let options_text = if options.as_object().is_some_and(serde_json::Map::is_empty) {
                "-".to_string()
            } else {
                options.to_string()
            };

            table.add_row(vec![
                Cell::new(position + 1),
                name_cell,
                Cell::new(truncate(&options_text, MAX_VALUE_LEN)),
            ]);
        }

        table.to_string()
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        // Use UTF-8 preset for nice borders
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

fn flatten(value: &Value, prefix: String, rows: &mut Vec<(String, String)>) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };

    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, entry) in map {
                flatten(entry, join(key), rows);
            }
        }
        Value::Array(items) if items.iter().any(|item| item.is_object() || item.is_array()) => {
            for (index, item) in items.iter().enumerate() {
                flatten(item, join(&index.to_string()), rows);
            }
        }
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().map(scalar).collect();
            rows.push((prefix, format!("[{}]", joined.join(", "))));
        }
        other => rows.push((prefix, scalar(other))),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
