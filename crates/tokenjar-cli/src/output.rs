//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One row of a two-column field/value table.
#[derive(Debug, Clone, Tabled)]
pub struct Field {
    /// Field name
    #[tabled(rename = "Field")]
    pub name: String,
    /// Rendered value
    #[tabled(rename = "Value")]
    pub value: String,
}

impl Field {
    /// Builds a row.
    pub fn new(name: &str, value: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Print a record: `fields` as a table, or `item` as JSON.
pub fn print_record<T: Serialize>(item: &T, fields: Vec<Field>, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(fields)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}
