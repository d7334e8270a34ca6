//! Rendering of result rows for the terminal: aligned table, JSON or CSV.

use crate::db::Row;
use crate::errors::{AppError, AppResult};
use crate::utils::table::Table;
use clap::ValueEnum;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Text form of a value; `null_text` is what NULL becomes.
pub fn display_value(value: &Value, null_text: &str) -> String {
    match value {
        Value::Null => null_text.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

pub fn render(rows: &[Row], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json => render_json(rows),
        OutputFormat::Csv => render_csv(rows),
    }
}

pub fn render_table(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let mut table = Table::with_headers(first.columns());
    for row in rows {
        table.add_row(row.values().iter().map(|v| display_value(v, "NULL")).collect());
    }
    table.render()
}

pub fn render_json(rows: &[Row]) -> AppResult<String> {
    serde_json::to_string_pretty(rows).map_err(|e| AppError::Output(format!("JSON: {e}")))
}

/// One row as a single-line JSON object.
pub fn row_json(row: &Row) -> AppResult<String> {
    serde_json::to_string(row).map_err(|e| AppError::Output(format!("JSON: {e}")))
}

pub fn render_csv(rows: &[Row]) -> AppResult<String> {
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(first.columns())
        .map_err(|e| AppError::Output(format!("CSV write error: {e}")))?;

    for row in rows {
        wtr.write_record(row.values().iter().map(|v| display_value(v, "")))
            .map_err(|e| AppError::Output(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Output(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Output(format!("CSV encoding error: {e}")))
}
