pub mod add;
pub mod config;
pub mod db;
pub mod demo;
pub mod init;
pub mod list;
pub mod query;

use crate::db::Row;
use crate::errors::AppResult;
use crate::output::{self, OutputFormat};
use crate::ui::messages::info;

/// Print query results in the requested format.
pub(crate) fn print_rows(rows: &[Row], format: OutputFormat) -> AppResult<()> {
    if rows.is_empty() && format == OutputFormat::Table {
        info("No rows.");
        return Ok(());
    }

    let out = output::render(rows, format)?;
    if !out.is_empty() {
        println!("{}", out.trim_end());
    }
    Ok(())
}
