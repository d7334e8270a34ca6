//! Default schema script shipped with the binary.

use crate::errors::AppResult;
use std::fs;
use std::path::Path;

pub const DEFAULT_SCHEMA: &str = include_str!("../../sql/create_tables.sql");

/// Write the default schema to `path` unless a script is already there.
/// Returns `true` when the file was written.
pub fn ensure_script(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, DEFAULT_SCHEMA)?;
    Ok(true)
}
