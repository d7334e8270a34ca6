//! Unified application error type.
//! Every module (db, cli, config, output) returns AppError so failures
//! reach the caller instead of being swallowed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("No active database connection")]
    NotConnected,

    #[error("SQL file not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    // ---------------------------
    // Row access
    // ---------------------------
    #[error("No such column: {0}")]
    Column(String),

    #[error("Cannot convert column '{column}': {message}")]
    Conversion { column: String, message: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Output
    // ---------------------------
    #[error("Output error: {0}")]
    Output(String),
}

pub type AppResult<T> = Result<T, AppError>;
