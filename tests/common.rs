#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rcatalog::db::schema::DEFAULT_SCHEMA;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const LIVROS_SCRIPT: &str = "CREATE TABLE livros (
    id INTEGER PRIMARY KEY,
    titulo TEXT,
    autor TEXT,
    ano_publicacao INTEGER
);";

/// The binary, with its config directory pinned inside `home`.
pub fn rcat(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rcatalog");
    cmd.env(rcatalog::config::CONFIG_DIR_ENV, home);
    cmd
}

/// Scratch dir holding `library.db` and the default schema script.
pub fn setup_catalog() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("create_tables.sql"), DEFAULT_SCHEMA).expect("write schema");
    let db = dir.path().join("library.db");
    (dir, db)
}

pub fn db_arg(db: &Path) -> String {
    db.to_string_lossy().to_string()
}
