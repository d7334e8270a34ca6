//! SQLite connector: one handle, opened and closed explicitly or scoped.

use crate::config::Config;
use crate::db::outcome::QueryOutcome;
use crate::db::row::Row;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use crate::utils::path::expand_tilde;
use rusqlite::types::Value;
use rusqlite::{Connection, Params};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DEFAULT_DB_NAME: &str = "library.db";
pub const DEFAULT_SCRIPT_NAME: &str = "create_tables.sql";

pub struct Connector {
    path: PathBuf,
    conn: Option<Connection>,
}

impl Default for Connector {
    fn default() -> Self {
        Self::new(DEFAULT_DB_NAME)
    }
}

impl Connector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: None,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(expand_tilde(&cfg.database))
    }

    /// Connect to `path`, run `func`, and close again on every exit path.
    pub fn session<T, F>(path: impl Into<PathBuf>, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connector) -> AppResult<T>,
    {
        let mut connector = Connector::new(path);
        connector.connect()?;
        let result = func(&mut connector);
        connector.close();
        result
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the database file; relative scripts resolve here.
    pub fn base_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn resolve_script(&self, script: impl AsRef<Path>) -> PathBuf {
        let script = script.as_ref();
        if script.is_absolute() {
            script.to_path_buf()
        } else {
            self.base_dir().join(script)
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Open the database file, creating it if needed.
    ///
    /// A handle that is already open is closed before the new one is made,
    /// so reconnecting never leaks the previous connection.
    pub fn connect(&mut self) -> AppResult<&Connection> {
        if self.conn.is_some() {
            warning(format!(
                "Already connected to {}, reopening.",
                self.path.display()
            ));
            self.close();
        }

        match Connection::open(&self.path) {
            Ok(conn) => {
                info(format!("Connected to database: {}", self.path.display()));
                Ok(&*self.conn.insert(conn))
            }
            Err(e) => {
                error(format!("Error connecting to database: {e}"));
                Err(AppError::Db(e))
            }
        }
    }

    /// Release the handle if one is held; silent no-op otherwise.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            match conn.close() {
                Ok(()) => success("Database connection closed."),
                Err((_, e)) => warning(format!("Error while closing database: {e}")),
            }
        }
    }

    /// Run one statement with positional binds and read every row it returns.
    ///
    /// Statements run in SQLite's autocommit mode: each one commits when it
    /// completes and is rolled back if it fails, and statements that refuse to
    /// run inside a transaction (`VACUUM`, `BEGIN`, `PRAGMA journal_mode`) work.
    /// A transaction the caller opened with `BEGIN` stays open on success and
    /// is rolled back on failure.
    pub fn execute_query<P: Params>(&mut self, query: &str, params: P) -> QueryOutcome {
        let Some(conn) = self.conn.as_ref() else {
            error("No active database connection.");
            return QueryOutcome::Failed(AppError::NotConnected);
        };

        match run_statement(conn, query, params) {
            Ok(rows) => QueryOutcome::from_rows(rows),
            Err(e) => {
                error(format!("Database query error: {e}"));
                if !conn.is_autocommit()
                    && let Err(rb) = conn.execute_batch("ROLLBACK")
                {
                    warning(format!("Rollback failed: {rb}"));
                }
                QueryOutcome::Failed(AppError::Db(e))
            }
        }
    }

    /// Run a text blob of `;`-separated statements as one transaction.
    ///
    /// The script must not open or commit transactions of its own.
    pub fn execute_script(&mut self, script: &str) -> QueryOutcome {
        let Some(conn) = self.conn.as_mut() else {
            error("No active database connection.");
            return QueryOutcome::Failed(AppError::NotConnected);
        };

        let result = conn.transaction().and_then(|tx| {
            tx.execute_batch(script)?;
            tx.commit()
        });

        match result {
            Ok(()) => QueryOutcome::Empty,
            Err(e) => {
                error(format!("Database query error: {e}"));
                QueryOutcome::Failed(AppError::Db(e))
            }
        }
    }

    /// Load a schema script (relative paths resolve next to the database)
    /// and run it.
    pub fn create_tables(&mut self, script: impl AsRef<Path>) -> AppResult<()> {
        let path = self.resolve_script(script);
        if !path.exists() {
            error(format!("SQL file not found: {}", path.display()));
            return Err(AppError::ScriptNotFound(path));
        }

        let sql = fs::read_to_string(&path)?;
        self.execute_script(&sql).into_result()?;

        success("Tables created/updated successfully.");
        Ok(())
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        let conn = self.conn.as_mut().ok_or(AppError::NotConnected)?;
        Ok(func(conn)?)
    }
}

impl Drop for Connector {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            let _ = conn.close();
        }
    }
}

fn run_statement<P: Params>(
    conn: &Connection,
    query: &str,
    params: P,
) -> rusqlite::Result<Vec<Row>> {
    let mut stmt = conn.prepare(query)?;
    let columns: Arc<[String]> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    let mut out = Vec::new();
    let mut rows = stmt.query(params)?;
    while let Some(row) = rows.next()? {
        let values = (0..columns.len())
            .map(|i| row.get::<_, Value>(i))
            .collect::<rusqlite::Result<Vec<_>>>()?;
        out.push(Row::new(Arc::clone(&columns), values));
    }
    Ok(out)
}
