//! Result of running a statement through the connector.

use crate::db::row::Row;
use crate::errors::{AppError, AppResult};

/// Distinguishes "rows came back", "ran fine, nothing to return" and
/// "the engine refused", which a bare list of rows cannot.
#[derive(Debug)]
pub enum QueryOutcome {
    Rows(Vec<Row>),
    Empty,
    Failed(AppError),
}

impl QueryOutcome {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        if rows.is_empty() {
            QueryOutcome::Empty
        } else {
            QueryOutcome::Rows(rows)
        }
    }

    /// Rows returned, or an empty slice for `Empty` and `Failed`.
    pub fn rows(&self) -> &[Row] {
        match self {
            QueryOutcome::Rows(rows) => rows.as_slice(),
            _ => &[],
        }
    }

    /// Lossy view: failures collapse into "no rows".
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            QueryOutcome::Rows(rows) => rows,
            _ => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, QueryOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            QueryOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_result(self) -> AppResult<Vec<Row>> {
        match self {
            QueryOutcome::Rows(rows) => Ok(rows),
            QueryOutcome::Empty => Ok(Vec::new()),
            QueryOutcome::Failed(e) => Err(e),
        }
    }
}
