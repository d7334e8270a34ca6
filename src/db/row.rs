//! Materialized result rows.
//!
//! A [`Row`] owns its values and shares the column names with every other
//! row of the same result, so columns are addressable by position and by
//! name long after the statement that produced them is gone.

use crate::errors::{AppError, AppResult};
use rusqlite::types::{FromSql, FromSqlError, Value, ValueRef};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::Index;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

/// Something that can locate a column inside a [`Row`].
pub trait RowIndex {
    fn position(&self, row: &Row) -> Option<usize>;

    /// Human-readable form used in error messages.
    fn describe(&self) -> String;
}

impl RowIndex for usize {
    fn position(&self, row: &Row) -> Option<usize> {
        (*self < row.len()).then_some(*self)
    }

    fn describe(&self) -> String {
        format!("#{self}")
    }
}

impl RowIndex for &str {
    // SQLite matches column names case-insensitively; so do we.
    fn position(&self, row: &Row) -> Option<usize> {
        row.columns.iter().position(|c| c.eq_ignore_ascii_case(self))
    }

    fn describe(&self) -> String {
        (*self).to_string()
    }
}

impl Row {
    pub(crate) fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Raw value at `idx`, by position or by column name.
    pub fn value<I: RowIndex>(&self, idx: I) -> Option<&Value> {
        idx.position(self).map(|i| &self.values[i])
    }

    /// Typed access, converting through rusqlite's `FromSql`.
    pub fn get<I: RowIndex, T: FromSql>(&self, idx: I) -> AppResult<T> {
        let i = idx
            .position(self)
            .ok_or_else(|| AppError::Column(idx.describe()))?;

        T::column_result(ValueRef::from(&self.values[i])).map_err(|e| AppError::Conversion {
            column: self.columns[i].clone(),
            message: match e {
                FromSqlError::InvalidType => {
                    format!("unexpected {} value", self.values[i].data_type())
                }
                other => other.to_string(),
            },
        })
    }

    /// `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl Index<usize> for Row {
    type Output = Value;

    fn index(&self, idx: usize) -> &Value {
        &self.values[idx]
    }
}

impl Index<&str> for Row {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.value(name)
            .unwrap_or_else(|| panic!("no column named '{name}' in row"))
    }
}

struct SqlValue<'a>(&'a Value);

impl Serialize for SqlValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_none(),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Real(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Blob(b) => serializer.serialize_bytes(b),
        }
    }
}

/// Serialized as an object keyed by column name, in column order.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &SqlValue(value))?;
        }
        map.end()
    }
}
