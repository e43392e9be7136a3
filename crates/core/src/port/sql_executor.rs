// SQL Executor Port (Interface)
//
// The only way core code reaches the store: a statement text with `$n`
// placeholders plus the values bound to them, in ordinal order.

use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde::Serialize;

/// A value bound to a positional parameter or read back from a result column
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "NULL",
            SqlValue::Bool(_) => "BOOL",
            SqlValue::Int(_) => "INT",
            SqlValue::Float(_) => "FLOAT",
            SqlValue::Text(_) => "TEXT",
        }
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v.into())
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

/// One result row: output column alias -> value, in select-list order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, SqlValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for adapters and tests
    pub fn with(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) {
        self.columns.push((column.into(), value.into()));
    }

    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    fn require(&self, column: &str) -> Result<&SqlValue> {
        self.get(column)
            .ok_or_else(|| AppError::Internal(format!("Column not found: {}", column)))
    }

    pub fn try_i64(&self, column: &str) -> Result<i64> {
        self.try_opt_i64(column)?
            .ok_or_else(|| AppError::Internal(format!("Column {} is NULL", column)))
    }

    pub fn try_opt_i64(&self, column: &str) -> Result<Option<i64>> {
        match self.require(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Int(v) => Ok(Some(*v)),
            other => Err(mismatch(column, "INT", other)),
        }
    }

    pub fn try_opt_f64(&self, column: &str) -> Result<Option<f64>> {
        match self.require(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Float(v) => Ok(Some(*v)),
            SqlValue::Int(v) => Ok(Some(*v as f64)),
            other => Err(mismatch(column, "FLOAT", other)),
        }
    }

    pub fn try_string(&self, column: &str) -> Result<String> {
        self.try_opt_string(column)?
            .ok_or_else(|| AppError::Internal(format!("Column {} is NULL", column)))
    }

    pub fn try_opt_string(&self, column: &str) -> Result<Option<String>> {
        match self.require(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Text(v) => Ok(Some(v.clone())),
            other => Err(mismatch(column, "TEXT", other)),
        }
    }
}

impl FromIterator<(String, SqlValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, SqlValue)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

fn mismatch(column: &str, expected: &str, found: &SqlValue) -> AppError {
    AppError::Internal(format!(
        "Column {} type mismatch: expected {}, found {}",
        column,
        expected,
        found.type_name()
    ))
}

/// Executes one statement against the store
///
/// Parameters are bound by ordinal: `params[0]` is `$1`. Constraint
/// violations, connectivity and syntax failures come back as
/// `AppError::Database` and are not classified further.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>>;
}
