// PostgreSQL SqlExecutor Implementation

use async_trait::async_trait;
use jobboard_core::error::{AppError, Result};
use jobboard_core::port::{Row, SqlExecutor, SqlValue};
use sqlx::postgres::{PgArguments, PgColumn, PgPool, PgRow};
use sqlx::query::Query;
use sqlx::{Column, Postgres, Row as _, TypeInfo};
use tracing::{debug, warn};

/// Convert sqlx::Error to AppError
///
/// Driver failures are not classified: the database message (and SQLSTATE,
/// when present) is carried through unchanged.
pub fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => AppError::Database(format!("{} (SQLSTATE {})", db_err.message(), code)),
            None => AppError::Database(db_err.message().to_string()),
        },
        sqlx::Error::Configuration(e) => AppError::Config(e.to_string()),
        sqlx::Error::ColumnDecode { index, source } => {
            AppError::Internal(format!("Failed to decode column {}: {}", index, source))
        }
        _ => {
            // Connection, pool, protocol errors
            AppError::Database(err.to_string())
        }
    }
}

/// Runs statements built by jobboard-core against a PostgreSQL pool
#[derive(Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SqlExecutor for PgExecutor {
    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        let query = params
            .iter()
            .fold(sqlx::query(sql), |query, value| bind_value(query, value));

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            warn!(error = %e, "Statement failed");
            map_sqlx_error(e)
        })?;

        debug!(rows = rows.len(), "Statement executed");
        rows.iter().map(decode_row).collect()
    }
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        // Untyped NULL goes out as INT8; every nullable column written here
        // (salary, equity) accepts it through an assignment cast
        SqlValue::Null => query.bind(None::<i64>),
        SqlValue::Bool(v) => query.bind(*v),
        SqlValue::Int(v) => query.bind(*v),
        SqlValue::Float(v) => query.bind(*v),
        SqlValue::Text(v) => query.bind(v.clone()),
    }
}

fn decode_row(row: &PgRow) -> Result<Row> {
    row.columns()
        .iter()
        .map(|column| Ok((column.name().to_string(), decode_column(row, column)?)))
        .collect()
}

fn decode_column(row: &PgRow, column: &PgColumn) -> Result<SqlValue> {
    let idx = column.ordinal();
    let decoded = match column.type_info().name() {
        "BOOL" => row.try_get::<Option<bool>, _>(idx).map(SqlValue::from),
        "INT2" => row
            .try_get::<Option<i16>, _>(idx)
            .map(|v| SqlValue::from(v.map(i64::from))),
        "INT4" => row
            .try_get::<Option<i32>, _>(idx)
            .map(|v| SqlValue::from(v.map(i64::from))),
        "INT8" => row.try_get::<Option<i64>, _>(idx).map(SqlValue::from),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(idx)
            .map(|v| SqlValue::from(v.map(f64::from))),
        "FLOAT8" => row.try_get::<Option<f64>, _>(idx).map(SqlValue::from),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(idx).map(SqlValue::from)
        }
        other => {
            return Err(AppError::Internal(format!(
                "Unsupported column type {} for column {}",
                other,
                column.name()
            )))
        }
    };

    decoded.map_err(map_sqlx_error)
}
