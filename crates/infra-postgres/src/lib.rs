// Jobboard Infrastructure - PostgreSQL Adapter
// Implements: SqlExecutor (statements built by jobboard-core)

mod connection;
mod executor;
mod settings;

pub use settings::DatabaseSettings;
pub use connection::create_pool;
pub use executor::{map_sqlx_error, PgExecutor};

// Note: sqlx::Error conversion is a free function rather than a From impl
// due to Rust's orphan rules (AppError lives in jobboard-core)
