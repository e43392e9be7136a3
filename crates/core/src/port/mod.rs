// Port Layer - Interfaces for external dependencies

pub mod job_repository;
pub mod sql_executor;

// Re-exports
pub use job_repository::JobRepository;
pub use sql_executor::{Row, SqlExecutor, SqlValue};

#[cfg(test)]
pub use sql_executor::MockSqlExecutor;
