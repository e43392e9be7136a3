// Jobboard Core - Domain Logic, Ports & SQL Builders
// NO database driver dependencies (statements run through port::SqlExecutor)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;
pub mod sql;

pub use error::{AppError, ErrorKind, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
