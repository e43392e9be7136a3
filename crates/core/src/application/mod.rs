// Application Layer - Use cases over the ports

pub mod job_repository;

// Re-exports
pub use job_repository::SqlJobRepository;
