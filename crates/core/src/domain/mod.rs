// Domain Layer - Entities and payloads

pub mod company;
pub mod error;
pub mod job;

// Re-exports
pub use company::{Company, CompanyHandle};
pub use error::DomainError;
pub use job::{Job, JobDetail, JobFilter, JobId, JobListing, JobUpdate, NewJob};
