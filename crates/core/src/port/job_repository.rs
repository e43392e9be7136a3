// Job Repository Port (Interface)

use crate::domain::{Job, JobDetail, JobFilter, JobId, JobListing, JobUpdate, NewJob};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Job persistence
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job; the store assigns the id
    async fn create(&self, job: &NewJob) -> Result<Job>;

    /// List jobs with their company name, ordered by title
    async fn find_all(&self, filter: &JobFilter) -> Result<Vec<JobListing>>;

    /// Fetch one job with its company embedded
    async fn get(&self, id: JobId) -> Result<JobDetail>;

    /// Apply a partial update and return the full updated row
    async fn update(&self, id: JobId, changes: &JobUpdate) -> Result<Job>;

    /// Delete a job
    async fn remove(&self, id: JobId) -> Result<()>;

    /// Jobs posted by one company, ordered by id
    async fn list_by_company(&self, handle: &str) -> Result<Vec<Job>>;
}
