// Job Domain Model

use super::company::{Company, CompanyHandle};
use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Job ID (assigned by the store)
pub type JobId = i64;

/// Job Entity as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<f64>,
    pub company_handle: CompanyHandle,
}

/// Job row from the listing query, with the joined company name
///
/// `company_name` is `None` when the handle matches no company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: JobId,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<f64>,
    pub company_handle: CompanyHandle,
    pub company_name: Option<String>,
}

/// Job detail view: the flat handle is replaced by the embedded company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: JobId,
    pub title: String,
    pub salary: Option<i64>,
    pub equity: Option<f64>,
    pub company: Option<Company>,
}

impl JobDetail {
    pub fn new(job: Job, company: Option<Company>) -> Self {
        Self {
            id: job.id,
            title: job.title,
            salary: job.salary,
            equity: job.equity,
            company,
        }
    }
}

/// Creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub equity: Option<f64>,
    pub company_handle: CompanyHandle,
}

impl NewJob {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_salary(self.salary)?;
        validate_equity(self.equity)?;
        if self.company_handle.trim().is_empty() {
            return Err(DomainError::Validation(
                "companyHandle must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Partial update payload
///
/// Only the editable fields exist here; `id` and `companyHandle` are
/// rejected at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity: Option<f64>,
}

impl JobUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none() && self.equity.is_none()
    }

    /// Checks the fields that are present; emptiness is not an error here
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        validate_salary(self.salary)?;
        validate_equity(self.equity)
    }
}

/// Search filters for listing jobs. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub min_salary: Option<i64>,
    /// `Some(true)` restricts to jobs with equity > 0; `Some(false)` is a no-op
    #[serde(default)]
    pub has_equity: Option<bool>,
}

impl JobFilter {
    pub fn validate(&self) -> Result<()> {
        if let Some(min) = self.min_salary {
            if min < 0 {
                return Err(DomainError::OutOfRange {
                    field: "minSalary",
                    value: min.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    Ok(())
}

fn validate_salary(salary: Option<i64>) -> Result<()> {
    match salary {
        Some(s) if s < 0 => Err(DomainError::OutOfRange {
            field: "salary",
            value: s.to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_equity(equity: Option<f64>) -> Result<()> {
    match equity {
        // NaN fails the range check too
        Some(e) if !(0.0..=1.0).contains(&e) => Err(DomainError::OutOfRange {
            field: "equity",
            value: e.to_string(),
        }),
        _ => Ok(()),
    }
}
