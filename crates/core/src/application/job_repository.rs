// SQL-backed JobRepository Implementation
//
// Statement text is built here; execution goes through the SqlExecutor port.
// Column aliasing (company_handle -> "companyHandle", ...) lives in the query
// text. NUMERIC equity is read back as FLOAT8.

use crate::domain::{Company, Job, JobDetail, JobFilter, JobId, JobListing, JobUpdate, NewJob};
use crate::error::{AppError, Result};
use crate::port::{JobRepository, Row, SqlExecutor, SqlValue};
use crate::sql::{build_set_clause, ColumnOverrides, WhereClause};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

const ENTITY: &str = "job";

/// Editable job fields map 1:1 onto column names
const JOB_COLUMNS: ColumnOverrides = &[];

const JOB_RETURNING: &str =
    r#"id, title, salary, equity::FLOAT8 AS equity, company_handle AS "companyHandle""#;

const LISTING_SELECT: &str = r#"SELECT j.id,
       j.title,
       j.salary,
       j.equity::FLOAT8 AS equity,
       j.company_handle AS "companyHandle",
       c.name AS "companyName"
FROM jobs AS j
LEFT JOIN companies AS c ON c.handle = j.company_handle"#;

const COMPANY_SELECT: &str = r#"SELECT handle,
       name,
       description,
       num_employees AS "numEmployees",
       logo_url AS "logoUrl"
FROM companies
WHERE handle = $1"#;

pub struct SqlJobRepository {
    executor: Arc<dyn SqlExecutor>,
}

impl SqlJobRepository {
    pub fn new(executor: Arc<dyn SqlExecutor>) -> Self {
        Self { executor }
    }

    async fn run(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        debug!(sql = %sql, params = params.len(), "Executing statement");
        self.executor.execute(sql, params).await
    }
}

#[async_trait]
impl JobRepository for SqlJobRepository {
    async fn create(&self, job: &NewJob) -> Result<Job> {
        job.validate()?;

        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle)\n\
             VALUES ($1, $2, $3, $4)\n\
             RETURNING {}",
            JOB_RETURNING
        );
        let params = [
            SqlValue::from(job.title.as_str()),
            SqlValue::from(job.salary),
            SqlValue::from(job.equity),
            SqlValue::from(job.company_handle.as_str()),
        ];

        let rows = self.run(&sql, &params).await?;
        let row = rows
            .first()
            .ok_or_else(|| AppError::Internal("INSERT returned no row".to_string()))?;
        let created = job_from_row(row)?;

        info!(job_id = created.id, company = %created.company_handle, "Job created");
        Ok(created)
    }

    async fn find_all(&self, filter: &JobFilter) -> Result<Vec<JobListing>> {
        filter.validate()?;

        let mut clause = WhereClause::new();
        if let Some(min_salary) = filter.min_salary {
            clause.add_predicate("j.salary >= ?", [min_salary])?;
        }
        if filter.has_equity == Some(true) {
            clause.add_predicate("j.equity > 0", [] as [SqlValue; 0])?;
        }
        if let Some(title) = &filter.title {
            clause.add_predicate("j.title ILIKE ?", [format!("%{}%", title)])?;
        }

        let (where_sql, params) = clause.into_parts();
        let sql = format!("{}{}\nORDER BY j.title", LISTING_SELECT, where_sql);

        let rows = self.run(&sql, &params).await?;
        rows.iter().map(listing_from_row).collect()
    }

    async fn get(&self, id: JobId) -> Result<JobDetail> {
        let sql = format!("SELECT {}\nFROM jobs\nWHERE id = $1", JOB_RETURNING);
        let rows = self.run(&sql, &[SqlValue::Int(id)]).await?;
        let job = match rows.first() {
            Some(row) => job_from_row(row)?,
            None => return Err(AppError::not_found(ENTITY, id)),
        };

        // Separate read, not atomic with the one above
        let rows = self
            .run(COMPANY_SELECT, &[SqlValue::from(job.company_handle.as_str())])
            .await?;
        let company = rows.first().map(company_from_row).transpose()?;
        if company.is_none() {
            debug!(job_id = id, handle = %job.company_handle, "Company not found for job");
        }

        Ok(JobDetail::new(job, company))
    }

    async fn update(&self, id: JobId, changes: &JobUpdate) -> Result<Job> {
        changes.validate()?;

        let set = build_set_clause(&update_fields(changes), JOB_COLUMNS)?;
        let id_idx = set.values.len() + 1;
        let sql = format!(
            "UPDATE jobs\nSET {}\nWHERE id = ${}\nRETURNING {}",
            set.clause, id_idx, JOB_RETURNING
        );

        let mut params = set.values;
        params.push(SqlValue::Int(id));

        let rows = self.run(&sql, &params).await?;
        let updated = match rows.first() {
            Some(row) => job_from_row(row)?,
            None => return Err(AppError::not_found(ENTITY, id)),
        };

        info!(job_id = id, fields = id_idx - 1, "Job updated");
        Ok(updated)
    }

    async fn remove(&self, id: JobId) -> Result<()> {
        let rows = self
            .run("DELETE FROM jobs\nWHERE id = $1\nRETURNING id", &[SqlValue::Int(id)])
            .await?;
        if rows.is_empty() {
            return Err(AppError::not_found(ENTITY, id));
        }

        info!(job_id = id, "Job removed");
        Ok(())
    }

    async fn list_by_company(&self, handle: &str) -> Result<Vec<Job>> {
        let sql = format!(
            "SELECT {}\nFROM jobs\nWHERE company_handle = $1\nORDER BY id",
            JOB_RETURNING
        );
        let rows = self.run(&sql, &[SqlValue::from(handle)]).await?;
        rows.iter().map(job_from_row).collect()
    }
}

/// Present fields of the update, in a fixed order
fn update_fields(changes: &JobUpdate) -> Vec<(&'static str, SqlValue)> {
    let mut fields = Vec::with_capacity(3);
    if let Some(title) = &changes.title {
        fields.push(("title", SqlValue::from(title.as_str())));
    }
    if let Some(salary) = changes.salary {
        fields.push(("salary", SqlValue::Int(salary)));
    }
    if let Some(equity) = changes.equity {
        fields.push(("equity", SqlValue::Float(equity)));
    }
    fields
}

fn job_from_row(row: &Row) -> Result<Job> {
    Ok(Job {
        id: row.try_i64("id")?,
        title: row.try_string("title")?,
        salary: row.try_opt_i64("salary")?,
        equity: row.try_opt_f64("equity")?,
        company_handle: row.try_string("companyHandle")?,
    })
}

fn listing_from_row(row: &Row) -> Result<JobListing> {
    let job = job_from_row(row)?;
    Ok(JobListing {
        id: job.id,
        title: job.title,
        salary: job.salary,
        equity: job.equity,
        company_handle: job.company_handle,
        company_name: row.try_opt_string("companyName")?,
    })
}

fn company_from_row(row: &Row) -> Result<Company> {
    Ok(Company {
        handle: row.try_string("handle")?,
        name: row.try_string("name")?,
        description: row.try_string("description")?,
        num_employees: row.try_opt_i64("numEmployees")?,
        logo_url: row.try_opt_string("logoUrl")?,
    })
}
