//! Shared fixtures for the live-PostgreSQL tests
//!
//! Tests run only when `JOBBOARD_DATABASE_URL` is set. Each test gets its own
//! schema (via `search_path`), so test binaries can run concurrently.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Once};
use std::time::{SystemTime, UNIX_EPOCH};

use jobboard_core::application::SqlJobRepository;
use jobboard_core::domain::{JobId, NewJob};
use jobboard_core::port::JobRepository;
use jobboard_infra_postgres::{create_pool, DatabaseSettings, PgExecutor};
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

const SCHEMA_SQL: &str = r#"
CREATE TABLE companies (
    handle VARCHAR(25) PRIMARY KEY CHECK (handle = lower(handle)),
    name TEXT UNIQUE NOT NULL,
    num_employees INTEGER CHECK (num_employees >= 0),
    description TEXT NOT NULL,
    logo_url TEXT
);

CREATE TABLE jobs (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    salary INTEGER CHECK (salary >= 0),
    equity NUMERIC CHECK (equity <= 1.0),
    company_handle VARCHAR(25) NOT NULL
        REFERENCES companies ON DELETE CASCADE
);
"#;

static TRACING: Once = Once::new();
static SCHEMA_COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("jobboard=debug,warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

pub struct TestDb {
    admin: PgPool,
    pub pool: PgPool,
    pub repo: SqlJobRepository,
    schema: String,
}

impl TestDb {
    /// Returns None (and the test should return early) without a database
    pub async fn setup() -> Option<Self> {
        init_tracing();

        let settings = match DatabaseSettings::from_env() {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Skipping live database test: {}", e);
                return None;
            }
        };

        let admin = create_pool(&settings).await.expect("connect to test database");

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock after epoch")
            .subsec_nanos();
        let schema = format!(
            "jobboard_test_{}_{}_{}",
            std::process::id(),
            SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst),
            nanos
        );
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await
            .expect("create test schema");

        let scoped = DatabaseSettings {
            url: with_search_path(&settings.url, &schema),
            ..settings
        };
        let pool = create_pool(&scoped).await.expect("connect to test schema");

        for statement in SCHEMA_SQL.split(';') {
            let statement = statement.trim();
            if !statement.is_empty() {
                sqlx::query(statement)
                    .execute(&pool)
                    .await
                    .expect("create test tables");
            }
        }

        let repo = SqlJobRepository::new(Arc::new(PgExecutor::new(pool.clone())));
        Some(Self {
            admin,
            pool,
            repo,
            schema,
        })
    }

    /// Companies c1..c3 and four jobs; returns job ids by title
    pub async fn seed(&self) -> HashMap<String, JobId> {
        for (handle, name, employees) in [("c1", "C1", 1), ("c2", "C2", 2), ("c3", "C3", 3)] {
            sqlx::query(
                "INSERT INTO companies (handle, name, num_employees, description, logo_url)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(handle)
            .bind(name)
            .bind(employees)
            .bind(format!("Desc{}", &handle[1..]))
            .bind(format!("http://{}.img", handle))
            .execute(&self.pool)
            .await
            .expect("insert company");
        }

        let jobs = [
            ("J1", Some(100), Some(0.1), "c1"),
            ("J2", Some(200), Some(0.2), "c1"),
            ("J3", Some(300), Some(0.0), "c1"),
            ("Senior Engineer", Some(90_000), None, "c2"),
        ];

        let mut ids = HashMap::new();
        for (title, salary, equity, handle) in jobs {
            let job = self
                .repo
                .create(&NewJob {
                    title: title.to_string(),
                    salary,
                    equity,
                    company_handle: handle.to_string(),
                })
                .await
                .expect("insert job");
            ids.insert(title.to_string(), job.id);
        }
        ids
    }

    pub async fn job_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await
            .expect("count jobs")
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop test schema");
        self.admin.close().await;
    }
}

fn with_search_path(url: &str, schema: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}options=-c%20search_path%3D{}", url, separator, schema)
}
