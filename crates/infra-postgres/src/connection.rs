// PostgreSQL Connection Pool Setup

use crate::executor::map_sqlx_error;
use crate::settings::DatabaseSettings;
use jobboard_core::error::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

/// Create PostgreSQL connection pool from settings
pub async fn create_pool(settings: &DatabaseSettings) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect(&settings.url)
        .await
        .map_err(map_sqlx_error)?;

    info!(
        url = %settings.redacted_url(),
        max_connections = settings.max_connections,
        "Database pool created"
    );

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::ErrorKind;

    #[tokio::test]
    async fn test_create_pool_rejects_malformed_url() {
        let settings = DatabaseSettings {
            url: "not a database url".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
        };

        let err = create_pool(&settings).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
