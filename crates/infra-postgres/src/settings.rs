// Database Settings (environment-driven)

use config::{Config, Environment};
use jobboard_core::error::{AppError, Result};
use serde::Deserialize;

const ENV_PREFIX: &str = "JOBBOARD_DATABASE";

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

/// Connection settings, read from `JOBBOARD_DATABASE_*`
///
/// - `JOBBOARD_DATABASE_URL` (required)
/// - `JOBBOARD_DATABASE_MAX_CONNECTIONS` (default 5)
/// - `JOBBOARD_DATABASE_ACQUIRE_TIMEOUT_SECS` (default 5)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(env: Environment) -> Result<Self> {
        let conf = Config::builder()
            .add_source(env.try_parsing(true))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;
        let settings: DatabaseSettings = conf
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if settings.max_connections == 0 {
            return Err(AppError::Config(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(settings)
    }

    /// URL with any password removed, safe to log
    pub fn redacted_url(&self) -> String {
        match (self.url.find("://"), self.url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                format!("{}://***{}", &self.url[..scheme_end], &self.url[at..])
            }
            _ => self.url.clone(),
        }
    }
}
