//! PostgreSQL pool settings, read when `storage.backend = "postgres"`.

use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use super::error::ValidationError;

const MAX_POOL_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a free connection before a query fails
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Seconds an unused connection is kept; 0 keeps it forever
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Apply `migrations/` before serving
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Pool options for the recording store.
    pub fn pool_options(&self) -> PgPoolOptions {
        let idle = (self.idle_timeout_secs > 0).then(|| Duration::from_secs(self.idle_timeout_secs));
        PgPoolOptions::new()
            .min_connections(self.min_connections)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(idle)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        if !["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
        {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.acquire_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            run_migrations: false,
        }
    }
}

fn default_min_connections() -> u32 {
    2
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_fit_a_small_pool() {
        let config = DatabaseConfig::default();
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.max_connections, 10);
        assert!(!config.run_migrations);
    }

    #[test]
    fn pool_options_carry_sizes_and_timeouts() {
        let config = DatabaseConfig {
            min_connections: 1,
            max_connections: 4,
            acquire_timeout_secs: 7,
            idle_timeout_secs: 0,
            ..with_url("postgres://localhost/recordings")
        };
        let options = config.pool_options();

        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_max_connections(), 4);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(7));
        assert_eq!(options.get_idle_timeout(), None);
    }

    #[test]
    fn url_is_required_and_must_be_postgres() {
        assert!(matches!(
            DatabaseConfig::default().validate(),
            Err(ValidationError::MissingRequired(_))
        ));
        assert!(matches!(
            with_url("mysql://localhost/recordings").validate(),
            Err(ValidationError::InvalidDatabaseUrl)
        ));
        assert!(with_url("postgresql://user:pass@db:5432/recordings")
            .validate()
            .is_ok());
    }

    #[test]
    fn pool_bounds_are_checked() {
        let inverted = DatabaseConfig {
            min_connections: 8,
            max_connections: 4,
            ..with_url("postgres://localhost/recordings")
        };
        assert!(matches!(inverted.validate(), Err(ValidationError::InvalidPoolSize)));

        let oversized = DatabaseConfig {
            max_connections: MAX_POOL_SIZE + 1,
            ..with_url("postgres://localhost/recordings")
        };
        assert!(matches!(oversized.validate(), Err(ValidationError::PoolSizeTooLarge)));
    }

    #[test]
    fn zero_acquire_timeout_is_rejected() {
        let config = DatabaseConfig {
            acquire_timeout_secs: 0,
            ..with_url("postgres://localhost/recordings")
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }
}
