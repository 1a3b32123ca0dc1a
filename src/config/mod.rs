//! Application configuration module
//!
//! Configuration is read from environment variables using the `config` and
//! `dotenvy` crates. Variables carry the `RECORDING_SESSIONS` prefix and nested
//! values are separated by a double underscore.
//!
//! # Example
//!
//! ```no_run
//! use recording_sessions::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod queue;
mod server;
mod storage;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use queue::{QueueBackend, QueueConfig};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, rooms)
    #[serde(default)]
    pub server: ServerConfig,

    /// Which store backs sessions, sources, media and jobs
    #[serde(default)]
    pub storage: StorageConfig,

    /// PostgreSQL connection, used when storage is `postgres`
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Job queue transport
    #[serde(default)]
    pub queue: QueueConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `RECORDING_SESSIONS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RECORDING_SESSIONS__STORAGE__BACKEND=postgres` -> `storage.backend`
    /// - `RECORDING_SESSIONS__QUEUE__URL=redis://...` -> `queue.url`
    ///
    /// A `.env` file is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RECORDING_SESSIONS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Database settings are only checked when the postgres backend is
    /// selected. Production refuses the in-memory store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if self.storage.is_postgres() {
            self.database.validate()?;
        } else if self.is_production() {
            return Err(ValidationError::MemoryStorageInProduction);
        }
        self.queue.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "RECORDING_SESSIONS__SERVER__PORT",
        "RECORDING_SESSIONS__SERVER__ENVIRONMENT",
        "RECORDING_SESSIONS__SERVER__ROOM_CAPACITY",
        "RECORDING_SESSIONS__STORAGE__BACKEND",
        "RECORDING_SESSIONS__DATABASE__URL",
        "RECORDING_SESSIONS__QUEUE__BACKEND",
        "RECORDING_SESSIONS__QUEUE__NAME",
        "RECORDING_SESSIONS__QUEUE__URL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_with_no_variables_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.queue.backend, QueueBackend::Memory);
        assert_eq!(config.queue.name, "transcode");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_postgres_and_redis() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("RECORDING_SESSIONS__STORAGE__BACKEND", "postgres"),
            (
                "RECORDING_SESSIONS__DATABASE__URL",
                "postgresql://test@localhost/test",
            ),
            ("RECORDING_SESSIONS__QUEUE__BACKEND", "redis"),
            ("RECORDING_SESSIONS__QUEUE__URL", "redis://localhost:6379"),
            ("RECORDING_SESSIONS__QUEUE__NAME", "mobile-transcode"),
        ])
        .unwrap();

        assert!(config.storage.is_postgres());
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.queue.backend, QueueBackend::Redis);
        assert_eq!(config.queue.name, "mobile-transcode");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_postgres_without_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("RECORDING_SESSIONS__STORAGE__BACKEND", "postgres")]).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_production_refuses_memory_storage() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config =
            load_with(&[("RECORDING_SESSIONS__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MemoryStorageInProduction)
        ));
    }

    #[test]
    fn test_custom_port_and_room_capacity() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("RECORDING_SESSIONS__SERVER__PORT", "3000"),
            ("RECORDING_SESSIONS__SERVER__ROOM_CAPACITY", "16"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.room_capacity, 16);
    }
}
