//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub database_path: String,
    pub classified_count: u32,
    pub max_images_per_classified: u32,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// This method is used internally to populate the singleton. It panics
    /// if required variables are missing or improperly formatted.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "motormart".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "seeder=info".into()),
            database_path: env::var("DATABASE_PATH").expect("DATABASE_PATH is required"),
            classified_count: env::var("SEED_CLASSIFIED_COUNT")
                .unwrap_or_else(|_| "50".into())
                .parse()
                .unwrap(),
            max_images_per_classified: env::var("SEED_MAX_IMAGES_PER_CLASSIFIED")
                .unwrap_or_else(|_| "6".into())
                .parse()
                .unwrap(),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock cannot be acquired.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap();
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    ///
    /// Used by public per-field setter methods.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    /// Override `env` value.
    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_project_name(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.project_name = value.into());
    }

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_classified_count(value: u32) {
        AppConfig::set_field(|cfg| cfg.classified_count = value);
    }

    pub fn set_max_images_per_classified(value: u32) {
        AppConfig::set_field(|cfg| cfg.max_images_per_classified = value);
    }
}

/// Returns the configured database path (or DSN) from the global config.
pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

/// Returns how many classified ads the seeder should generate.
pub fn classified_count() -> u32 {
    AppConfig::global().classified_count
}

/// Returns the upper bound of images generated per classified ad.
pub fn max_images_per_classified() -> u32 {
    AppConfig::global().max_images_per_classified
}
