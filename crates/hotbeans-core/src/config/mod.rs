//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod chat;
pub mod database;
pub mod limits;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::chat::ChatConfig;
pub use self::database::DatabaseConfig;
pub use self::limits::ListLimits;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Environment variable prefix for structured overrides (`HOTBEANS__SERVER__PORT`).
pub const ENV_PREFIX: &str = "HOTBEANS";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Upload and image directories.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Chat history settings.
    #[serde(default)]
    pub chat: ChatConfig,
    /// Server-side caps on list endpoints.
    #[serde(default)]
    pub limits: ListLimits,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest precedence first: `config/default.toml`,
    /// `config/{env}.toml`, `HOTBEANS__*` variables, and finally the plain
    /// `DATABASE_URL` / `DB_NAME` variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.name", std::env::var("DB_NAME").ok())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot start a server.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration(
                "database.url is required (set DATABASE_URL)",
            ));
        }
        if self.chat.default_history_limit == 0 || self.chat.max_history_limit == 0 {
            return Err(AppError::configuration("chat history limits must be positive"));
        }
        Ok(())
    }
}
