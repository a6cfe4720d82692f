//! Database configuration module.
//!
//! Configuration is loaded once at process start from environment variables
//! and injected into whatever constructs the stores. There is no ambient
//! global state: a missing or blank variable fails fast instead of letting
//! the process limp along toward connection errors.

use std::env;

/// Database configuration.
///
/// Three externally supplied values: where the database lives, and the
/// principal/credential pair used to reach it.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::from_env()?;
/// let provider = ConnectionProvider::new(config);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database URL, e.g. `sqlite://./storekeep.db`.
    pub url: String,

    /// Principal used to reach the database.
    ///
    /// SQLite does not authenticate connections; the principal and credential
    /// ride along in the config so deployments can point the same settings at
    /// a server database.
    pub username: String,

    /// Credential for the principal.
    pub password: String,
}

impl DbConfig {
    /// Creates a configuration from explicit values.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        DbConfig {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Loads configuration from the `DB_URL`, `DB_USER` and `DB_PASSWORD`
    /// environment variables.
    ///
    /// Each value is trimmed. A missing variable yields
    /// [`ConfigError::MissingRequired`]; a value that is blank after trimming
    /// yields [`ConfigError::InvalidValue`]. Never proceeds with defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(DbConfig {
            url: read_required("DB_URL")?,
            username: read_required("DB_USER")?,
            password: read_required("DB_PASSWORD")?,
        })
    }
}

/// Reads one required environment variable, trimmed.
fn read_required(key: &str) -> Result<String, ConfigError> {
    let raw = env::var(key).map_err(|_| ConfigError::MissingRequired(key.to_string()))?;
    let value = raw.trim();
    if value.is_empty() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(value.to_string())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
