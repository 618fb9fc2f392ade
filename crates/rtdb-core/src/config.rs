//! Configuration types and loading

use serde::{Deserialize, Serialize};

use crate::reference::Reference;
use crate::result::RtdbResult;

/// Environment variable holding the database URL
pub const DATABASE_URL_ENV: &str = "FIREBASE_DATABASE_URL";

/// Connection settings for one database instance
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Root URL of the database, e.g. `https://<project>.firebaseio.com`
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9000".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl DatabaseConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(DATABASE_URL_ENV)
            .map_err(|_| ConfigError::MissingEnvVar(DATABASE_URL_ENV.to_string()))?;

        let config = Self::with_url(url.trim());
        config.root_reference().map_err(|e| ConfigError::InvalidValue {
            key: DATABASE_URL_ENV.to_string(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Reference to the root of the configured database
    pub fn root_reference(&self) -> RtdbResult<Reference> {
        Ok(Reference::parse(&self.url)?.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_emulator() {
        let config = DatabaseConfig::default();
        let root = config.root_reference().unwrap();
        assert!(root.is_root());
        assert_eq!(root.uri().as_str(), "http://localhost:9000/");
    }

    #[test]
    fn test_root_reference_drops_path() {
        let config = DatabaseConfig::with_url("https://database-name.firebaseio.com/some/path");
        let root = config.root_reference().unwrap();
        assert_eq!(root.uri().as_str(), "https://database-name.firebaseio.com/");
    }

    #[test]
    fn test_invalid_url() {
        let config = DatabaseConfig::with_url("not a url");
        assert!(config.root_reference().is_err());
    }

    #[test]
    fn test_deserialize() {
        let config: DatabaseConfig =
            serde_json::from_str(r#"{"url": "https://database-name.firebaseio.com"}"#).unwrap();
        assert_eq!(config.url, "https://database-name.firebaseio.com");
    }
}
