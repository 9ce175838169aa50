//! Connection settings for the planet store

use thiserror::Error;

/// Default connection URI
pub const DEFAULT_DB_HOST: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "holocron";

/// Errors raised while connecting the store
#[derive(Error, Debug)]
pub enum MongoConfigError {
    /// The connection URI could not be parsed or the client could not be built
    #[error("Invalid MongoDB connection settings: {0}")]
    InvalidUri(String),

    /// The startup index creation failed
    #[error("Failed to create indexes: {0}")]
    Index(String),
}

/// Where the planet store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    /// Connection URI, e.g. `mongodb://localhost:27017`
    pub uri: String,
    /// Database holding the `planets` collection
    pub database: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_DB_HOST.to_string(),
            database: DEFAULT_DB_NAME.to_string(),
        }
    }
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }

    /// Create settings from environment variables.
    ///
    /// Uses `DB_HOST` and `DB_NAME`, falling back to defaults if not set.
    pub fn from_env() -> Self {
        let uri = std::env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string());
        let database = std::env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());
        Self::new(uri, database)
    }
}
