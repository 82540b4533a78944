//! Application configuration.
//!
//! Loaded once at startup and injected into the services that need it, so no
//! component reads ambient environment state after boot.

use std::env;

/// Default page size used when refreshing the order cache.
pub const DEFAULT_ORDER_PAGE_SIZE: u32 = 100;

/// Runtime configuration for the sync client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the SQLite cache database.
    pub database_url: String,
    /// Base URL of the REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Bearer token attached to every request. Obtaining and storing the
    /// token is outside this crate; it is handed in already valid.
    pub api_token: String,
    /// Maximum number of orders fetched per refresh.
    pub order_page_size: u32,
}

/// Error raised when a required environment variable is missing.
#[derive(Debug, thiserror::Error)]
#[error("missing required environment variable: {0}")]
pub struct ConfigError(pub &'static str);

impl AppConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "pos_cache.db".to_string());
        let api_base_url = env::var("API_BASE_URL").map_err(|_| ConfigError("API_BASE_URL"))?;
        let api_token = env::var("API_TOKEN").map_err(|_| ConfigError("API_TOKEN"))?;
        let order_page_size = env::var("ORDER_PAGE_SIZE")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_ORDER_PAGE_SIZE);

        Ok(Self {
            database_url,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_token,
            order_page_size,
        })
    }
}
