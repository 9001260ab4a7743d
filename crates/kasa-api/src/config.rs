//! # API Configuration
//!
//! Connection settings for the normalization backend.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KASA_*`)
//! 2. Defaults (this file)
//!
//! The client is stateless beyond these two values; there is no config
//! file or database tier.

use tracing::warn;
use url::Url;

use kasa_core::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

use crate::error::{TransportError, TransportResult};

/// Backend connection configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend. Always ends with a trailing slash so
    /// endpoint joins stay inside the configured path.
    pub base_url: Url,

    /// Number of receipts requested from the list endpoint, clamped to
    /// the backend's upper bound.
    pub list_limit: u32,
}

impl ApiConfig {
    /// Creates a config for the given base URL.
    pub fn new(base_url: &str) -> TransportResult<Self> {
        let mut url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(base_url.to_string()));
        }
        // Normalize so `Url::join` treats the configured path as a prefix:
        // "http://host/api" would otherwise join "receipts" as "/receipts".
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Ok(ApiConfig {
            base_url: url,
            list_limit: DEFAULT_LIST_LIMIT,
        })
    }

    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KASA_API_URL`: Backend base URL
    /// - `KASA_LIST_LIMIT`: Receipt list size (clamped to the server cap)
    pub fn from_env() -> Self {
        let mut config = ApiConfig::default();

        if let Ok(base_url) = std::env::var("KASA_API_URL") {
            match ApiConfig::new(&base_url) {
                Ok(parsed) => config.base_url = parsed.base_url,
                Err(err) => warn!(%base_url, %err, "Ignoring invalid KASA_API_URL"),
            }
        }

        if let Ok(limit_str) = std::env::var("KASA_LIST_LIMIT") {
            match limit_str.parse::<u32>() {
                Ok(limit) => config.list_limit = limit.min(MAX_LIST_LIMIT),
                Err(_) => warn!(%limit_str, "Ignoring invalid KASA_LIST_LIMIT"),
            }
        }

        config
    }
}

impl Default for ApiConfig {
    /// Local development backend.
    fn default() -> Self {
        ApiConfig {
            base_url: Url::parse("http://127.0.0.1:8000/").expect("static URL parses"),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}
