//! Runtime configuration, read from the process environment (and `.env` via dotenvy)

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_PAGE_PATH};
use std::time::Duration;
use url::Url;

pub const BASE_URL_VAR: &str = "LIKES_BASE_URL";
pub const PAGE_PATH_VAR: &str = "LIKES_PAGE_PATH";
pub const REQUEST_TIMEOUT_VAR: &str = "LIKES_REQUEST_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },

    #[error("{var} cannot be used as a base URL: {value}")]
    NotABase { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server root; toggle and page paths are joined onto it
    pub base_url: Url,
    /// Path of the rendered page listing the reflections
    pub page_path: String,
    /// Transport timeout for each request. `None` leaves reqwest's default.
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (env in production, maps in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base = non_empty(lookup(BASE_URL_VAR)).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_base)?;

        let page_path =
            non_empty(lookup(PAGE_PATH_VAR)).unwrap_or_else(|| DEFAULT_PAGE_PATH.to_string());

        let request_timeout = match non_empty(lookup(REQUEST_TIMEOUT_VAR)) {
            None => None,
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: REQUEST_TIMEOUT_VAR,
                        value,
                    })
                }
            },
        };

        Ok(Self {
            base_url,
            page_path,
            request_timeout,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the base URL, forcing a trailing slash so `Url::join` keeps the full path
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        var: BASE_URL_VAR,
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase {
            var: BASE_URL_VAR,
            value: raw.to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
