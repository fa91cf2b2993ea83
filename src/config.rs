//! Configuration module for the tweet lookup client.
//!
//! This module contains configuration structures and environment variable handling
//! for the Twitter/X API integration.

use std::env;

use log::{debug, error, info, warn};
use url::Url;

use crate::error::BoxError;

/// Base URL of the Twitter API v2.
pub const TWITTER_API: &str = "https://api.twitter.com/2/";

/// Per-request timeout used when `xapi_timeout_secs` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for talking to the Twitter/X API.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    /// Bearer token sent on every request
    pub bearer_token: String,
    /// API base URL, always ending in `/`
    pub base_url: Url,
    /// Per-request timeout handed to the HTTP client
    pub timeout_secs: u64,
}

impl TwitterConfig {
    /// Creates a config for the given token with the default base URL and timeout.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self, BoxError> {
        Ok(Self {
            bearer_token: bearer_token.into(),
            base_url: parse_base_url(TWITTER_API)?,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Creates a new `TwitterConfig` by loading settings from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `xapi_bearer_token`: Bearer token for the v2 API
    ///
    /// # Optional Environment Variables
    ///
    /// - `xapi_base_url`: API base URL (defaults to `https://api.twitter.com/2/`)
    /// - `xapi_timeout_secs`: Per-request timeout in seconds (defaults to 30, must be non-zero)
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If the token is present and the optional values parse
    /// - `Err(BoxError)`: If the token is missing or empty, or a value is malformed
    pub fn from_env() -> Result<Self, BoxError> {
        info!("Loading Twitter configuration from environment variables");

        let bearer_token = match env::var("xapi_bearer_token") {
            Ok(token) if token.is_empty() => {
                error!("Bearer token is empty");
                return Err("Bearer token cannot be empty".into());
            }
            Ok(token) => {
                info!(
                    "Found xapi_bearer_token environment variable with length: {}",
                    token.len()
                );
                debug!("Bearer token (masked): {}", mask_token(&token));
                if token.len() < 10 {
                    warn!(
                        "Bearer token seems unusually short ({} characters)",
                        token.len()
                    );
                }
                token
            }
            Err(e) => {
                error!("Failed to load xapi_bearer_token from environment: {}", e);
                return Err(format!("Missing xapi_bearer_token environment variable: {}", e).into());
            }
        };

        let base_url = match env::var("xapi_base_url") {
            Ok(raw) => {
                info!("Using API base URL from xapi_base_url: {}", raw);
                parse_base_url(&raw)?
            }
            Err(_) => parse_base_url(TWITTER_API)?,
        };

        let timeout_secs = match env::var("xapi_timeout_secs") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    format!("xapi_timeout_secs must be a whole number of seconds: {}", e)
                })?;
                if secs == 0 {
                    error!("xapi_timeout_secs is 0, every request would time out");
                    return Err("xapi_timeout_secs must be greater than zero".into());
                }
                secs
            }
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        info!("Twitter configuration loaded successfully");
        Ok(TwitterConfig {
            bearer_token,
            base_url,
            timeout_secs,
        })
    }
}

/// Parses an absolute base URL, adding a trailing `/` so relative paths join beneath it.
fn parse_base_url(raw: &str) -> Result<Url, BoxError> {
    let mut url = Url::parse(raw).map_err(|e| format!("Invalid API base URL '{}': {}", raw, e))?;
    if url.cannot_be_a_base() {
        return Err(format!("API base URL '{}' cannot be used as a base", raw).into());
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Masks a secret for logging, keeping at most the first and last 8 characters.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let prefix: String = chars.iter().take(8).collect();
    if chars.len() > 16 {
        let suffix: String = chars[chars.len() - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("{}...", prefix)
    }
}
