//! Client construction for the Twitter API v2.

use std::sync::Arc;

use log::info;

use crate::config::TwitterConfig;
use crate::error::BoxError;
use crate::twitter::{HttpTransport, Transport, TweetsService};

/// A Twitter client for making Twitter API v2 requests.
#[derive(Clone)]
pub struct Client {
    pub tweets: TweetsService,
}

impl Client {
    /// Wires the services to the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            tweets: TweetsService::new(transport),
        }
    }

    /// Builds a client backed by [`HttpTransport`].
    pub fn from_config(config: &TwitterConfig) -> Result<Self, BoxError> {
        info!("Creating Twitter client for {}", config.base_url);
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Builds a client from `xapi_*` environment variables.
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_config(&TwitterConfig::from_env()?)
    }
}
