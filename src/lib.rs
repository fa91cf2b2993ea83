//! # Tweet Lookup Library
//!
//! A Rust client binding for the Twitter/X API v2 tweet lookup endpoint (`GET /2/tweets`).
//! Given a batch of tweet IDs and a set of include flags, it builds the field-selection
//! query, issues a single request and decodes a response that may mix resolved tweets,
//! per-item errors and expanded media.
//!
//! ## Features
//!
//! - Tri-state include flags with fixed defaults, resolved into `tweet.fields`,
//!   `media.fields` and `expansions`
//! - Dual decoding of each response into the success envelope and the API error document
//! - One error per call: transport failures win over API errors, item errors stay in the
//!   envelope
//! - Pluggable transport with a `reqwest` implementation
//! - Structured logging through the `log` facade
//!
//! ## Configuration
//!
//! - `xapi_bearer_token`: Bearer token (required)
//! - `xapi_base_url`: API base URL (defaults to `https://api.twitter.com/2/`)
//! - `xapi_timeout_secs`: Per-request timeout (defaults to 30)
//!
//! ## Example
//!
//! ```rust,no_run
//! use tweet_lookup::{Client, TweetsShowParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let client = Client::from_env()?;
//!     let params = TweetsShowParams::new(vec![20, 1445880548472328192]).include_media(true);
//!     let lookup = client.tweets.show(&params).await;
//!     for tweet in &lookup.tweets.data {
//!         println!("{}: {}", tweet.id, tweet.text);
//!     }
//!     if let Some(e) = lookup.error {
//!         eprintln!("lookup failed: {}", e);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod twitter;

// Re-export commonly used types and functions
pub use client::Client;
pub use config::TwitterConfig;
pub use error::{BoxError, LookupError};
pub use twitter::{
    ApiError, HttpTransport, ResponseMeta, Transport, Tweet, TweetError, TweetMedia, Tweets,
    TweetsLookup, TweetsQuery, TweetsService, TweetsShowParams,
};
