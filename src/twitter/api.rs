//! Transport boundary for the Twitter API.
//!
//! The tweets service only depends on the [`Transport`] trait: issue one GET against a
//! path beneath the API base URL and hand back the response metadata plus the body
//! decoded into both the success and error shapes. [`HttpTransport`] is the `reqwest`
//! implementation used in production.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::config::TwitterConfig;
use crate::error::BoxError;

use super::types::{ApiError, Tweets};

/// Status line and headers of a response that actually arrived.
///
/// Passed through to callers untouched (rate-limit headers and the like live here).
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// A response body decoded into both candidate shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelopes {
    pub success: Tweets,
    pub failure: ApiError,
}

/// Result of a single request/response cycle.
#[derive(Debug)]
pub struct Exchange {
    /// `None` when no response arrived (connect failure, timeout, bad URL).
    pub response: Option<ResponseMeta>,
    pub outcome: Result<Envelopes, BoxError>,
}

impl Exchange {
    fn failed(response: Option<ResponseMeta>, error: BoxError) -> Self {
        Self {
            response,
            outcome: Err(error),
        }
    }
}

/// Issues GET requests against the Twitter API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `GET <base>/<path>?<query>` and decodes the body into both envelopes.
    async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Exchange;
}

/// `reqwest`-backed [`Transport`] with bearer-token authentication.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    bearer_token: String,
}

impl HttpTransport {
    /// Builds a transport from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be constructed.
    pub fn new(config: &TwitterConfig) -> Result<Self, BoxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Builds a transport around an existing `reqwest::Client`.
    pub fn with_client(client: Client, config: &TwitterConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            bearer_token: config.bearer_token.clone(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("bearer_token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Exchange {
        let url = match self.base_url.join(path) {
            Ok(url) => url,
            Err(e) => return Exchange::failed(None, e.into()),
        };

        info!("Sending GET request to {}", url);
        debug!("Request query: {:?}", query);
        debug!("Request headers: Authorization: Bearer [REDACTED]");

        let response = match self
            .client
            .get(url)
            .query(query)
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("GET {} failed before a response arrived: {}", path, e);
                return Exchange::failed(None, e.into());
            }
        };

        let meta = ResponseMeta {
            status: response.status(),
            headers: response.headers().clone(),
        };
        info!("Received response with status: {} for {}", meta.status, path);

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Exchange::failed(Some(meta), e.into()),
        };
        debug!(
            "Response body for {}: {}",
            path,
            sanitize_for_logging(&String::from_utf8_lossy(&body), 200)
        );

        Exchange {
            response: Some(meta),
            outcome: decode_envelopes(&body),
        }
    }
}

/// Decodes a response body into both the success and the error shape.
///
/// An empty body decodes to empty envelopes. Anything else must be a JSON object
/// matching both shapes; every field is optional so either shape tolerates the other.
pub(crate) fn decode_envelopes(body: &[u8]) -> Result<Envelopes, BoxError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Envelopes::default());
    }
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let success = Tweets::deserialize(&value)?;
    let failure = ApiError::deserialize(&value)?;
    Ok(Envelopes { success, failure })
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// Newlines and tabs become spaces, other control characters become `?`, and text
/// longer than `max_len` bytes is cut at the nearest char boundary.
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.len() > max_len {
        let mut cut = max_len;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... [truncated, {} total bytes]",
            &sanitized[..cut],
            text.len()
        )
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_body() {
        let envelopes = decode_envelopes(b"").unwrap();
        assert_eq!(envelopes, Envelopes::default());

        let envelopes = decode_envelopes(b"  \n").unwrap();
        assert!(envelopes.success.is_empty());
        assert!(envelopes.failure.is_empty());
    }

    #[test]
    fn test_decode_success_body_with_item_errors() {
        let body = br#"{
            "data": [{"id": "20", "text": "just setting up my twttr", "author_id": "12"}],
            "errors": [{
                "resource_id": "21",
                "resource_type": "tweet",
                "title": "Not Found Error",
                "section": "data",
                "detail": "Could not find tweet with ids: [21].",
                "type": "https://api.twitter.com/2/problems/resource-not-found",
                "value": "21",
                "parameter": "ids"
            }]
        }"#;
        let envelopes = decode_envelopes(body).unwrap();

        assert_eq!(envelopes.success.data.len(), 1);
        assert_eq!(envelopes.success.data[0].text, "just setting up my twttr");
        assert_eq!(envelopes.success.errors.len(), 1);
        assert_eq!(envelopes.success.errors[0].resource_id, "21");
        assert_eq!(envelopes.success.errors[0].section, "data");
        // Item errors never populate the request-level error.
        assert!(envelopes.failure.is_empty());
    }

    #[test]
    fn test_decode_error_body() {
        let body = br#"{
            "errors": [{"parameters": {"ids": ["x"]}, "message": "The `ids` query parameter value [x] is not valid"}],
            "title": "Invalid Request",
            "detail": "One or more parameters to your request was invalid.",
            "type": "https://api.twitter.com/2/problems/invalid-request"
        }"#;
        let envelopes = decode_envelopes(body).unwrap();

        assert!(envelopes.success.data.is_empty());
        assert_eq!(envelopes.failure.title, "Invalid Request");
        assert_eq!(
            envelopes.failure.error_type,
            "https://api.twitter.com/2/problems/invalid-request"
        );
        assert_eq!(envelopes.failure.status, None);
    }

    #[test]
    fn test_decode_rejects_malformed_bodies() {
        assert!(decode_envelopes(b"<html>502 Bad Gateway</html>").is_err());
        assert!(decode_envelopes(br#"{"data": "not a list"}"#).is_err());
        assert!(decode_envelopes(br#""oops""#).is_err());
    }

    #[test]
    fn test_http_transport_debug_redacts_token() {
        let config = TwitterConfig::new("super-secret-bearer").unwrap();
        let transport = HttpTransport::new(&config).unwrap();

        assert_eq!(transport.base_url().as_str(), "https://api.twitter.com/2/");
        let debug = format!("{:?}", transport);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret-bearer"));
    }

    #[test]
    fn test_sanitize_for_logging() {
        assert_eq!(sanitize_for_logging("a\nb\tc\u{7}", 100), "a b c?");

        let long = "x".repeat(50);
        let out = sanitize_for_logging(&long, 10);
        assert!(out.starts_with("xxxxxxxxxx..."));
        assert!(out.ends_with("[truncated, 50 total bytes]"));

        // Truncation never splits a multi-byte character.
        let out = sanitize_for_logging("ééééé", 3);
        assert!(out.starts_with("é..."));
    }
}
