//! Tweet lookup against `GET /2/tweets`.
//!
//! [`TweetsService::show`] resolves the lookup parameters, performs one request through
//! the injected [`Transport`] and folds the decoded envelopes into a [`TweetsLookup`].

use std::sync::Arc;

use log::{debug, info};

use crate::error::{BoxError, LookupError};

use super::api::{ResponseMeta, Transport};
use super::params::{TweetsQuery, TweetsShowParams};
use super::types::{ApiError, Tweets};

/// Path of the tweet lookup endpoint, relative to the API base URL.
pub const TWEETS_PATH: &str = "tweets";

/// Everything one lookup call produced.
///
/// `tweets` is populated even when `error` is an [`LookupError::Api`], so callers can
/// still use whatever resolved. `response` is `None` only when no response arrived.
#[derive(Debug, Default)]
pub struct TweetsLookup {
    pub tweets: Tweets,
    pub response: Option<ResponseMeta>,
    pub error: Option<LookupError>,
}

impl TweetsLookup {
    /// Collapses the lookup into a `Result`, discarding tweets that came with an error.
    pub fn into_result(self) -> Result<Tweets, LookupError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.tweets),
        }
    }
}

/// Provides access to the tweets endpoints.
#[derive(Clone)]
pub struct TweetsService {
    transport: Arc<dyn Transport>,
}

impl TweetsService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Looks up a batch of tweets by ID.
    ///
    /// An empty ID list is a no-op: no request is made and an empty lookup is returned.
    /// Otherwise exactly one GET is issued and the result carries the decoded tweets,
    /// the response metadata and at most one error, chosen by [`relevant_error`].
    pub async fn show(&self, params: &TweetsShowParams) -> TweetsLookup {
        let Some(query) = TweetsQuery::resolve(params) else {
            debug!("Tweet lookup called with no IDs, skipping request");
            return TweetsLookup::default();
        };

        info!("Looking up {} tweet(s)", params.ids.len());
        debug!(
            "Resolved query: tweet.fields={} media.fields={:?} expansions={:?}",
            query.tweet_fields, query.media_fields, query.expansions
        );

        let exchange = self.transport.get(TWEETS_PATH, &query.pairs()).await;
        let (envelopes, transport_error) = match exchange.outcome {
            Ok(envelopes) => (envelopes, None),
            Err(e) => (Default::default(), Some(e)),
        };

        let tweets = envelopes.success;
        debug!(
            "Lookup returned {} tweet(s) and {} item error(s)",
            tweets.data.len(),
            tweets.errors.len()
        );

        TweetsLookup {
            tweets,
            response: exchange.response,
            error: relevant_error(transport_error, envelopes.failure),
        }
    }
}

/// Picks the error a lookup reports.
///
/// A transport error always wins. Otherwise a non-empty API error is reported, and
/// if neither is present the call succeeded.
pub fn relevant_error(transport: Option<BoxError>, api_error: ApiError) -> Option<LookupError> {
    match transport {
        Some(e) => Some(LookupError::Transport(e)),
        None if !api_error.is_empty() => Some(LookupError::Api(api_error)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relevant_error_prefers_transport() {
        let api_error = ApiError {
            title: "Invalid Request".to_string(),
            ..Default::default()
        };
        let error = relevant_error(Some("connection reset".into()), api_error).unwrap();
        assert!(matches!(error, LookupError::Transport(_)));
        assert_eq!(
            error.to_string(),
            "Twitter transport error: connection reset"
        );
    }

    #[test]
    fn test_relevant_error_reports_populated_api_error() {
        let api_error = ApiError {
            error_type: "about:blank".to_string(),
            ..Default::default()
        };
        let error = relevant_error(None, api_error.clone()).unwrap();
        assert_eq!(error.api_error(), Some(&api_error));
    }

    #[test]
    fn test_relevant_error_none() {
        assert!(relevant_error(None, ApiError::default()).is_none());
    }
}
