//! Twitter/X API v2 tweet lookup.
//!
//! This module contains the query resolver, the response records, the transport
//! boundary and the tweets service that ties them together.

mod api;
mod params;
mod tweets;
mod types;

pub use api::{Envelopes, Exchange, HttpTransport, ResponseMeta, Transport};
pub use params::{
    TweetsQuery, TweetsShowParams, MEDIA_BASE_FIELDS, MEDIA_KEYS_EXPANSION, TWEET_BASE_FIELDS,
};
pub use tweets::{relevant_error, TweetsLookup, TweetsService, TWEETS_PATH};
pub use types::{
    ApiError, Tweet, TweetAttachments, TweetError, TweetIncludes, TweetMedia,
    TweetNonPublicMetrics, TweetOrganicMetrics, TweetPublicMetrics, Tweets, VideoNonPublicMetrics,
    VideoOrganicMetrics, VideoPublicMetrics,
};

// Crate-internal re-exports (used by tests)
#[allow(unused_imports)]
pub(crate) use api::decode_envelopes;
