//! Response records for the tweet lookup endpoint.
//!
//! These mirror the JSON returned by `GET /2/tweets`. Every field is defaulted so a
//! body that only carries part of the shape (an error-only body, a tweet without
//! metrics) still decodes.

use std::collections::HashMap;
use std::num::ParseIntError;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the v2 API for `created_at`.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// The success envelope of a tweet lookup.
///
/// `data` holds the tweets that resolved, `errors` holds per-item failures (deleted or
/// protected tweets, for instance) and `includes` holds expanded media objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweets {
    pub data: Vec<Tweet>,
    pub errors: Vec<TweetError>,
    pub includes: Option<TweetIncludes>,
}

impl Tweets {
    /// Returns true when the envelope carries no tweets, no item errors and no includes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.errors.is_empty() && self.includes.is_none()
    }

    /// Resolves a tweet's attached media keys against `includes.media`.
    ///
    /// Attachment order is preserved. Keys with no matching media object are skipped.
    pub fn media_for(&self, tweet: &Tweet) -> Vec<&TweetMedia> {
        let Some(attachments) = tweet.attachments.as_ref() else {
            return Vec::new();
        };
        let by_key: HashMap<&str, &TweetMedia> = self
            .includes
            .iter()
            .flat_map(|includes| includes.media.iter())
            .map(|media| (media.media_key.as_str(), media))
            .collect();

        attachments
            .media_keys
            .iter()
            .filter_map(|key| by_key.get(key.as_str()).copied())
            .collect()
    }
}

/// A single tweet as returned by the lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweet {
    pub id: String,
    pub attachments: Option<TweetAttachments>,
    pub author_id: String,
    pub created_at: String,
    pub non_public_metrics: Option<TweetNonPublicMetrics>,
    pub organic_metrics: Option<TweetOrganicMetrics>,
    pub public_metrics: Option<TweetPublicMetrics>,
    pub text: String,
}

impl Tweet {
    /// Parses the tweet ID as an `i64`.
    pub fn id_i64(&self) -> Result<i64, ParseIntError> {
        self.id.parse()
    }

    /// Parses the author ID as an `i64`.
    pub fn author_id_i64(&self) -> Result<i64, ParseIntError> {
        self.author_id.parse()
    }

    /// Parses `created_at` (e.g. `2021-03-01T18:30:00.000Z`) into a UTC timestamp.
    pub fn created_at_time(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT)
            .map(|naive| naive.and_utc())
    }
}

/// A per-item error inside the success envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetError {
    pub detail: String,
    pub resource_id: String,
    pub resource_type: String,
    pub title: String,
    pub section: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetAttachments {
    pub media_keys: Vec<String>,
}

/// Objects pulled in by the `attachments.media_keys` expansion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetIncludes {
    pub media: Vec<TweetMedia>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetMedia {
    pub duration_ms: i64,
    pub height: i64,
    pub media_key: String,
    pub organic_metrics: Option<VideoOrganicMetrics>,
    pub non_public_metrics: Option<VideoNonPublicMetrics>,
    pub preview_image_url: String,
    pub public_metrics: Option<VideoPublicMetrics>,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub width: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetOrganicMetrics {
    pub reply_count: u64,
    pub like_count: u64,
    pub retweet_count: u64,
    pub url_link_clicks: u64,
    pub user_profile_clicks: u64,
    pub impression_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetNonPublicMetrics {
    pub user_profile_clicks: u64,
    pub impression_count: u64,
    pub url_link_clicks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweetPublicMetrics {
    pub retweet_count: u64,
    pub reply_count: u64,
    pub like_count: u64,
    pub quote_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoOrganicMetrics {
    pub view_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoNonPublicMetrics {
    pub view_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPublicMetrics {
    pub view_count: u64,
}

/// A request-level error returned by the API instead of (or next to) a data payload.
///
/// The API reports these as problem documents: `title`, `detail`, `type` and an
/// optional HTTP `status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(default)]
#[error("{title}: {detail}")]
pub struct ApiError {
    pub title: String,
    pub detail: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub status: Option<u16>,
}

impl ApiError {
    /// Returns true when none of `title`, `detail` or `type` is populated.
    ///
    /// An empty `ApiError` means the body carried no request-level error.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.detail.is_empty() && self.error_type.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_tweet_id_helpers() {
        let tweet = Tweet {
            id: "1445880548472328192".to_string(),
            author_id: "2244994945".to_string(),
            ..Default::default()
        };
        assert_eq!(tweet.id_i64(), Ok(1445880548472328192));
        assert_eq!(tweet.author_id_i64(), Ok(2244994945));

        let bad = Tweet {
            id: "abc".to_string(),
            ..Default::default()
        };
        assert!(bad.id_i64().is_err());
        assert!(bad.author_id_i64().is_err());
    }

    #[test]
    fn test_created_at_time() {
        let tweet = Tweet {
            created_at: "2021-10-06T22:04:15.000Z".to_string(),
            ..Default::default()
        };
        let created = tweet.created_at_time().unwrap();
        assert_eq!(created.year(), 2021);
        assert_eq!(created.month(), 10);
        assert_eq!(created.day(), 6);
        assert_eq!(created.hour(), 22);
        assert_eq!(created.second(), 15);

        let untimed = Tweet::default();
        assert!(untimed.created_at_time().is_err());
    }

    #[test]
    fn test_media_for_preserves_attachment_order() {
        let tweets: Tweets = serde_json::from_str(
            r#"{
                "data": [{"id": "1", "attachments": {"media_keys": ["3_b", "missing", "3_a"]}}],
                "includes": {"media": [
                    {"media_key": "3_a", "type": "photo"},
                    {"media_key": "3_b", "type": "video"}
                ]}
            }"#,
        )
        .unwrap();

        let media = tweets.media_for(&tweets.data[0]);
        let keys: Vec<&str> = media.iter().map(|m| m.media_key.as_str()).collect();
        assert_eq!(keys, vec!["3_b", "3_a"]);

        let bare = Tweet::default();
        assert!(tweets.media_for(&bare).is_empty());
    }

    #[test]
    fn test_api_error_emptiness() {
        assert!(ApiError::default().is_empty());

        let only_status = ApiError {
            status: Some(400),
            ..Default::default()
        };
        assert!(only_status.is_empty());

        let titled = ApiError {
            title: "Invalid Request".to_string(),
            detail: "One or more parameters to your request was invalid.".to_string(),
            ..Default::default()
        };
        assert!(!titled.is_empty());
        assert_eq!(
            titled.to_string(),
            "Invalid Request: One or more parameters to your request was invalid."
        );
    }
}
