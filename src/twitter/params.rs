//! Query resolution for tweet lookups.
//!
//! Turns a batch of tweet IDs and a sparse set of include flags into the query
//! parameters understood by `GET /2/tweets`. Resolution is pure: no I/O, no state.

/// Tweet fields requested on every lookup.
pub const TWEET_BASE_FIELDS: [&str; 3] = ["id", "created_at", "author_id"];

/// Media attributes requested when `include_media` is on, in wire order.
pub const MEDIA_BASE_FIELDS: [&str; 7] = [
    "duration_ms",
    "height",
    "preview_image_url",
    "media_key",
    "type",
    "url",
    "width",
];

/// Expansion that pulls attached media into `includes.media`.
pub const MEDIA_KEYS_EXPANSION: &str = "attachments.media_keys";

const PUBLIC_METRICS: &str = "public_metrics";
const NON_PUBLIC_METRICS: &str = "non_public_metrics";
const ORGANIC_METRICS: &str = "organic_metrics";

/// Parameters for [`TweetsService::show`](super::TweetsService::show).
///
/// Each flag is tri-state: `None` takes the default, `Some(_)` overrides it.
///
/// | flag                               | default |
/// |------------------------------------|---------|
/// | `include_media`                    | off     |
/// | `include_tweet_public_metrics`     | on      |
/// | `include_tweet_non_public_metrics` | off     |
/// | `include_tweet_organic_metrics`    | off     |
/// | `include_media_public_metrics`     | on (only when `include_media` is on) |
/// | `include_media_non_public_metrics` | off     |
/// | `include_media_organic_metrics`    | off     |
///
/// The media public metrics default only contributes a field when media attributes
/// are requested (`include_media` resolves on). Set it explicitly to request media
/// public metrics on their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TweetsShowParams {
    pub ids: Vec<i64>,
    pub include_media: Option<bool>,
    pub include_tweet_public_metrics: Option<bool>,
    pub include_tweet_non_public_metrics: Option<bool>,
    pub include_tweet_organic_metrics: Option<bool>,
    pub include_media_public_metrics: Option<bool>,
    pub include_media_non_public_metrics: Option<bool>,
    pub include_media_organic_metrics: Option<bool>,
}

impl TweetsShowParams {
    /// Creates parameters for the given IDs with every flag left at its default.
    pub fn new(ids: impl Into<Vec<i64>>) -> Self {
        Self {
            ids: ids.into(),
            ..Default::default()
        }
    }

    pub fn include_media(mut self, on: bool) -> Self {
        self.include_media = Some(on);
        self
    }

    pub fn include_tweet_public_metrics(mut self, on: bool) -> Self {
        self.include_tweet_public_metrics = Some(on);
        self
    }

    pub fn include_tweet_non_public_metrics(mut self, on: bool) -> Self {
        self.include_tweet_non_public_metrics = Some(on);
        self
    }

    pub fn include_tweet_organic_metrics(mut self, on: bool) -> Self {
        self.include_tweet_organic_metrics = Some(on);
        self
    }

    pub fn include_media_public_metrics(mut self, on: bool) -> Self {
        self.include_media_public_metrics = Some(on);
        self
    }

    pub fn include_media_non_public_metrics(mut self, on: bool) -> Self {
        self.include_media_non_public_metrics = Some(on);
        self
    }

    pub fn include_media_organic_metrics(mut self, on: bool) -> Self {
        self.include_media_organic_metrics = Some(on);
        self
    }
}

/// Resolved query parameters for one lookup call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetsQuery {
    /// Comma-joined decimal IDs, in caller order.
    pub ids: String,
    /// Comma-joined tweet fields. Never empty.
    pub tweet_fields: String,
    /// Comma-joined media fields, absent when no media field was requested.
    pub media_fields: Option<String>,
    /// Present exactly when `media_fields` is present.
    pub expansions: Option<&'static str>,
}

impl TweetsQuery {
    /// Resolves lookup parameters into wire query parameters.
    ///
    /// Returns `None` when `params.ids` is empty; callers treat that as a no-op.
    pub fn resolve(params: &TweetsShowParams) -> Option<Self> {
        if params.ids.is_empty() {
            return None;
        }

        let ids = params
            .ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut tweet_fields: Vec<&str> = TWEET_BASE_FIELDS.to_vec();
        push_metrics(
            &mut tweet_fields,
            params.include_tweet_public_metrics.unwrap_or(true),
            params.include_tweet_non_public_metrics.unwrap_or(false),
            params.include_tweet_organic_metrics.unwrap_or(false),
        );

        let include_media = params.include_media.unwrap_or(false);
        let mut media_fields: Vec<&str> = Vec::new();
        if include_media {
            media_fields.extend_from_slice(&MEDIA_BASE_FIELDS);
        }
        // Explicit media metric flags apply even without the base media attributes.
        push_metrics(
            &mut media_fields,
            params.include_media_public_metrics.unwrap_or(include_media),
            params.include_media_non_public_metrics.unwrap_or(false),
            params.include_media_organic_metrics.unwrap_or(false),
        );

        let (media_fields, expansions) = if media_fields.is_empty() {
            (None, None)
        } else {
            (Some(media_fields.join(",")), Some(MEDIA_KEYS_EXPANSION))
        };

        Some(Self {
            ids,
            tweet_fields: tweet_fields.join(","),
            media_fields,
            expansions,
        })
    }

    /// Returns the query pairs to send, omitting absent parameters.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("ids", self.ids.clone()),
            ("tweet.fields", self.tweet_fields.clone()),
        ];
        if let Some(media_fields) = &self.media_fields {
            pairs.push(("media.fields", media_fields.clone()));
        }
        if let Some(expansions) = self.expansions {
            pairs.push(("expansions", expansions.to_string()));
        }
        pairs
    }
}

fn push_metrics(fields: &mut Vec<&str>, public: bool, non_public: bool, organic: bool) {
    if public {
        fields.push(PUBLIC_METRICS);
    }
    if non_public {
        fields.push(NON_PUBLIC_METRICS);
    }
    if organic {
        fields.push(ORGANIC_METRICS);
    }
}
