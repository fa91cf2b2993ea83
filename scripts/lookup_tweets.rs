//! Tweet Lookup Script
//!
//! Looks up the tweet IDs given on the command line and prints what came back.
//!
//! ```bash
//! xapi_bearer_token=... cargo run --bin lookup_tweets -- 20 1445880548472328192
//! xapi_bearer_token=... cargo run --bin lookup_tweets -- --media --organic 1263145271946551300
//! ```
//!
//! Flags:
//! - `--media`: include media attributes
//! - `--no-public`: drop tweet public metrics
//! - `--non-public`: include tweet and media non-public metrics
//! - `--organic`: include tweet and media organic metrics

use tweet_lookup::{Client, TweetsShowParams};

fn parse_args(
    args: impl Iterator<Item = String>,
) -> Result<TweetsShowParams, Box<dyn std::error::Error + Send + Sync>> {
    let mut params = TweetsShowParams::default();
    for arg in args {
        params = match arg.as_str() {
            "--media" => params.include_media(true),
            "--no-public" => params.include_tweet_public_metrics(false),
            "--non-public" => params
                .include_tweet_non_public_metrics(true)
                .include_media_non_public_metrics(true),
            "--organic" => params
                .include_tweet_organic_metrics(true)
                .include_media_organic_metrics(true),
            id => {
                let id = id
                    .parse::<i64>()
                    .map_err(|e| format!("Invalid tweet ID '{}': {}", id, e))?;
                params.ids.push(id);
                params
            }
        };
    }
    Ok(params)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let params = parse_args(std::env::args().skip(1))?;
    if params.ids.is_empty() {
        println!("Usage: lookup_tweets [--media] [--no-public] [--non-public] [--organic] <id>...");
        return Err("At least one tweet ID is required".into());
    }

    let client = Client::from_env()?;
    let lookup = client.tweets.show(&params).await;

    if let Some(response) = &lookup.response {
        println!("Status: {}", response.status);
        if let Some(remaining) = response.headers.get("x-rate-limit-remaining") {
            println!("Rate limit remaining: {:?}", remaining);
        }
    }

    for tweet in &lookup.tweets.data {
        println!("\n{} by {} at {}", tweet.id, tweet.author_id, tweet.created_at);
        println!("  {}", tweet.text);
        if let Some(metrics) = &tweet.public_metrics {
            println!(
                "  likes: {}, retweets: {}, replies: {}, quotes: {}",
                metrics.like_count, metrics.retweet_count, metrics.reply_count, metrics.quote_count
            );
        }
        for media in lookup.tweets.media_for(tweet) {
            println!(
                "  media {} ({}, {}x{})",
                media.media_key, media.media_type, media.width, media.height
            );
        }
    }

    for item_error in &lookup.tweets.errors {
        println!(
            "\nCould not resolve {} {}: {}",
            item_error.resource_type, item_error.resource_id, item_error.detail
        );
    }

    match lookup.error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
