use anyhow::{anyhow, bail, Context, Result};
use log::{error, info, warn};
use serde_json::Value;

use crate::{config::Config, models::listing::Listing};

use super::helpers::{generate_cache_buster, is_http_source};

/// Loads the listing feed. Sources are tried in the configured order and the
/// first one that loads and parses wins. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct FeedClient {
    sources: Vec<String>,
    cache_bust: bool,
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(config: &Config) -> FeedClient {
        FeedClient {
            sources: config.listing_feeds.clone(),
            cache_bust: config.cache_bust_feed,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let mut last_error = anyhow!("No listing feed configured");

        for source in &self.sources {
            match self.fetch_source(source).await {
                Ok(listings) => {
                    info!("Loaded {} listings from {}", listings.len(), source);
                    return Ok(listings);
                }
                Err(e) => {
                    error!("Failed to load listing feed from {}: {:?}", source, e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    async fn fetch_source(&self, source: &str) -> Result<Vec<Listing>> {
        let body = if is_http_source(source) {
            self.fetch_remote(source).await?
        } else {
            tokio::fs::read_to_string(source)
                .await
                .with_context(|| format!("Failed to read {}", source))?
        };

        parse_listing_feed(&body)
    }

    async fn fetch_remote(&self, url: &str) -> Result<String> {
        let mut request = self.client.get(url);
        if self.cache_bust {
            request = request.query(&[("v", generate_cache_buster())]);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("Failed to fetch {} ({})", url, response.status()));
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}

/// Accepts either a bare array of listings or an object with a `listings`
/// array. Entries that are not objects, or that cannot be read as a listing,
/// are skipped.
pub fn parse_listing_feed(body: &str) -> Result<Vec<Listing>> {
    let document: Value = serde_json::from_str(body).context("Listing feed is not valid JSON")?;

    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("listings") {
            Some(Value::Array(items)) => items,
            _ => bail!("listing feed must be an array of listings"),
        },
        _ => bail!("listing feed must be an array of listings"),
    };

    let listings = items
        .into_iter()
        .enumerate()
        .filter(|(_, item)| item.is_object())
        .filter_map(|(index, item)| match serde_json::from_value::<Listing>(item) {
            Ok(listing) => Some(listing),
            Err(e) => {
                warn!("Skipping listing #{} in feed: {}", index, e);
                None
            }
        })
        .collect();

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::create_test_config;

    #[test]
    fn parses_bare_array() {
        let listings = parse_listing_feed(r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
        assert_eq!(listings.len(), 2);
    }

    #[test]
    fn parses_wrapped_listings() {
        let listings = parse_listing_feed(r#"{"listings": [{"id": "a"}], "updated": "today"}"#)
            .unwrap();
        assert_eq!(listings[0].id.as_deref(), Some("a"));
    }

    #[test]
    fn rejects_other_documents() {
        assert!(parse_listing_feed(r#"{"items": []}"#).is_err());
        assert!(parse_listing_feed(r#"{"listings": {}}"#).is_err());
        assert!(parse_listing_feed("42").is_err());
        assert!(parse_listing_feed("not json").is_err());
    }

    #[test]
    fn skips_unreadable_entries() {
        let listings =
            parse_listing_feed(r#"[null, 3, {"id": "x", "images": "a.jpg"}, {"id": "y"}]"#)
                .unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id.as_deref(), Some("y"));
    }

    #[test]
    fn detects_http_sources() {
        assert!(is_http_source("https://example.com/listing.json"));
        assert!(is_http_source("HTTP://example.com/listing.json"));
        assert!(!is_http_source("./listing.json"));
    }

    #[tokio::test]
    async fn falls_back_to_next_source() {
        let mut config = create_test_config();
        config
            .listing_feeds
            .insert(0, "./does-not-exist/listing.json".to_string());

        let listings = FeedClient::new(&config).fetch_listings().await.unwrap();
        assert!(!listings.is_empty());
    }

    #[tokio::test]
    async fn errors_when_every_source_fails() {
        let mut config = create_test_config();
        config.listing_feeds = vec!["./does-not-exist/listing.json".to_string()];

        assert!(FeedClient::new(&config).fetch_listings().await.is_err());
    }
}
