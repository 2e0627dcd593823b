use dotenvy::dotenv;
use log::error;
use serde::Deserialize;
use std::env;

use crate::models::mortgage::RateConvention;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Feed sources tried in order, either http(s) URLs or local paths.
    pub listing_feeds: Vec<String>,
    pub http_bind_address: Option<String>,
    #[serde(default = "default_preview_card_limit")]
    pub preview_card_limit: usize,
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    #[serde(default)]
    pub rate_convention: RateConvention,
    pub mortgage_submission_url: Option<String>,
    #[serde(default = "default_cache_bust_feed")]
    pub cache_bust_feed: bool,
}

fn default_preview_card_limit() -> usize {
    6
}

fn default_placeholder_image() -> String {
    "assets/images/placeholder.jpg".to_string()
}

fn default_cache_bust_feed() -> bool {
    true
}

pub fn create_test_config() -> Config {
    Config {
        listing_feeds: vec![
            concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/listing.json").to_string(),
        ],
        http_bind_address: None,
        preview_card_limit: 6,
        placeholder_image: default_placeholder_image(),
        rate_convention: RateConvention::MonthlyEquivalent,
        mortgage_submission_url: None,
        cache_bust_feed: false,
    }
}

pub fn read_config() -> Config {
    dotenv().ok();
    env::var(CONFIG_PATH_ENV)
        .map_err(|_| format!("{CONFIG_PATH_ENV} .env not set"))
        .and_then(|config_path| std::fs::read(config_path).map_err(|e| e.to_string()))
        .and_then(|bytes| toml::from_slice(&bytes).map_err(|e| e.to_string()))
        .unwrap_or_else(|err| {
            error!("failed to read config: {err}");
            std::process::exit(1);
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let raw = r#"
            listing_feeds = ["https://example.com/listing.json", "./listings.json"]
        "#;
        let config: Config = toml::from_str(raw).unwrap();

        assert_eq!(config.listing_feeds.len(), 2);
        assert_eq!(config.preview_card_limit, 6);
        assert_eq!(config.rate_convention, RateConvention::MonthlyEquivalent);
        assert!(config.cache_bust_feed);
        assert!(config.mortgage_submission_url.is_none());
    }

    #[test]
    fn parses_per_period_rate_convention() {
        let raw = r#"
            listing_feeds = ["./listing.json"]
            rate_convention = "per_period"
            preview_card_limit = 3
        "#;
        let config: Config = toml::from_str(raw).unwrap();

        assert_eq!(config.rate_convention, RateConvention::PerPeriod);
        assert_eq!(config.preview_card_limit, 3);
    }
}
