pub mod feed_client;
mod helpers;

pub use feed_client::{parse_listing_feed, FeedClient};
