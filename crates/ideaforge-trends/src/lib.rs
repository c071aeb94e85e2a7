//! Trending-topic aggregation for ideaforge.
//!
//! Fetches candidate topics from Google Trends RSS, news RSS feeds, and seeded
//! format lists concurrently, then normalizes and deduplicates them into a
//! single ordered list. Individual source failures never abort aggregation.

pub mod aggregator;
pub mod error;
pub mod normalize;
pub mod sources;

pub use aggregator::TrendAggregator;
pub use error::TrendError;
pub use normalize::{merge_trends, normalize_trend};
pub use sources::{baseline_trends, TrendSource};
