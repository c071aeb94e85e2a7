//! Trend source definitions.

mod google_trends;
mod news;
mod rss_helpers;
mod seeded;

pub use seeded::{baseline_trends, BASELINE_TRENDS};

use crate::error::TrendError;

/// One independent origin of candidate topics.
///
/// Feed URLs are configurable so tests can point sources at a mock server.
#[derive(Debug, Clone)]
pub enum TrendSource {
    /// Daily trending-search RSS feeds; top item titles.
    GoogleTrends { feed_urls: Vec<String> },
    /// News RSS feeds; keywords taken from the top headlines.
    NewsHeadlines { feed_urls: Vec<String> },
    /// A fixed list that is returned as-is.
    Seeded { name: String, topics: Vec<String> },
}

impl TrendSource {
    /// The standard source set: Google Trends, news headlines, and the
    /// YouTube/TikTok format lists with seasonal topics for `month` (1-12).
    #[must_use]
    pub fn defaults(month: u32) -> Vec<TrendSource> {
        vec![
            TrendSource::GoogleTrends {
                feed_urls: owned_urls(google_trends::DEFAULT_FEED_URLS),
            },
            TrendSource::Seeded {
                name: "youtube_formats".to_string(),
                topics: seeded::youtube_formats(month),
            },
            TrendSource::Seeded {
                name: "tiktok_formats".to_string(),
                topics: seeded::tiktok_formats(),
            },
            TrendSource::NewsHeadlines {
                feed_urls: owned_urls(news::DEFAULT_FEED_URLS),
            },
        ]
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            TrendSource::GoogleTrends { .. } => "google_trends",
            TrendSource::NewsHeadlines { .. } => "news_headlines",
            TrendSource::Seeded { name, .. } => name,
        }
    }

    /// Fetch this source's raw, un-normalized topics.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError`] when no feed of the source could be read.
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<String>, TrendError> {
        match self {
            TrendSource::GoogleTrends { feed_urls } => {
                google_trends::fetch_google_trends(client, feed_urls).await
            }
            TrendSource::NewsHeadlines { feed_urls } => {
                news::fetch_news_keywords(client, feed_urls).await
            }
            TrendSource::Seeded { topics, .. } => Ok(topics.clone()),
        }
    }
}

fn owned_urls(urls: &[&str]) -> Vec<String> {
    urls.iter().map(|u| (*u).to_string()).collect()
}
