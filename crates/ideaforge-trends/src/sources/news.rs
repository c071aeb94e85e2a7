//! News headline keyword collector.

use std::collections::HashSet;

use super::rss_helpers::{fetch_feed, parse_rss_titles};
use crate::error::TrendError;

pub(crate) const DEFAULT_FEED_URLS: &[&str] = &[
    "https://feeds.bbci.co.uk/news/technology/rss.xml",
    "https://rss.cnn.com/rss/edition.rss",
];

const ITEMS_PER_FEED: usize = 3;
const MAX_KEYWORDS: usize = 15;

/// Keywords pulled from the top headlines of each news feed.
///
/// # Errors
///
/// Returns the last feed's [`TrendError`] if no feed could be read.
pub(crate) async fn fetch_news_keywords(
    client: &reqwest::Client,
    feed_urls: &[String],
) -> Result<Vec<String>, TrendError> {
    let mut headlines = Vec::new();
    let mut last_error = None;
    let mut any_ok = false;

    for url in feed_urls {
        match fetch_feed(client, url).await.and_then(|body| parse_rss_titles(&body, ITEMS_PER_FEED)) {
            Ok(titles) => {
                any_ok = true;
                headlines.extend(titles);
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "news feed skipped");
                last_error = Some(e);
            }
        }
    }

    if !any_ok {
        if let Some(e) = last_error {
            return Err(e);
        }
    }

    Ok(headline_keywords(&headlines))
}

/// Alphabetic words longer than four characters, lowercased, first occurrence wins.
fn headline_keywords(headlines: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    headlines
        .iter()
        .flat_map(|h| h.split_whitespace())
        .filter(|w| w.chars().count() > 4 && w.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .filter(|w| seen.insert(w.clone()))
        .take(MAX_KEYWORDS)
        .collect()
}
