//! Google Trends daily trending-searches RSS collector.

use std::collections::HashSet;

use super::rss_helpers::{fetch_feed, parse_rss_titles};
use crate::error::TrendError;

/// Regions whose daily trending searches are sampled.
pub(crate) const DEFAULT_FEED_URLS: &[&str] = &[
    "https://trends.google.com/trends/trendingsearches/daily/rss?geo=US",
    "https://trends.google.com/trends/trendingsearches/daily/rss?geo=ES",
    "https://trends.google.com/trends/trendingsearches/daily/rss?geo=MX",
];

const ITEMS_PER_FEED: usize = 5;
const MAX_TRENDS: usize = 20;

/// Top search titles across all regional feeds.
///
/// A failing feed is skipped; the source only errors when every feed failed.
///
/// # Errors
///
/// Returns the last feed's [`TrendError`] if no feed could be read.
pub(crate) async fn fetch_google_trends(
    client: &reqwest::Client,
    feed_urls: &[String],
) -> Result<Vec<String>, TrendError> {
    let mut titles = Vec::new();
    let mut last_error = None;
    let mut any_ok = false;

    for url in feed_urls {
        match fetch_feed(client, url).await.and_then(|body| parse_rss_titles(&body, ITEMS_PER_FEED)) {
            Ok(feed_titles) => {
                any_ok = true;
                titles.extend(feed_titles);
            }
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Google Trends feed skipped");
                last_error = Some(e);
            }
        }
    }

    if !any_ok {
        if let Some(e) = last_error {
            return Err(e);
        }
    }

    Ok(select_titles(titles))
}

/// Keep titles of 4..=49 chars, drop repeats, cap at [`MAX_TRENDS`].
fn select_titles(titles: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .filter(|t| {
            let len = t.chars().count();
            len > 3 && len < 50
        })
        .filter(|t| seen.insert(t.clone()))
        .take(MAX_TRENDS)
        .collect()
}
