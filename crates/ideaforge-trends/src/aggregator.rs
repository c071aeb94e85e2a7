//! Concurrent fetch-and-merge over all trend sources.

use std::time::Duration;

use chrono::Datelike;
use futures::stream::{self, StreamExt};
use ideaforge_core::AppConfig;

use crate::error::TrendError;
use crate::normalize::merge_trends;
use crate::sources::{baseline_trends, TrendSource};

const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 15;
const DEFAULT_MAX_CONCURRENT: usize = 4;
const DEFAULT_MAX_TRENDS: usize = 50;

/// Collects trending topics from a fixed set of sources.
///
/// Each [`collect`](TrendAggregator::collect) call re-fetches every source.
/// The baseline list is always merged first, so the result is never empty
/// unless the baseline itself is.
pub struct TrendAggregator {
    client: reqwest::Client,
    sources: Vec<TrendSource>,
    baseline: Vec<String>,
    source_timeout: Duration,
    max_concurrent: usize,
    max_trends: usize,
}

impl TrendAggregator {
    /// Aggregator over `sources` with the standard baseline and limits.
    #[must_use]
    pub fn new(client: reqwest::Client, sources: Vec<TrendSource>) -> Self {
        Self {
            client,
            sources,
            baseline: baseline_trends(),
            source_timeout: Duration::from_secs(DEFAULT_SOURCE_TIMEOUT_SECS),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            max_trends: DEFAULT_MAX_TRENDS,
        }
    }

    /// Aggregator over the default sources for the current month, with
    /// limits and user agent taken from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, TrendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.trend_source_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        let month = chrono::Utc::now().month();
        Ok(Self::new(client, TrendSource::defaults(month))
            .with_source_timeout(Duration::from_secs(config.trend_source_timeout_secs))
            .with_max_concurrent(config.trend_max_concurrent)
            .with_max_trends(config.max_trends))
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: Vec<String>) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub fn with_source_timeout(mut self, timeout: Duration) -> Self {
        self.source_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    #[must_use]
    pub fn with_max_trends(mut self, max_trends: usize) -> Self {
        self.max_trends = max_trends;
        self
    }

    /// Fetch every source concurrently and return the merged trend list.
    ///
    /// At most `max_concurrent` sources are in flight at once, each bounded
    /// by the per-source timeout. Results are merged in source order after
    /// all sources finish: baseline first, then normalized, deduplicated,
    /// and capped at `max_trends`. Failing sources contribute nothing.
    pub async fn collect(&self) -> Vec<String> {
        let per_source: Vec<Vec<String>> = stream::iter(&self.sources)
            .map(|source| self.fetch_bounded(source))
            .buffered(self.max_concurrent)
            .collect()
            .await;

        let fetched_count: usize = per_source.iter().map(Vec::len).sum();
        let trends = merge_trends(
            self.baseline.iter().chain(per_source.iter().flatten()),
            self.max_trends,
        );

        tracing::info!(
            sources = self.sources.len(),
            fetched = fetched_count,
            trends = trends.len(),
            "trend aggregation complete"
        );

        trends
    }

    async fn fetch_bounded(&self, source: &TrendSource) -> Vec<String> {
        let fetch = source.fetch(&self.client);
        let outcome = tokio::time::timeout(self.source_timeout, fetch)
            .await
            .unwrap_or_else(|_| {
                Err(TrendError::Timeout {
                    source_name: source.name().to_string(),
                    secs: self.source_timeout.as_secs(),
                })
            });

        match outcome {
            Ok(topics) => {
                tracing::debug!(
                    source = source.name(),
                    count = topics.len(),
                    "collected trend source"
                );
                topics
            }
            Err(e) => {
                tracing::warn!(
                    source = source.name(),
                    error = %e,
                    "trend source failed; continuing without it"
                );
                Vec::new()
            }
        }
    }
}
