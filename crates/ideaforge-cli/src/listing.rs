//! Read-only commands: trend listing and content tables.

use ideaforge_core::{AppConfig, ContentConfig};
use ideaforge_trends::TrendAggregator;

/// Collect trends from every source and print them one per line.
///
/// # Errors
///
/// Returns an error if the HTTP client for the trend sources cannot be built.
pub(crate) async fn run_trends(config: &AppConfig) -> anyhow::Result<()> {
    let aggregator = TrendAggregator::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build trend aggregator: {e}"))?;
    let trends = aggregator.collect().await;

    println!("{} trending topics:", trends.len());
    for (i, trend) in trends.iter().enumerate() {
        println!("{:>3}. {trend}", i + 1);
    }
    Ok(())
}

pub(crate) fn print_niches(content: &ContentConfig) {
    println!("niches:");
    for niche in &content.niches {
        let approach = if niche.educational {
            "educational"
        } else {
            "narrative"
        };
        println!(
            "  {} ({approach}) - {} subtopics, {} keywords",
            niche.name,
            niche.subtopics.len(),
            niche.keywords.len()
        );
    }

    println!("networks:");
    for network in &content.networks {
        println!("  {} - {}", network.name, network.durations.join(", "));
    }
}
