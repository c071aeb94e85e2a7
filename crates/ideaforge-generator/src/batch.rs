//! Attempt-bounded generation loop.

use std::cmp::Reverse;
use std::collections::HashSet;

use ideaforge_core::{ContentConfig, FilterCriteria, IdeaRecord};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::enrich::enrich;
use crate::error::BatchError;
use crate::provider::TextProvider;
use crate::scorer::score;
use crate::synthesizer::IdeaSynthesizer;

/// Counters describing how a batch spent its attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub attempts: usize,
    pub accepted: usize,
    pub generation_failures: usize,
    pub low_score_rejections: usize,
    pub duplicate_rejections: usize,
    pub max_attempts: usize,
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Accepted ideas in acceptance order, each with `quality_score` set.
    pub ideas: Vec<IdeaRecord>,
    pub stats: BatchStats,
}

/// End-of-batch report over the accepted ideas.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary<'a> {
    pub average_score: f64,
    pub best_score: u8,
    pub networks_covered: usize,
    pub niches_covered: usize,
    /// Up to three ideas, highest score first; ties keep acceptance order.
    pub top: Vec<&'a IdeaRecord>,
}

impl BatchOutcome {
    /// `None` when nothing was accepted.
    #[must_use]
    pub fn summary(&self) -> Option<BatchSummary<'_>> {
        let count = u32::try_from(self.ideas.len()).ok().filter(|n| *n > 0)?;
        let score_of = |idea: &IdeaRecord| idea.quality_score.unwrap_or(0);

        let total: u32 = self.ideas.iter().map(|i| u32::from(score_of(i))).sum();
        let best_score = self.ideas.iter().map(score_of).max().unwrap_or(0);
        let networks_covered = self
            .ideas
            .iter()
            .map(|i| i.network.as_str())
            .collect::<HashSet<_>>()
            .len();
        let niches_covered = self
            .ideas
            .iter()
            .map(|i| i.niche.as_str())
            .collect::<HashSet<_>>()
            .len();

        let mut top: Vec<&IdeaRecord> = self.ideas.iter().collect();
        top.sort_by_key(|i| Reverse(score_of(*i)));
        top.truncate(3);

        Some(BatchSummary {
            average_score: f64::from(total) / f64::from(count),
            best_score,
            networks_covered,
            niches_covered,
            top,
        })
    }
}

/// Generate up to `target_count` ideas that pass `criteria`.
///
/// Makes at most `2 * target_count` attempts. Each attempt picks a random
/// trend, network, and niche, enriches the trend, and asks `synth` for an
/// idea. Provider failures, low scores, and duplicate titles all consume the
/// attempt without accepting anything, so a partial batch is a normal result.
///
/// # Errors
///
/// - [`BatchError::NoTrends`] if `trends` is empty.
/// - [`BatchError::Config`] if no allowed niche or network is configured in
///   `content`.
pub async fn run_batch<P, R>(
    synth: &IdeaSynthesizer<P>,
    content: &ContentConfig,
    trends: &[String],
    target_count: usize,
    criteria: &FilterCriteria,
    rng: &mut R,
) -> Result<BatchOutcome, BatchError>
where
    P: TextProvider,
    R: Rng + ?Sized,
{
    if trends.is_empty() {
        return Err(BatchError::NoTrends);
    }
    let criteria = criteria.resolve(content)?;

    let mut stats = BatchStats {
        max_attempts: target_count.saturating_mul(2),
        ..BatchStats::default()
    };
    let mut ideas: Vec<IdeaRecord> = Vec::with_capacity(target_count);

    tracing::info!(
        target_count,
        max_attempts = stats.max_attempts,
        minimum_score = criteria.minimum_score,
        networks = ?criteria.allowed_networks,
        niches = ?criteria.allowed_niches,
        "starting idea batch"
    );

    while stats.attempts < stats.max_attempts && ideas.len() < target_count {
        stats.attempts += 1;
        let attempt = stats.attempts;

        let (Some(trend), Some(network), Some(niche_name)) = (
            trends.choose(rng),
            criteria.allowed_networks.choose(rng),
            criteria.allowed_niches.choose(rng),
        ) else {
            break;
        };
        let Some(niche) = content.niche(niche_name) else {
            break;
        };

        let topic = enrich(trend, Some(niche), rng);

        let mut idea = match synth.synthesize(&topic, network, niche, rng).await {
            Ok(idea) => idea,
            Err(e) => {
                stats.generation_failures += 1;
                tracing::warn!(
                    attempt,
                    topic = %topic,
                    network = %network,
                    niche = %niche.name,
                    error = %e,
                    "idea generation failed"
                );
                continue;
            }
        };

        let quality = score(Some(&idea));
        idea.quality_score = Some(quality);

        if u32::from(quality) < criteria.minimum_score {
            stats.low_score_rejections += 1;
            tracing::info!(
                attempt,
                topic = %topic,
                score = quality,
                "idea rejected: score below minimum"
            );
            continue;
        }

        if criteria.avoid_duplicates && is_duplicate_title(&idea.title, &ideas) {
            stats.duplicate_rejections += 1;
            tracing::info!(attempt, title = %idea.title, "idea rejected: duplicate title");
            continue;
        }

        tracing::info!(
            attempt,
            topic = %topic,
            network = %network,
            niche = %niche.name,
            score = quality,
            "idea accepted"
        );
        ideas.push(idea);
        stats.accepted = ideas.len();
    }

    tracing::info!(
        attempts = stats.attempts,
        accepted = stats.accepted,
        generation_failures = stats.generation_failures,
        low_score_rejections = stats.low_score_rejections,
        duplicate_rejections = stats.duplicate_rejections,
        "idea batch finished"
    );

    Ok(BatchOutcome { ideas, stats })
}

/// Case-insensitive substring containment in either direction.
fn is_duplicate_title(title: &str, accepted: &[IdeaRecord]) -> bool {
    let title = title.to_lowercase();
    accepted.iter().any(|existing| {
        let existing = existing.title.to_lowercase();
        existing.contains(&title) || title.contains(&existing)
    })
}
