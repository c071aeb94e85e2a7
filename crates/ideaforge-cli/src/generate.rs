//! The `generate` command: trends in, scored ideas out.

use ideaforge_core::{
    AppConfig, ContentConfig, FilterCriteria, IdeaRecord, DEFAULT_FALLBACK_NICHES,
};
use ideaforge_generator::{
    attach_scripts, run_batch, BatchSummary, GeminiClient, IdeaSynthesizer,
};
use ideaforge_trends::TrendAggregator;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::GenerateArgs;

const DEFAULT_COUNT: usize = 20;
const QUICK_NETWORKS: &[&str] = &["TikTok", "YouTube Shorts", "Instagram"];

/// Canned batch profiles. Explicit flags override whatever a preset sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Preset {
    /// 10 ideas, score >= 70, short-form networks and the fallback niches
    Quick,
    /// 25 ideas, score >= 75, every network and niche
    Pro,
    /// 100 ideas, score >= 80, every network and niche
    Enterprise,
}

impl Preset {
    fn count(self) -> usize {
        match self {
            Self::Quick => 10,
            Self::Pro => 25,
            Self::Enterprise => 100,
        }
    }

    fn min_score(self) -> u32 {
        match self {
            Self::Quick => 70,
            Self::Pro => 75,
            Self::Enterprise => 80,
        }
    }

    fn networks(self) -> Option<&'static [&'static str]> {
        matches!(self, Self::Quick).then_some(QUICK_NETWORKS)
    }

    fn niches(self) -> Option<&'static [&'static str]> {
        matches!(self, Self::Quick).then_some(DEFAULT_FALLBACK_NICHES)
    }
}

/// Target size plus filters for one batch.
#[derive(Debug, Clone)]
pub(crate) struct BatchPlan {
    pub count: usize,
    pub criteria: FilterCriteria,
}

/// Aggregate trends, run one batch, and report the accepted ideas.
///
/// Scripts are attached unless `--no-scripts` is given. With `--output` the
/// ideas are also written as pretty JSON.
///
/// # Errors
///
/// Returns an error if `GEMINI_API_KEY` is unset, a client cannot be built,
/// the batch configuration is invalid (no usable network, no trends), or the
/// output file cannot be written. Individual generation failures only shrink
/// the batch.
pub(crate) async fn run_generate(
    config: &AppConfig,
    content: &ContentConfig,
    args: &GenerateArgs,
) -> anyhow::Result<()> {
    let api_key = config.require_gemini_api_key()?;
    let provider = GeminiClient::from_config(config, api_key)
        .map_err(|e| anyhow::anyhow!("failed to build Gemini client: {e}"))?;
    let aggregator = TrendAggregator::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build trend aggregator: {e}"))?;
    let synth = IdeaSynthesizer::new(provider);

    let plan = build_plan(content, args);
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let trends = aggregator.collect().await;
    let mut outcome = run_batch(
        &synth,
        content,
        &trends,
        plan.count,
        &plan.criteria,
        &mut rng,
    )
    .await?;

    if !args.no_scripts {
        attach_scripts(&mut outcome.ideas, content);
    }

    print_ideas(&outcome.ideas);
    let stats = outcome.stats;
    println!(
        "accepted {}/{} in {} attempts (generation failures: {}, low score: {}, duplicates: {})",
        stats.accepted,
        plan.count,
        stats.attempts,
        stats.generation_failures,
        stats.low_score_rejections,
        stats.duplicate_rejections,
    );

    match outcome.summary() {
        Some(summary) => {
            tracing::info!(
                accepted = stats.accepted,
                target = plan.count,
                attempts = stats.attempts,
                average_score = summary.average_score,
                best_score = summary.best_score,
                networks_covered = summary.networks_covered,
                niches_covered = summary.niches_covered,
                "generate finished"
            );
            print_summary(&summary);
        }
        None => {
            tracing::warn!(
                target = plan.count,
                attempts = stats.attempts,
                "generate finished without accepted ideas"
            );
            println!("no ideas were accepted; check the trend sources and GEMINI_API_KEY");
        }
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&outcome.ideas)?;
        std::fs::write(path, json)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
        println!("wrote {} ideas to {}", outcome.ideas.len(), path.display());
    }

    Ok(())
}

/// Resolve flags, preset, and built-in defaults into one plan.
///
/// Empty `--network`/`--niche` lists mean the preset's list, or every
/// configured entry when the preset has none.
pub(crate) fn build_plan(content: &ContentConfig, args: &GenerateArgs) -> BatchPlan {
    let preset = args.preset;
    let mut criteria = FilterCriteria::for_content(content);

    criteria.minimum_score = args
        .min_score
        .or(preset.map(Preset::min_score))
        .unwrap_or(criteria.minimum_score);
    criteria.avoid_duplicates = !args.allow_duplicates;

    if !args.networks.is_empty() {
        criteria.allowed_networks.clone_from(&args.networks);
    } else if let Some(names) = preset.and_then(Preset::networks) {
        criteria.allowed_networks = owned(names);
    }
    if !args.niches.is_empty() {
        criteria.allowed_niches.clone_from(&args.niches);
    } else if let Some(names) = preset.and_then(Preset::niches) {
        criteria.allowed_niches = owned(names);
    }

    BatchPlan {
        count: args
            .count
            .or(preset.map(Preset::count))
            .unwrap_or(DEFAULT_COUNT),
        criteria,
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

fn print_ideas(ideas: &[IdeaRecord]) {
    for (i, idea) in ideas.iter().enumerate() {
        println!(
            "{:>3}. [{:>3}] {} / {}: {}",
            i + 1,
            idea.quality_score.unwrap_or(0),
            idea.network,
            idea.niche,
            idea.title
        );
    }
}

fn print_summary(summary: &BatchSummary<'_>) {
    println!("average score: {:.1}", summary.average_score);
    println!("best score: {}", summary.best_score);
    println!("networks covered: {}", summary.networks_covered);
    println!("niches covered: {}", summary.niches_covered);
    println!("top ideas:");
    for (i, idea) in summary.top.iter().enumerate() {
        println!(
            "  {}. {} (score {})",
            i + 1,
            short_title(&idea.title),
            idea.quality_score.unwrap_or(0)
        );
    }
}

/// First 50 chars of `title`, with an ellipsis when cut.
pub(crate) fn short_title(title: &str) -> String {
    match title.char_indices().nth(50) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}
