mod generate;
mod listing;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ideaforge-cli")]
#[command(about = "Generate short-video content ideas from trending topics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect and print the current trending topics
    Trends,
    /// List the configured niches and networks
    Niches,
    /// Run a generation batch over the current trends
    Generate(GenerateArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateArgs {
    /// Batch profile supplying count, minimum score, and filters
    #[arg(long, value_enum)]
    preset: Option<generate::Preset>,

    /// Number of ideas to accept [default: 20, or the preset's]
    #[arg(long)]
    count: Option<usize>,

    /// Minimum quality score (0-100) for an idea to be accepted [default: 50, or the preset's]
    #[arg(long)]
    min_score: Option<u32>,

    /// Restrict to a network; repeat for several (default: all)
    #[arg(long = "network")]
    networks: Vec<String>,

    /// Restrict to a niche; repeat for several (default: all)
    #[arg(long = "niche")]
    niches: Vec<String>,

    /// Keep ideas whose titles overlap an accepted title
    #[arg(long)]
    allow_duplicates: bool,

    /// Seed for topic/network/niche selection, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write accepted ideas as pretty JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip narration script generation
    #[arg(long)]
    no_scripts: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = ideaforge_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let content = ideaforge_core::load_content(&config)?;

    match cli.command {
        Some(Commands::Trends) => listing::run_trends(&config).await?,
        Some(Commands::Niches) => listing::print_niches(&content),
        Some(Commands::Generate(args)) => generate::run_generate(&config, &content, &args).await?,
        None => println!("ideaforge-cli ready; run with --help for commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
