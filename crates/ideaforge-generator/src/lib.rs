//! Idea generation for ideaforge.
//!
//! Turns trending topics into scored [`IdeaRecord`](ideaforge_core::IdeaRecord)s:
//! topics are enriched with niche vocabulary, sent to a generative-text
//! provider, parsed into structured ideas, scored for completeness, and
//! filtered by the batch loop. Accepted ideas can then be given narration
//! scripts.

pub mod batch;
pub mod enrich;
pub mod error;
pub mod provider;
pub mod scorer;
pub mod script;
pub mod synthesizer;

mod fallback;
mod parse;
mod prompt;

pub use batch::{run_batch, BatchOutcome, BatchStats, BatchSummary};
pub use enrich::enrich;
pub use error::{BatchError, GenerationError};
pub use provider::{GeminiClient, SamplingConfig, TextProvider};
pub use scorer::score;
pub use script::{attach_scripts, duration_secs, format_script, script_timing};
pub use synthesizer::IdeaSynthesizer;
