//! Shared configuration and domain types for ideaforge.
//!
//! Everything the pipeline crates agree on lives here: the env-driven
//! [`AppConfig`], the niche/network tables in [`ContentConfig`], the
//! per-run [`FilterCriteria`], and the [`IdeaRecord`] produced for every
//! accepted content concept.

pub mod app_config;
pub mod config;
pub mod content;
pub mod criteria;
pub mod idea;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{load_content, load_content_config, ContentConfig, NetworkProfile, NicheProfile};
pub use criteria::{FilterCriteria, DEFAULT_FALLBACK_NICHES};
pub use idea::{ContentType, IdeaMetadata, IdeaRecord, ScriptBundle, ScriptTiming, VoiceDirection};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read content file {path}: {source}")]
    ContentFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file: {0}")]
    ContentFileParse(#[from] serde_yaml::Error),

    #[error("content validation failed: {0}")]
    Validation(String),

    #[error("no allowed niche matches the configured niches")]
    NoValidNiches,

    #[error("no allowed network matches the configured networks")]
    NoValidNetworks,
}
