use ideaforge_core::ConfigError;
use thiserror::Error;

/// A failed provider call. The batch loop counts it as a used attempt.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode provider response: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("provider response contained no text")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid batch configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no trends available to generate ideas from")]
    NoTrends,
}
