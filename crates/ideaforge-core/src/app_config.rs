use std::path::PathBuf;

use crate::ConfigError;

#[derive(Clone)]
pub struct AppConfig {
    /// Only `generate` needs it; listing commands run without a key.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub provider_timeout_secs: u64,
    pub trend_source_timeout_secs: u64,
    pub trend_max_concurrent: usize,
    pub max_trends: usize,
    pub user_agent: String,
    /// `None` means the built-in niche/network tables are used.
    pub content_path: Option<PathBuf>,
    pub log_level: String,
}

impl AppConfig {
    /// The Gemini key, for commands that call the provider.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` when `GEMINI_API_KEY` is unset.
    pub fn require_gemini_api_key(&self) -> Result<&str, ConfigError> {
        self.gemini_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_owned()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .field("trend_source_timeout_secs", &self.trend_source_timeout_secs)
            .field("trend_max_concurrent", &self.trend_max_concurrent)
            .field("max_trends", &self.max_trends)
            .field("user_agent", &self.user_agent)
            .field("content_path", &self.content_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}
