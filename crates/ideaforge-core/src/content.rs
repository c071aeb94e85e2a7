use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{AppConfig, ConfigError};

const BUILTIN_CONTENT: &str = include_str!("../../../config/content.yaml");

/// A thematic content category and the vocabulary used to enrich topics for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicheProfile {
    pub name: String,
    pub subtopics: Vec<String>,
    pub keywords: Vec<String>,
    pub audience: String,
    /// `true` selects the educational prompt and content type, `false` the narrative one.
    pub educational: bool,
    pub style: String,
    /// Exactly three `{topic}` templates when present.
    #[serde(default)]
    pub fallback_key_points: Vec<String>,
    #[serde(default)]
    pub fallback_hooks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub name: String,
    /// Allowed video lengths, e.g. `"15s"` or `"1-3min"`.
    pub durations: Vec<String>,
    #[serde(default)]
    pub formats: Vec<String>,
    #[serde(default)]
    pub content_types: Vec<String>,
    #[serde(default)]
    pub peak_windows: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    pub niches: Vec<NicheProfile>,
    pub networks: Vec<NetworkProfile>,
}

impl ContentConfig {
    /// The niche/network tables shipped in `config/content.yaml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded file fails to parse or validate.
    pub fn builtin() -> Result<Self, ConfigError> {
        parse_content(BUILTIN_CONTENT)
    }

    #[must_use]
    pub fn niche(&self, name: &str) -> Option<&NicheProfile> {
        self.niches.iter().find(|n| n.name == name)
    }

    #[must_use]
    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.iter().find(|n| n.name == name)
    }

    #[must_use]
    pub fn niche_names(&self) -> Vec<String> {
        self.niches.iter().map(|n| n.name.clone()).collect()
    }

    #[must_use]
    pub fn network_names(&self) -> Vec<String> {
        self.networks.iter().map(|n| n.name.clone()).collect()
    }
}

/// Load the content tables named by `config.content_path`, or the built-in
/// tables when no path is configured.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_content(config: &AppConfig) -> Result<ContentConfig, ConfigError> {
    match &config.content_path {
        Some(path) => load_content_config(path),
        None => ContentConfig::builtin(),
    }
}

/// Load and validate niche/network tables from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_content_config(path: &Path) -> Result<ContentConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ContentFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_content(&content)
}

fn parse_content(yaml: &str) -> Result<ContentConfig, ConfigError> {
    let config: ContentConfig = serde_yaml::from_str(yaml)?;
    validate_content(&config)?;
    Ok(config)
}

fn validate_content(config: &ContentConfig) -> Result<(), ConfigError> {
    if config.niches.is_empty() {
        return Err(ConfigError::Validation(
            "at least one niche must be configured".to_string(),
        ));
    }
    if config.networks.is_empty() {
        return Err(ConfigError::Validation(
            "at least one network must be configured".to_string(),
        ));
    }

    let mut seen_niches = HashSet::new();
    for niche in &config.niches {
        if niche.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "niche name must be non-empty".to_string(),
            ));
        }
        if !seen_niches.insert(niche.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate niche name: '{}'",
                niche.name
            )));
        }
        if niche.keywords.is_empty() || niche.subtopics.is_empty() {
            return Err(ConfigError::Validation(format!(
                "niche '{}' needs at least one keyword and one subtopic",
                niche.name
            )));
        }
        if !niche.fallback_key_points.is_empty() && niche.fallback_key_points.len() != 3 {
            return Err(ConfigError::Validation(format!(
                "niche '{}' has {} fallback key points; expected 3",
                niche.name,
                niche.fallback_key_points.len()
            )));
        }
    }

    let mut seen_networks = HashSet::new();
    for network in &config.networks {
        if network.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "network name must be non-empty".to_string(),
            ));
        }
        if !seen_networks.insert(network.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate network name: '{}'",
                network.name
            )));
        }
    }

    Ok(())
}
