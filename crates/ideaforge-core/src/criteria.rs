//! Per-run acceptance criteria for a generation batch.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ContentConfig};

/// Niches substituted when none of the requested niches are configured.
pub const DEFAULT_FALLBACK_NICHES: &[&str] = &["Tecnología", "Crecimiento Personal", "Marketing"];

/// Default minimum quality score for an idea to be accepted.
pub const DEFAULT_MINIMUM_SCORE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub minimum_score: u32,
    pub allowed_networks: Vec<String>,
    pub allowed_niches: Vec<String>,
    /// Reject ideas whose title overlaps (substring either way) an accepted title.
    pub avoid_duplicates: bool,
}

impl FilterCriteria {
    /// Every configured network and niche, minimum score 50, duplicates avoided.
    #[must_use]
    pub fn for_content(content: &ContentConfig) -> Self {
        Self {
            minimum_score: DEFAULT_MINIMUM_SCORE,
            allowed_networks: content.network_names(),
            allowed_niches: content.niche_names(),
            avoid_duplicates: true,
        }
    }

    /// Intersect the allowed sets with what `content` actually configures.
    ///
    /// Unknown names are dropped and duplicates collapsed, preserving order.
    /// If no requested niche survives, [`DEFAULT_FALLBACK_NICHES`] are used
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoValidNiches`] if even the fallback niches are
    /// unknown, and [`ConfigError::NoValidNetworks`] if no requested network
    /// is configured.
    pub fn resolve(&self, content: &ContentConfig) -> Result<Self, ConfigError> {
        let mut niches = known_unique(
            self.allowed_niches.iter().map(String::as_str),
            |n| content.niche(n).is_some(),
        );
        if niches.is_empty() {
            tracing::warn!(
                requested = ?self.allowed_niches,
                fallback = ?DEFAULT_FALLBACK_NICHES,
                "no requested niche is configured; using fallback niches"
            );
            niches = known_unique(DEFAULT_FALLBACK_NICHES.iter().copied(), |n| {
                content.niche(n).is_some()
            });
        }
        if niches.is_empty() {
            return Err(ConfigError::NoValidNiches);
        }

        let networks = known_unique(self.allowed_networks.iter().map(String::as_str), |n| {
            content.network(n).is_some()
        });
        if networks.is_empty() {
            return Err(ConfigError::NoValidNetworks);
        }

        Ok(Self {
            minimum_score: self.minimum_score,
            allowed_networks: networks,
            allowed_niches: niches,
            avoid_duplicates: self.avoid_duplicates,
        })
    }
}

fn known_unique<'a>(
    names: impl Iterator<Item = &'a str>,
    is_known: impl Fn(&str) -> bool,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        if is_known(name) && !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    }
    out
}
