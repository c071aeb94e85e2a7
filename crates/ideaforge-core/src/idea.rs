use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::NicheProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Educational,
    Narrative,
}

impl ContentType {
    #[must_use]
    pub fn for_niche(niche: &NicheProfile) -> Self {
        if niche.educational {
            ContentType::Educational
        } else {
            ContentType::Narrative
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Educational => write!(f, "educational"),
            ContentType::Narrative => write!(f, "narrative"),
        }
    }
}

/// Niche-derived fields stamped onto an idea at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaMetadata {
    pub generated_at: DateTime<Utc>,
    pub category: String,
    pub style: Option<String>,
    pub audience: Option<String>,
    pub keywords: Vec<String>,
}

/// One synthesized content concept.
///
/// Created per generation attempt. `quality_score` is filled in by scoring
/// and `script` by the script formatter after acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaRecord {
    pub id: Uuid,
    pub topic: String,
    pub network: String,
    pub niche: String,
    pub title: String,
    pub hook: String,
    pub description: String,
    pub key_points: Vec<String>,
    pub hashtags: Vec<String>,
    pub content_type: ContentType,
    pub metadata: IdeaMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptBundle>,
}

impl IdeaRecord {
    /// An idea with empty text fields and metadata taken from `niche`.
    #[must_use]
    pub fn new(topic: &str, network: &str, niche: &NicheProfile) -> Self {
        let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
        Self {
            id: Uuid::new_v4(),
            topic: topic.to_string(),
            network: network.to_string(),
            niche: niche.name.clone(),
            title: String::new(),
            hook: String::new(),
            description: String::new(),
            key_points: Vec::new(),
            hashtags: Vec::new(),
            content_type: ContentType::for_niche(niche),
            metadata: IdeaMetadata {
                generated_at: Utc::now(),
                category: niche.name.clone(),
                style: non_empty(&niche.style),
                audience: non_empty(&niche.audience),
                keywords: niche.keywords.clone(),
            },
            quality_score: None,
            script: None,
        }
    }

    /// Append a hashtag unless an equal one (ignoring case) is already present.
    pub fn push_hashtag(&mut self, tag: &str) {
        let lowered = tag.to_lowercase();
        if !self
            .hashtags
            .iter()
            .any(|existing| existing.to_lowercase() == lowered)
        {
            self.hashtags.push(tag.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDirection {
    pub tone: String,
    pub pace: String,
    pub emotion: String,
}

/// Seconds allotted to each section of a narrated video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptTiming {
    pub total_secs: u32,
    pub hook_secs: u32,
    pub body_secs: u32,
    pub climax_secs: u32,
    pub close_secs: u32,
}

/// Narration text derived from an accepted idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptBundle {
    pub long_form: String,
    pub short_15s: String,
    pub short_30s: String,
    pub voice: VoiceDirection,
    pub timing: Option<ScriptTiming>,
    pub word_count: usize,
    /// Speaking time of `long_form` at roughly 150 words per minute.
    pub estimated_secs: f32,
}
