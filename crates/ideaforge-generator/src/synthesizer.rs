//! Provider-backed idea synthesis.

use ideaforge_core::{IdeaRecord, NicheProfile};
use rand::Rng;

use crate::error::GenerationError;
use crate::fallback::{fallback_hook, fallback_key_points};
use crate::parse::parse_response;
use crate::prompt::build_prompt;
use crate::provider::{SamplingConfig, TextProvider};

/// Builds [`IdeaRecord`]s by prompting a [`TextProvider`] and parsing its reply.
pub struct IdeaSynthesizer<P> {
    provider: P,
    sampling: SamplingConfig,
}

impl<P: TextProvider> IdeaSynthesizer<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            sampling: SamplingConfig::default(),
        }
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate one idea for `topic` on `network` within `niche`.
    ///
    /// Missing key points are replaced with the niche's three fallback
    /// points and a missing hook with a randomly chosen fallback hook, so a
    /// successful provider call always yields a record.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the provider call fails.
    pub async fn synthesize<R: Rng + ?Sized>(
        &self,
        topic: &str,
        network: &str,
        niche: &NicheProfile,
        rng: &mut R,
    ) -> Result<IdeaRecord, GenerationError> {
        let prompt = build_prompt(topic, network, niche);
        let text = self.provider.generate(&prompt, &self.sampling).await?;
        let parsed = parse_response(&text);

        let mut idea = IdeaRecord::new(topic, network, niche);
        idea.title = parsed.title;
        idea.description = parsed.description;
        idea.key_points = if parsed.key_points.is_empty() {
            tracing::debug!(topic, niche = %niche.name, "no key points in response; using fallback");
            fallback_key_points(topic, niche)
        } else {
            parsed.key_points
        };
        idea.hook = if parsed.hook.is_empty() {
            fallback_hook(topic, niche, rng)
        } else {
            parsed.hook
        };
        for tag in &parsed.hashtags {
            idea.push_hashtag(tag);
        }

        Ok(idea)
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;

    use ideaforge_core::ContentType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct Canned(&'static str);

    impl TextProvider for Canned {
        fn generate(
            &self,
            _prompt: &str,
            _sampling: &SamplingConfig,
        ) -> impl Future<Output = Result<String, GenerationError>> + Send {
            let text = self.0.to_string();
            async move { Ok(text) }
        }
    }

    struct Failing;

    impl TextProvider for Failing {
        fn generate(
            &self,
            _prompt: &str,
            _sampling: &SamplingConfig,
        ) -> impl Future<Output = Result<String, GenerationError>> + Send {
            async { Err(GenerationError::EmptyResponse) }
        }
    }

    fn niche() -> NicheProfile {
        NicheProfile {
            name: "Tecnología".to_string(),
            subtopics: vec!["IA".to_string()],
            keywords: vec!["tutorial".to_string()],
            audience: "devs".to_string(),
            educational: true,
            style: "técnico".to_string(),
            fallback_key_points: vec![
                "uno {topic}".to_string(),
                "dos {topic}".to_string(),
                "tres {topic}".to_string(),
            ],
            fallback_hooks: vec!["gancho {topic}".to_string()],
        }
    }

    #[tokio::test]
    async fn builds_record_from_labelled_reply() {
        let synth = IdeaSynthesizer::new(Canned(
            "Título: Rust en 60s\nHook: ¿Listo?\nDescripción: Intro rápida\nPuntos Clave:\n- Ownership\nHashtags: #rust #dev",
        ));
        let mut rng = StdRng::seed_from_u64(1);
        let idea = synth
            .synthesize("rust", "TikTok", &niche(), &mut rng)
            .await
            .unwrap();

        assert_eq!(idea.topic, "rust");
        assert_eq!(idea.network, "TikTok");
        assert_eq!(idea.niche, "Tecnología");
        assert_eq!(idea.title, "Rust en 60s");
        assert_eq!(idea.hook, "¿Listo?");
        assert_eq!(idea.key_points, vec!["Ownership".to_string()]);
        assert_eq!(idea.hashtags, vec!["#rust".to_string(), "#dev".to_string()]);
        assert_eq!(idea.content_type, ContentType::Educational);
        assert_eq!(idea.metadata.style.as_deref(), Some("técnico"));
    }

    #[tokio::test]
    async fn fills_missing_fields_from_niche_fallbacks() {
        let synth = IdeaSynthesizer::new(Canned("Título: Solo título"));
        let mut rng = StdRng::seed_from_u64(1);
        let idea = synth
            .synthesize("rust", "TikTok", &niche(), &mut rng)
            .await
            .unwrap();

        assert_eq!(
            idea.key_points,
            vec!["uno rust".to_string(), "dos rust".to_string(), "tres rust".to_string()]
        );
        assert_eq!(idea.hook, "gancho rust");
        assert!(idea.description.is_empty());
    }

    #[tokio::test]
    async fn provider_failure_yields_no_record() {
        let synth = IdeaSynthesizer::new(Failing);
        let mut rng = StdRng::seed_from_u64(1);
        let result = synth.synthesize("rust", "TikTok", &niche(), &mut rng).await;
        assert!(matches!(result, Err(GenerationError::EmptyResponse)));
    }
}
