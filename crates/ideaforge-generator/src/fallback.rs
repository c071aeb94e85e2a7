//! Substitute content for fields the provider left out.

use ideaforge_core::NicheProfile;
use rand::seq::IndexedRandom;
use rand::Rng;

const GENERIC_KEY_POINTS: [&str; 3] = [
    "Estrategia práctica para implementar {topic}",
    "Los 3 principales beneficios de dominar {topic}",
    "Cómo medir y optimizar tus resultados con {topic}",
];

const GENERIC_HOOK: &str =
    "¿Sabías que el 78% de personas nunca aprovecha todo el potencial de {topic}? Esto cambiará tu perspectiva.";

/// Three key points for `topic`, from the niche's templates when it has them.
///
/// Deterministic: the same topic and niche always give the same points.
pub(crate) fn fallback_key_points(topic: &str, niche: &NicheProfile) -> Vec<String> {
    if niche.fallback_key_points.is_empty() {
        GENERIC_KEY_POINTS
            .iter()
            .map(|t| render(t, topic))
            .collect()
    } else {
        niche
            .fallback_key_points
            .iter()
            .map(|t| render(t, topic))
            .collect()
    }
}

/// A hook for `topic`, picked at random from the niche's templates.
pub(crate) fn fallback_hook<R: Rng + ?Sized>(
    topic: &str,
    niche: &NicheProfile,
    rng: &mut R,
) -> String {
    let template = niche
        .fallback_hooks
        .choose(rng)
        .map_or(GENERIC_HOOK, String::as_str);
    render(template, topic)
}

fn render(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn niche(points: &[&str], hooks: &[&str]) -> NicheProfile {
        NicheProfile {
            name: "Marketing".to_string(),
            subtopics: vec!["SEO".to_string()],
            keywords: vec!["ventas".to_string()],
            audience: String::new(),
            educational: true,
            style: String::new(),
            fallback_key_points: points.iter().map(|s| (*s).to_string()).collect(),
            fallback_hooks: hooks.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn niche_templates_are_rendered_in_order() {
        let n = niche(&["a {topic}", "b {topic}", "c {topic}"], &[]);
        assert_eq!(
            fallback_key_points("seo", &n),
            vec!["a seo".to_string(), "b seo".to_string(), "c seo".to_string()]
        );
    }

    #[test]
    fn niche_without_templates_gets_generic_points() {
        let points = fallback_key_points("reddit", &niche(&[], &[]));
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.contains("reddit")));
    }

    #[test]
    fn hook_comes_from_niche_templates() {
        let n = niche(&[], &["uno {topic}", "dos {topic}"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let hook = fallback_hook("ia", &n, &mut rng);
            assert!(hook == "uno ia" || hook == "dos ia", "unexpected hook {hook}");
        }
    }

    #[test]
    fn hook_falls_back_to_generic() {
        let mut rng = StdRng::seed_from_u64(7);
        let hook = fallback_hook("ia", &niche(&[], &[]), &mut rng);
        assert!(hook.contains("potencial de ia"));
    }
}
