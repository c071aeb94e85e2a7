//! Topic enrichment with niche vocabulary.

use ideaforge_core::NicheProfile;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Combine `topic` with a random keyword or subtopic of `niche`.
///
/// With even odds the result is `"{keyword} {topic}"` or
/// `"{topic} en {subtopic}"`. Without a niche, or when the chosen list is
/// empty, the topic is returned unchanged.
pub fn enrich<R: Rng + ?Sized>(topic: &str, niche: Option<&NicheProfile>, rng: &mut R) -> String {
    let Some(niche) = niche else {
        return topic.to_string();
    };

    if rng.random_bool(0.5) {
        match niche.keywords.choose(rng) {
            Some(keyword) => format!("{keyword} {topic}"),
            None => topic.to_string(),
        }
    } else {
        match niche.subtopics.choose(rng) {
            Some(subtopic) => format!("{topic} en {subtopic}"),
            None => topic.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn niche(keywords: &[&str], subtopics: &[&str]) -> NicheProfile {
        NicheProfile {
            name: "Tecnología".to_string(),
            subtopics: subtopics.iter().map(|s| (*s).to_string()).collect(),
            keywords: keywords.iter().map(|s| (*s).to_string()).collect(),
            audience: String::new(),
            educational: true,
            style: String::new(),
            fallback_key_points: vec![],
            fallback_hooks: vec![],
        }
    }

    #[test]
    fn yields_only_the_two_documented_shapes() {
        let n = niche(&["tutorial"], &["AI"]);
        let mut rng = StdRng::seed_from_u64(42);
        let outputs: HashSet<String> = (0..200)
            .map(|_| enrich("coding", Some(&n), &mut rng))
            .collect();
        let expected: HashSet<String> = ["tutorial coding", "coding en AI"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(outputs, expected);
    }

    #[test]
    fn unknown_niche_returns_topic_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(enrich("coding", None, &mut rng), "coding");
    }

    #[test]
    fn empty_vocabulary_returns_topic_unchanged() {
        let n = niche(&[], &[]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(enrich("coding", Some(&n), &mut rng), "coding");
        }
    }

    #[test]
    fn same_seed_same_result() {
        let n = niche(&["guía", "trucos"], &["IA", "apps"]);
        let a = enrich("coding", Some(&n), &mut StdRng::seed_from_u64(9));
        let b = enrich("coding", Some(&n), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
