//! Structural quality score for generated ideas.

use ideaforge_core::{ContentType, IdeaRecord};

/// Score `idea` from 0 to 100 by how complete its structure is.
///
/// | Component | Points |
/// |---|---|
/// | title present / 6..=99 chars | 15 / +10 |
/// | description present / over 20 chars | 15 / +10 |
/// | key points | 5 each, max 25 |
/// | hashtags | 3 each, max 15 |
/// | style / audience / keywords in metadata | 3 / 3 / 4 |
/// | educational: 3+ key points and description over 50 chars | 10 |
/// | narrative: description over 100 chars | 10 |
///
/// Lengths are in characters. The total is capped at 100; `None` scores 0.
#[must_use]
pub fn score(idea: Option<&IdeaRecord>) -> u8 {
    let Some(idea) = idea else {
        return 0;
    };

    let title_len = idea.title.chars().count();
    let description_len = idea.description.chars().count();
    let mut total: usize = 0;

    if title_len > 0 {
        total += 15;
        if title_len > 5 && title_len < 100 {
            total += 10;
        }
    }

    if description_len > 0 {
        total += 15;
        if description_len > 20 {
            total += 10;
        }
    }

    total += (idea.key_points.len() * 5).min(25);
    total += (idea.hashtags.len() * 3).min(15);

    if idea.metadata.style.is_some() {
        total += 3;
    }
    if idea.metadata.audience.is_some() {
        total += 3;
    }
    if !idea.metadata.keywords.is_empty() {
        total += 4;
    }

    let bonus = match idea.content_type {
        ContentType::Educational => idea.key_points.len() >= 3 && description_len > 50,
        ContentType::Narrative => description_len > 100,
    };
    if bonus {
        total += 10;
    }

    u8::try_from(total.min(100)).unwrap_or(100)
}
