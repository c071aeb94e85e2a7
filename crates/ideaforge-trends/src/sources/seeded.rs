//! Static topic lists that never touch the network.

/// Evergreen topics included in every aggregation, ahead of fetched sources.
pub const BASELINE_TRENDS: &[&str] = &[
    "artificial intelligence",
    "productivity tips",
    "morning routine",
    "healthy recipes",
    "workout routine",
    "study tips",
    "life hacks",
    "tech review",
    "fashion trends",
    "travel tips",
    "money saving",
    "career advice",
    "relationship tips",
    "mental health",
    "self care",
];

const YOUTUBE_FORMATS: &[&str] = &[
    "challenge",
    "reaction",
    "review",
    "tutorial",
    "unboxing",
    "day in my life",
    "story time",
    "transformation",
    "before and after",
    "trying",
    "testing",
    "comparison",
    "tier list",
    "ranking",
];

const TIKTOK_FORMATS: &[&str] = &[
    "aesthetic",
    "that girl",
    "glow up",
    "productivity",
    "study with me",
    "get ready with me",
    "day in my life",
    "what I eat",
    "outfit of the day",
    "mini vlog",
    "life update",
    "self care",
    "wellness",
    "manifestation",
];

#[must_use]
pub fn baseline_trends() -> Vec<String> {
    to_owned(BASELINE_TRENDS)
}

/// YouTube formats plus seasonal topics for `month` (1-12).
pub(crate) fn youtube_formats(month: u32) -> Vec<String> {
    let mut topics = to_owned(YOUTUBE_FORMATS);
    match month {
        12 => topics.extend(to_owned(&["christmas", "year recap", "new year trends", "new year"])),
        1 => topics.extend(to_owned(&["new year resolutions", "goal setting", "fresh start"])),
        _ => {}
    }
    topics
}

pub(crate) fn tiktok_formats() -> Vec<String> {
    to_owned(TIKTOK_FORMATS)
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn december_adds_holiday_topics() {
        let topics = youtube_formats(12);
        assert!(topics.iter().any(|t| t == "christmas"));
        assert_eq!(topics.len(), YOUTUBE_FORMATS.len() + 4);
    }

    #[test]
    fn january_adds_resolution_topics() {
        let topics = youtube_formats(1);
        assert!(topics.iter().any(|t| t == "goal setting"));
    }

    #[test]
    fn other_months_are_plain() {
        assert_eq!(youtube_formats(6).len(), YOUTUBE_FORMATS.len());
    }

    #[test]
    fn baseline_is_non_empty() {
        assert_eq!(baseline_trends().len(), 15);
    }
}
