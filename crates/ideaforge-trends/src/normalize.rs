//! Trend normalization and merge.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Shortest normalized trend kept, in characters.
pub const MIN_TREND_CHARS: usize = 3;
/// Longest normalized trend kept, in characters.
pub const MAX_TREND_CHARS: usize = 50;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid non-word regex"));

/// Lowercase, strip punctuation, and trim a raw topic string.
///
/// Returns `None` when the result falls outside
/// [`MIN_TREND_CHARS`]..=[`MAX_TREND_CHARS`]. Applying it to its own output
/// returns the same string.
#[must_use]
pub fn normalize_trend(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let trimmed = stripped.trim();
    let len = trimmed.chars().count();
    (MIN_TREND_CHARS..=MAX_TREND_CHARS)
        .contains(&len)
        .then(|| trimmed.to_string())
}

/// Normalize every raw entry, keep the first occurrence of each, and cap at `limit`.
pub fn merge_trends<I, S>(raw: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    raw.into_iter()
        .filter_map(|t| normalize_trend(t.as_ref()))
        .filter(|t| seen.insert(t.clone()))
        .take(limit)
        .collect()
}
