//! Line-oriented parser for labelled provider responses.
//!
//! Each line is searched for the labels in [`LABEL_RULES`], then checked
//! against the list-marker rule. Anything unrecognized is ignored, so parsing never
//! fails; missing fields simply stay empty.

use std::sync::LazyLock;

use regex::Regex;

static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag regex"));

const LIST_MARKERS: &[&str] = &["- ", "* ", "• "];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Hook,
    Description,
    KeyPoints,
    Hashtags,
}

/// Label table. A label may appear anywhere in a line (`1. Título:`,
/// `**Hook:**`); when several do, the leftmost wins.
const LABEL_RULES: &[(&[&str], Field)] = &[
    (&["título:", "titulo:"], Field::Title),
    (&["hook:"], Field::Hook),
    (&["descripción:", "descripcion:"], Field::Description),
    (&["puntos clave:"], Field::KeyPoints),
    (&["hashtags:"], Field::Hashtags),
];

/// Fields recovered from one response.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ParsedIdea {
    pub title: String,
    pub hook: String,
    pub description: String,
    pub key_points: Vec<String>,
    pub hashtags: Vec<String>,
}

impl ParsedIdea {
    fn push_hashtag(&mut self, tag: String) {
        let lowered = tag.to_lowercase();
        if !self.hashtags.iter().any(|t| t.to_lowercase() == lowered) {
            self.hashtags.push(tag);
        }
    }
}

pub(crate) fn parse_response(text: &str) -> ParsedIdea {
    let mut idea = ParsedIdea::default();
    let mut section: Option<Field> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((field, value_start)) = match_label(line) {
            section = Some(field);
            let value = clean_value(&line[value_start..]);
            match field {
                Field::Title => idea.title = value,
                Field::Hook => idea.hook = value,
                Field::Description => idea.description = value,
                Field::KeyPoints => {}
                Field::Hashtags => {
                    for word in value.split([',', ' ']).filter(|w| !w.is_empty()) {
                        let tag = word.trim_start_matches('#');
                        if !tag.is_empty() && tag.chars().all(|c| c.is_alphanumeric() || c == '_') {
                            idea.push_hashtag(format!("#{tag}"));
                        }
                    }
                }
            }
        } else if let Some(item) = strip_list_marker(line) {
            if matches!(section, None | Some(Field::KeyPoints)) {
                let point = clean_value(item);
                if !point.is_empty() {
                    idea.key_points.push(point);
                }
            }
        }

        for tag in HASHTAG.find_iter(line) {
            idea.push_hashtag(tag.as_str().to_string());
        }
    }

    idea
}

/// Field of the leftmost label in `line` and the byte offset just past it.
fn match_label(line: &str) -> Option<(Field, usize)> {
    LABEL_RULES
        .iter()
        .flat_map(|(labels, field)| labels.iter().map(move |label| (*field, *label)))
        .filter_map(|(field, label)| find_caseless(line, label).map(|span| (field, span)))
        .min_by_key(|(_, (start, _))| *start)
        .map(|(field, (_, end))| (field, end))
}

/// Byte span of the first occurrence of lowercase `needle` in `haystack`,
/// ignoring case. Works on chars so offsets stay valid in `haystack`.
fn find_caseless(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    haystack.char_indices().find_map(|(start, _)| {
        let mut expected = needle.chars();
        let mut pending = expected.next();
        for (offset, c) in haystack[start..].char_indices() {
            for lowered in c.to_lowercase() {
                if pending != Some(lowered) {
                    return None;
                }
                pending = expected.next();
            }
            if pending.is_none() {
                return Some((start, start + offset + c.len_utf8()));
            }
        }
        None
    })
}

fn strip_list_marker(line: &str) -> Option<&str> {
    LIST_MARKERS.iter().find_map(|m| line.strip_prefix(m))
}

fn clean_value(value: &str) -> String {
    value
        .trim_matches(|c: char| c == '*' || c.is_whitespace())
        .to_string()
}
