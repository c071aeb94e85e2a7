//! Shared RSS fetching and item-title extraction.
//!
//! Used by [`super::google_trends`] and [`super::news`].

use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::StatusCode;

use crate::error::TrendError;

/// GET `url` and return the body; anything other than `200 OK` is an error.
pub(crate) async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<String, TrendError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(TrendError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Outside,
    InItem,
    InItemTitle,
}

/// Extract the `<title>` of the first `max_items` `<item>` elements.
///
/// Channel-level titles are ignored. Items without a title are skipped but
/// still count toward `max_items`.
pub(crate) fn parse_rss_titles(xml: &str, max_items: usize) -> Result<Vec<String>, TrendError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut titles = Vec::new();
    let mut items_seen = 0usize;
    let mut cursor = Cursor::Outside;
    let mut current = String::new();

    while items_seen < max_items {
        match reader.read_event().map_err(TrendError::Xml)? {
            Event::Start(tag) => match (cursor, tag.local_name().as_ref()) {
                (_, b"item") => {
                    cursor = Cursor::InItem;
                    current.clear();
                }
                (Cursor::InItem, b"title") => cursor = Cursor::InItemTitle,
                _ => {}
            },
            Event::End(tag) => match (cursor, tag.local_name().as_ref()) {
                (Cursor::InItemTitle, b"title") => cursor = Cursor::InItem,
                (Cursor::InItem, b"item") => {
                    cursor = Cursor::Outside;
                    items_seen += 1;
                    let trimmed = current.trim();
                    if !trimmed.is_empty() {
                        titles.push(trimmed.to_owned());
                    }
                }
                _ => {}
            },
            Event::Text(text) if cursor == Cursor::InItemTitle => {
                current.push_str(&text.unescape().unwrap_or_default());
            }
            Event::CData(data) if cursor == Cursor::InItemTitle => {
                current.push_str(&String::from_utf8_lossy(&data));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(titles)
}
