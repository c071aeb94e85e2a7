use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("source '{source_name}' timed out after {secs}s")]
    Timeout { source_name: String, secs: u64 },
}
