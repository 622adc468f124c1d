use shared::protocol::PayloadError;
use thiserror::Error;

/// The one failure a view can hit: the catalog could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog endpoint url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog endpoint returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("catalog payload could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("catalog payload rejected: {0}")]
    Invalid(#[from] PayloadError),
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}
