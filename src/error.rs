use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LanesError>;

#[derive(Error, Debug)]
pub enum LanesError {
    /// A parameter failed local validation; nothing was sent over the wire.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request did not complete (connection, DNS, I/O).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request completed but the server did not report success.
    #[error("server returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The response body is not well-formed XML.
    #[error("invalid response document: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Well-formed XML that is missing an expected element or carries a
    /// value that cannot be converted to its expected type.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl LanesError {
    /// True for failures detected before any network activity.
    pub fn is_local(&self) -> bool {
        matches!(self, LanesError::InvalidArgument(_))
    }
}
