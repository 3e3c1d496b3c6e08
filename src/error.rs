//! Error types for the portfolio renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading content or rendering the page
#[derive(Error, Debug)]
pub enum Error {
    /// Content violates a structural invariant (duplicate keys, bad URLs, ...)
    #[error("Invalid content: {0}")]
    ContentError(String),

    /// Content file could not be deserialized
    #[error("Failed to parse content: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Failed to produce or inspect markup
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Invalid page configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem error while reading content or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_convert() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::ParseError(_)));
        assert!(err.to_string().starts_with("Failed to parse content"));
    }
}
