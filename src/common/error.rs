//! Error types for the application.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Verse-lookup errors. All are absorbed by the scan loop; a failed lookup
/// only ever costs the reply for that one citation.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response from {url} was not verse data (content-type '{content_type}')")]
    UnexpectedContentType { url: String, content_type: String },

    #[error("Response body from {url} too short to unwrap")]
    TruncatedBody { url: String },

    #[error("Failed to parse verse data from {url}: {source}")]
    MalformedBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using AppError.
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for verse lookups.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
