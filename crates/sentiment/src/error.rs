//! Error types for sentiment classification

use thiserror::Error;

/// Sentiment boundary errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sentiment API error: {0}")]
    Api(String),
}

/// Result type alias for sentiment operations
pub type Result<T> = std::result::Result<T, Error>;
