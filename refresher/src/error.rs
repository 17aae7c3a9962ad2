//! Error types for the feed refresher
//!
//! Every failure inside a refresh cycle ends up as a `FeedError`. The
//! scheduler logs it and waits for the next tick.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The request never produced a response (connection refused, DNS, reset...)
    #[error("Request failed: {0}")]
    Network(String),

    /// The body was not a valid feed document
    #[error("Failed to parse feed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write feed container: {0}")]
    Output(#[from] std::io::Error),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Network(err.to_string())
    }
}
