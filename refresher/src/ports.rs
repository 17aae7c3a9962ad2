//! Ports
//!
//! The refresher only talks to the outside world through these two traits:
//! where posts come from, and where rendered posts go.

use async_trait::async_trait;

use crate::domain::FeedResponse;
use crate::error::FeedError;
use crate::render::PostElement;

/// Source of feed snapshots
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the current feed
    async fn fetch_feed(&self) -> Result<FeedResponse, FeedError>;
}

/// Render target holding the currently displayed posts
///
/// Implementations must make `replace_children` atomic with respect to
/// concurrent callers: readers never observe a half-rebuilt container.
pub trait FeedContainer: Send + Sync {
    /// Drop every existing child, then append `elements` in order
    fn replace_children(&self, elements: Vec<PostElement>) -> Result<(), FeedError>;

    /// Snapshot of the current children
    fn children(&self) -> Vec<PostElement>;
}
