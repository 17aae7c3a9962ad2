//! Feed Refresher
//!
//! One refresh cycle: fetch the feed, and only once it has parsed, swap
//! the container contents for the new posts. A failed fetch never blanks
//! the container.

use std::sync::Arc;

use crate::error::FeedError;
use crate::ports::{FeedContainer, FeedSource};
use crate::render::render;

pub struct FeedRefresher<S, C>
where
    S: FeedSource,
    C: FeedContainer,
{
    source: Arc<S>,
    container: Arc<C>,
}

impl<S, C> FeedRefresher<S, C>
where
    S: FeedSource,
    C: FeedContainer,
{
    pub fn new(source: Arc<S>, container: Arc<C>) -> Self {
        Self { source, container }
    }

    /// Run one refresh cycle, returning how many posts were rendered
    ///
    /// Errors are logged here; callers may ignore the returned error.
    pub async fn refresh(&self) -> Result<usize, FeedError> {
        let response = match self.source.fetch_feed().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching feed");
                return Err(e);
            }
        };

        let elements = render(&response.feed);
        let count = elements.len();

        if let Err(e) = self.container.replace_children(elements) {
            tracing::error!(error = %e, "Error rendering feed");
            return Err(e);
        }

        tracing::debug!(posts = count, "Feed refreshed");
        Ok(count)
    }
}
