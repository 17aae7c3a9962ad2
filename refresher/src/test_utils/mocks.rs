//! Mock implementations of port traits
//!
//! In-memory stand-ins for the feed endpoint and the render target. They
//! record how they were used so tests can assert on it.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::FeedResponse;
use crate::error::FeedError;
use crate::ports::{FeedContainer, FeedSource};
use crate::render::PostElement;

// ============================================================================
// Mock Feed Source
// ============================================================================

enum Scripted {
    Feed(FeedResponse),
    Body(String),
    NetworkError(String),
}

/// Replays scripted responses in order, then falls back to a default feed
///
/// Each response can be held back for a while before it is returned, to
/// model slow requests. Steps are taken off the script when the call
/// starts, so call order decides which step a call gets.
#[derive(Default)]
pub struct MockFeedSource {
    script: Mutex<VecDeque<(Option<Duration>, Scripted)>>,
    default: Option<FeedResponse>,
    delay: Duration,
    calls: AtomicUsize,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(self, feed: FeedResponse) -> Self {
        self.push(None, Scripted::Feed(feed))
    }

    /// Like `with_feed`, but this response takes `delay` to arrive
    pub fn with_delayed_feed(self, delay: Duration, feed: FeedResponse) -> Self {
        self.push(Some(delay), Scripted::Feed(feed))
    }

    /// Respond with a raw body that still has to be parsed
    pub fn with_body(self, body: &str) -> Self {
        self.push(None, Scripted::Body(body.to_string()))
    }

    pub fn with_network_error(self, message: &str) -> Self {
        self.push(None, Scripted::NetworkError(message.to_string()))
    }

    /// Returned once the script runs out
    pub fn with_default(mut self, feed: FeedResponse) -> Self {
        self.default = Some(feed);
        self
    }

    /// Delay applied to every response without a delay of its own
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of fetches started so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(self, delay: Option<Duration>, step: Scripted) -> Self {
        self.script.lock().unwrap().push_back((delay, step));
        self
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_feed(&self) -> Result<FeedResponse, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, step) = match self.script.lock().unwrap().pop_front() {
            Some((delay, step)) => (delay.unwrap_or(self.delay), Some(step)),
            None => (self.delay, None),
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match step {
            Some(Scripted::Feed(feed)) => Ok(feed),
            Some(Scripted::Body(body)) => Ok(serde_json::from_str(&body)?),
            Some(Scripted::NetworkError(message)) => Err(FeedError::Network(message)),
            None => self
                .default
                .clone()
                .ok_or_else(|| FeedError::Network("no scripted response".to_string())),
        }
    }
}

// ============================================================================
// In-Memory Feed Container
// ============================================================================

#[derive(Default)]
pub struct InMemoryFeedContainer {
    children: Mutex<Vec<PostElement>>,
    replacements: AtomicUsize,
    fail_writes: bool,
}

impl InMemoryFeedContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every replacement fails with an I/O error
    pub fn failing(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of successful replacements so far
    pub fn replace_count(&self) -> usize {
        self.replacements.load(Ordering::SeqCst)
    }
}

impl FeedContainer for InMemoryFeedContainer {
    fn replace_children(&self, elements: Vec<PostElement>) -> Result<(), FeedError> {
        if self.fail_writes {
            return Err(FeedError::Output(std::io::Error::new(
                std::io::ErrorKind::Other,
                "container unavailable",
            )));
        }
        *self.children.lock().unwrap() = elements;
        self.replacements.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn children(&self) -> Vec<PostElement> {
        self.children.lock().unwrap().clone()
    }
}
