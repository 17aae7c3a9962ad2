//! Feed data model
//!
//! Mirrors the JSON served by the feed endpoint:
//! `{ "feed": [ { "username": "...", "content": "..." } ] }`

use serde::{Deserialize, Serialize};

/// A single feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub username: String,
    pub content: String,
}

/// One poll's worth of posts, in server order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub feed: Vec<Post>,
}
