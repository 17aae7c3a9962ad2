//! HTTP client for the feed endpoint

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::domain::FeedResponse;
use crate::error::FeedError;
use crate::ports::FeedSource;

/// Fetches feed snapshots over HTTP
#[derive(Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    base_url: String,
    endpoint: String,
}

impl FeedClient {
    pub fn new(base_url: &str, endpoint: &str) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let endpoint = if endpoint.starts_with('/') {
            endpoint.to_string()
        } else {
            format!("/{}", endpoint)
        };

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint,
        })
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_feed(&self) -> Result<FeedResponse, FeedError> {
        let url = self.url();
        tracing::debug!(%url, "Fetching feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // The status alone never rejects a response; only the body decides
        if !status.is_success() {
            tracing::warn!(
                %url,
                status = status.as_u16(),
                "Feed endpoint returned non-success status"
            );
        }

        Ok(serde_json::from_str(&body)?)
    }
}
