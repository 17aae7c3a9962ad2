use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::scheduler::{DEFAULT_REFRESH_INTERVAL, HOME_ROUTE};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_ENDPOINT: &str = "/api/feed";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the server hosting the feed
    pub api_url: String,
    pub endpoint: String,
    pub refresh_interval: Duration,
    /// Route the refresher was loaded on; only the home route auto-refreshes
    pub route: String,
    /// Write container markup here instead of stdout
    pub output_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            route: HOME_ROUTE.to_string(),
            output_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let refresh_interval = match lookup("FEED_REFRESH_INTERVAL_MS") {
            Some(raw) => parse_interval(&raw)?,
            None => defaults.refresh_interval,
        };

        Ok(Self {
            api_url: lookup("FEED_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            endpoint: lookup("FEED_ENDPOINT").unwrap_or(defaults.endpoint),
            refresh_interval,
            route: lookup("FEED_ROUTE").unwrap_or(defaults.route),
            output_path: lookup("FEED_OUTPUT_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_interval(raw: &str) -> Result<Duration> {
    let ms: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("FEED_REFRESH_INTERVAL_MS is not a number: {:?}", raw))?;
    if ms == 0 {
        anyhow::bail!("FEED_REFRESH_INTERVAL_MS must be greater than zero");
    }
    Ok(Duration::from_millis(ms))
}
