//! Feed Refresher
//!
//! Polls the feed endpoint and re-renders the posts into the feed container.
//! Auto-refresh only runs when loaded on the home route (`/`):
//! - every 10 seconds by default, measured from the previous trigger
//! - a failed request or bad body is logged and the last render stays up
//! - the container is rebuilt from scratch on every successful poll

mod client;
mod config;
mod container;
mod domain;
mod error;
mod ports;
mod refresher;
mod render;
mod scheduler;



use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use client::FeedClient;
use config::Config;
use container::{HtmlContainer, OutputTarget};
use ports::FeedContainer;
use refresher::FeedRefresher;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered container
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let client = FeedClient::new(&config.api_url, &config.endpoint)
        .context("Failed to build HTTP client")?;

    tracing::info!(
        url = %client.url(),
        route = %config.route,
        "Starting feed refresher"
    );
    let container = Arc::new(HtmlContainer::new(OutputTarget::from(
        config.output_path.clone(),
    )));
    let refresher = Arc::new(FeedRefresher::new(Arc::new(client), container.clone()));

    let Some(handle) = scheduler::init(&config.route, refresher, config.refresh_interval) else {
        return Ok(());
    };

    // Runs for the lifetime of the process
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    tracing::info!(
        posts = container.children().len(),
        "Shutting down feed refresher"
    );
    handle.abort();

    Ok(())
}
