//! Refresh scheduling
//!
//! Auto-refresh only runs on the home route. Each tick spawns its own
//! refresh task, so a slow request does not delay the next tick and
//! overlapping requests are possible. Whichever finishes rendering last
//! wins.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::ports::{FeedContainer, FeedSource};
use crate::refresher::FeedRefresher;

/// The only route that auto-refreshes
pub const HOME_ROUTE: &str = "/";

/// Default time between refresh triggers
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(10_000);

/// Start auto-refresh if `route` is exactly the home route
///
/// The first refresh fires one full `interval` after this call. Returns
/// `None`, and schedules nothing, for any other route.
pub fn init<S, C>(
    route: &str,
    refresher: Arc<FeedRefresher<S, C>>,
    interval: Duration,
) -> Option<JoinHandle<()>>
where
    S: FeedSource + 'static,
    C: FeedContainer + 'static,
{
    if route != HOME_ROUTE {
        tracing::info!(route, "Not on the home route, auto-refresh disabled");
        return None;
    }

    tracing::info!(interval_ms = interval.as_millis() as u64, "Starting feed auto-refresh");

    Some(tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let refresher = refresher.clone();
            tokio::spawn(async move {
                // Already logged inside refresh()
                let _ = refresher.refresh().await;
            });
        }
    }))
}
