use crate::presence::{PresenceClient, Synchronizer};
use crate::status_source::StatusSource;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

/// Runs a synchronization cycle every `interval`, forever.
///
/// Each cycle is awaited before the next tick is taken, so cycles never
/// overlap. A cycle that outlasts the interval pushes the following ones back
/// instead of queueing a burst.
pub async fn run_update_task<S, P>(mut synchronizer: Synchronizer<S, P>, interval: Duration)
where
    S: StatusSource,
    P: PresenceClient,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        info!("Updating game server status");
        match synchronizer.sync().await {
            Ok(report) => debug!(
                activity = ?report.activity,
                username = ?report.username,
                avatar = ?report.avatar,
                current_activity = synchronizer.current_activity(),
                current_avatar = synchronizer.current_avatar_url(),
                "Game server status update complete"
            ),
            Err(e) => error!("Failed to update game server status: {}", e),
        }
    }
}
