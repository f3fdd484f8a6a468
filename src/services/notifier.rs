use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::Notification;
use crate::state::AppState;

const NOTIFICATION_BUFFER: usize = 50;

/// Where raised notifications go. Production logs them and leaves delivery
/// to the polling admin client; tests swap in a capturing mock.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, title: &str, body: &str) -> anyhow::Result<()>;
}

pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn notify(&self, title: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!(title, body, "pending bookings notification");
        Ok(())
    }
}

pub fn pending_message(count: i64) -> (String, String) {
    (
        "Uus broneering!".to_string(),
        format!("Sul on {count} ootel broneeringut."),
    )
}

/// One pass of the background check: count pending bookings and raise a
/// single notification when any exist. Idempotent; raising nothing is the
/// common case.
pub async fn tick(state: &AppState) -> anyhow::Result<()> {
    let count = state.repo.pending_count()?;
    if count == 0 {
        return Ok(());
    }

    let (title, body) = pending_message(count);
    state.notifier.notify(&title, &body).await?;

    let mut notifications = state.notifications.lock().unwrap();
    notifications.push(Notification {
        title,
        body,
        created_at: Utc::now().naive_utc(),
    });
    let len = notifications.len();
    if len > NOTIFICATION_BUFFER {
        notifications.drain(..len - NOTIFICATION_BUFFER);
    }
    Ok(())
}

/// Recurring pending-bookings check. A failed tick is logged and retried
/// on the next interval, never treated as terminal.
pub async fn run(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(Duration::from_secs(state.config.notify_interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        if let Err(e) = tick(&state).await {
            tracing::warn!(error = %e, "pending bookings check failed, will retry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_message() {
        let (title, body) = pending_message(3);
        assert_eq!(title, "Uus broneering!");
        assert_eq!(body, "Sul on 3 ootel broneeringut.");
    }
}
