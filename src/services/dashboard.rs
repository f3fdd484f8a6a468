use std::sync::{Arc, Mutex};

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

use crate::models::Booking;
use crate::repository::BookingRepository;

/// Holds the current ordered list of bookings for the dashboard. Opens the
/// live subscription at construction and keeps it for its whole lifetime;
/// every snapshot the repository emits replaces the held list. All
/// bookings, newest first, stay materialized in memory — no pagination,
/// no filtering.
pub struct DashboardState {
    current: Mutex<Vec<Booking>>,
    updates: Mutex<Receiver<Vec<Booking>>>,
}

impl DashboardState {
    pub fn new(repo: &Arc<BookingRepository>) -> anyhow::Result<Self> {
        let sub = repo.subscribe_bookings()?;
        Ok(Self {
            current: Mutex::new(sub.current),
            updates: Mutex::new(sub.updates),
        })
    }

    /// The latest snapshot. Pending emissions are applied first, so a read
    /// immediately after a write observes it. When the subscription lags,
    /// intermediate snapshots are skipped (each emission is a full list, so
    /// only the newest matters); when it closes, the last list is kept.
    pub fn bookings(&self) -> Vec<Booking> {
        let mut updates = self.updates.lock().unwrap();
        let mut current = self.current.lock().unwrap();
        loop {
            match updates.try_recv() {
                Ok(snapshot) => *current = snapshot,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "bookings subscription lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        current.clone()
    }
}
