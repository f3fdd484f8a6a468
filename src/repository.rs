use std::sync::{Arc, Mutex};

use anyhow::Context;
use rusqlite::Connection;
use tokio::sync::broadcast;

use crate::db::queries;
use crate::models::{BlockedDay, Booking, BookingStatus};

/// A live view over the bookings collection. `current` is the snapshot at
/// subscription time; `updates` re-emits the full ordered list (never a
/// diff) after every write. Dropping the receiver releases the
/// subscription; there is no auto-retry, a consumer that falls behind or
/// sees the channel close must call [`BookingRepository::subscribe_bookings`]
/// again.
pub struct BookingsSubscription {
    pub current: Vec<Booking>,
    pub updates: broadcast::Receiver<Vec<Booking>>,
}

/// Facade over the two document collections. Takes an explicit connection
/// handle rather than reaching for any process-wide client.
pub struct BookingRepository {
    db: Arc<Mutex<Connection>>,
    bookings_tx: broadcast::Sender<Vec<Booking>>,
}

impl BookingRepository {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        let (bookings_tx, _) = broadcast::channel(32);
        Self { db, bookings_tx }
    }

    pub fn subscribe_bookings(&self) -> anyhow::Result<BookingsSubscription> {
        // Subscribe before reading so no write can fall between the two.
        let updates = self.bookings_tx.subscribe();
        let current = {
            let db = self.db.lock().unwrap();
            queries::list_bookings(&db).context("failed to load bookings snapshot")?
        };
        Ok(BookingsSubscription { current, updates })
    }

    /// Overwrites the document at `booking.id` with the full given record.
    /// Errors propagate as typed results; call sites decide whether to
    /// log-and-continue.
    pub fn upsert_booking(&self, booking: &Booking) -> anyhow::Result<Booking> {
        anyhow::ensure!(!booking.id.is_empty(), "booking id must not be empty");

        let stored = {
            let db = self.db.lock().unwrap();
            queries::put_booking(&db, booking)?
        };
        self.publish_snapshot();
        Ok(stored)
    }

    /// Entry point for new submissions: assigns the store-generated key,
    /// forces the initial `pending` status and lets the store stamp
    /// `created_at`.
    pub fn create_booking(&self, mut booking: Booking) -> anyhow::Result<Booking> {
        booking.id = uuid::Uuid::new_v4().to_string();
        booking.status = BookingStatus::Pending;
        booking.created_at = None;
        self.upsert_booking(&booking)
    }

    pub fn fetch_booking(&self, id: &str) -> anyhow::Result<Option<Booking>> {
        let db = self.db.lock().unwrap();
        queries::get_booking(&db, id)
    }

    /// Point read. `Ok(None)` means the document genuinely does not exist;
    /// read failures surface as errors instead of masquerading as absence.
    pub fn fetch_blocked_day(&self, date: &str) -> anyhow::Result<Option<BlockedDay>> {
        let db = self.db.lock().unwrap();
        queries::get_blocked_day(&db, date)
    }

    /// Full overwrite of the document keyed by `blocked_day.date`.
    pub fn set_blocked_day(&self, blocked_day: &BlockedDay) -> anyhow::Result<()> {
        let db = self.db.lock().unwrap();
        queries::put_blocked_day(&db, blocked_day)
    }

    pub fn pending_count(&self) -> anyhow::Result<i64> {
        let db = self.db.lock().unwrap();
        queries::count_pending_bookings(&db)
    }

    /// Re-emits the full current list to every subscriber. A failed reload
    /// only skips the emission; the write that triggered it has already
    /// committed.
    fn publish_snapshot(&self) {
        if self.bookings_tx.receiver_count() == 0 {
            return;
        }
        let snapshot = {
            let db = self.db.lock().unwrap();
            match queries::list_bookings(&db) {
                Ok(list) => list,
                Err(e) => {
                    tracing::error!(error = %e, "failed to reload bookings for subscribers");
                    return;
                }
            }
        };
        let _ = self.bookings_tx.send(snapshot);
    }
}
