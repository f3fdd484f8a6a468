use std::sync::{Arc, Mutex};

use crate::models::{Booking, BookingStatus};
use crate::repository::BookingRepository;
use crate::services::email::{self, MailDraft};

/// Holds the single booking the admin is looking at. The record is handed
/// in from the dashboard selection (transfer-encoded across the navigation
/// boundary), never fetched independently.
pub struct DetailsState {
    repo: Arc<BookingRepository>,
    owner_name: String,
    booking: Mutex<Option<Booking>>,
}

impl DetailsState {
    pub fn new(repo: Arc<BookingRepository>, owner_name: String) -> Self {
        Self {
            repo,
            owner_name,
            booking: Mutex::new(None),
        }
    }

    pub fn set_booking(&self, booking: Booking) {
        *self.booking.lock().unwrap() = Some(booking);
    }

    pub fn booking(&self) -> Option<Booking> {
        self.booking.lock().unwrap().clone()
    }

    /// Sets the held booking to `confirmed`, persists it, and returns the
    /// stored record with the pre-filled confirmation email draft.
    pub fn confirm_booking(&self) -> anyhow::Result<(Booking, MailDraft)> {
        self.transition(BookingStatus::Confirmed)
    }

    pub fn cancel_booking(&self) -> anyhow::Result<(Booking, MailDraft)> {
        self.transition(BookingStatus::Cancelled)
    }

    // The original app reported success to the admin even when the write
    // failed, because the repository swallowed its own errors. Here the
    // persist result propagates, so a failed transition is visible.
    fn transition(&self, status: BookingStatus) -> anyhow::Result<(Booking, MailDraft)> {
        let mut slot = self.booking.lock().unwrap();
        let Some(booking) = slot.as_mut() else {
            anyhow::bail!("no booking selected");
        };

        booking.status = status;
        let stored = self.repo.upsert_booking(booking)?;
        *booking = stored.clone();

        let draft = match status {
            BookingStatus::Confirmed => email::confirmation_draft(&stored, &self.owner_name),
            _ => email::cancellation_draft(&stored, &self.owner_name),
        };
        Ok((stored, draft))
    }
}
