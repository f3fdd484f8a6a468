use std::sync::Arc;

use chrono::Local;

use crate::models::BlockedDay;
use crate::repository::BookingRepository;

pub fn today() -> String {
    Local::now().format("%d.%m.%Y").to_string()
}

/// The blocked-day editor: a selected date plus the blocked state for it.
/// Selecting a date replaces the state wholesale; each toggle persists the
/// entire document immediately (no field-level patches).
pub struct ScheduleState {
    repo: Arc<BookingRepository>,
    selected_date: String,
    blocked: BlockedDay,
}

impl ScheduleState {
    /// Starts empty; the first `select_date` call loads real state. Until
    /// then `blocked.date` is empty and both toggles are inert.
    pub fn new(repo: Arc<BookingRepository>) -> Self {
        Self {
            repo,
            selected_date: String::new(),
            blocked: BlockedDay::default(),
        }
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn blocked(&self) -> &BlockedDay {
        &self.blocked
    }

    /// Loads the blocked state for `date`, synthesizing the default record
    /// when no document exists. Any in-flight edits for the previously
    /// selected date are discarded, not merged.
    pub fn select_date(&mut self, date: &str) -> anyhow::Result<&BlockedDay> {
        self.selected_date = date.to_string();
        let existing = self.repo.fetch_blocked_day(date)?;
        self.blocked = existing.unwrap_or_else(|| BlockedDay::empty(date));
        Ok(&self.blocked)
    }

    /// Flips whole-day blocking and persists. No-op before the first load
    /// completes. On a failed persist the in-memory flip stays (the editor
    /// may drift from the store until the next load) and the error
    /// propagates for the caller to log.
    pub fn toggle_full_day(&mut self) -> anyhow::Result<()> {
        if self.blocked.date.is_empty() {
            return Ok(());
        }
        self.blocked.toggle_full_day();
        self.repo.set_blocked_day(&self.blocked)
    }

    /// Adds or removes one time slot and persists, under the same guard
    /// and failure policy as [`Self::toggle_full_day`].
    pub fn toggle_time_slot(&mut self, slot: &str) -> anyhow::Result<()> {
        if self.blocked.date.is_empty() {
            return Ok(());
        }
        self.blocked.toggle_time_slot(slot);
        self.repo.set_blocked_day(&self.blocked)
    }
}
