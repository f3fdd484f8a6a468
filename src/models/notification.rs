use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One raised pending-bookings notification, kept in a bounded in-memory
/// buffer for the admin client to poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}
