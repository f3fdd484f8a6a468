use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A client's photography session request. The store is the single source
/// of truth; in-memory copies are disposable projections. All writes are
/// full-document overwrites keyed by `id` (last writer wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Booking {
    pub id: String,
    pub client_name: String,
    /// `dd.mm.yyyy`, as entered on the booking form.
    pub date: String,
    /// `HH:MM-HH:MM` slot string.
    pub time: String,
    pub property_type: String,
    pub details: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub comments: String,
    pub status: BookingStatus,
    /// Assigned by the store on first insert; used for display ordering only.
    pub created_at: Option<NaiveDateTime>,
}

impl Booking {
    /// Presence check for the fields a submission cannot do without.
    /// No format validation beyond this, by the store's contract.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.client_name.trim().is_empty() {
            return Some("client_name");
        }
        if self.date.trim().is_empty() {
            return Some("date");
        }
        if self.time.trim().is_empty() {
            return Some("time");
        }
        if self.email.trim().is_empty() && self.phone.trim().is_empty() {
            return Some("email");
        }
        None
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "confirmed" => BookingStatus::Confirmed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "confirmed", "cancelled"] {
            assert_eq!(BookingStatus::parse(s).as_str(), s);
        }
        assert_eq!(BookingStatus::parse("garbage"), BookingStatus::Pending);
    }

    #[test]
    fn test_missing_required_field() {
        let mut booking = Booking {
            client_name: "Mari Maasikas".to_string(),
            date: "01.06.2026".to_string(),
            time: "10:00-11:00".to_string(),
            phone: "+3725551234".to_string(),
            ..Default::default()
        };
        assert_eq!(booking.missing_required_field(), None);

        booking.client_name = "  ".to_string();
        assert_eq!(booking.missing_required_field(), Some("client_name"));
    }
}
