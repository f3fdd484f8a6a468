pub mod blocked_day;
pub mod booking;
pub mod notification;

pub use blocked_day::{BlockedDay, TIME_SLOTS};
pub use booking::{Booking, BookingStatus};
pub use notification::Notification;
