pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod details;
pub mod email;
pub mod notifier;
pub mod schedule;
pub mod transfer;
