pub mod auth;
pub mod bookings;
pub mod calendar;
pub mod details;
pub mod health;
pub mod notifications;
pub mod schedule;

use axum::http::HeaderMap;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services;

pub fn check_auth(headers: &HeaderMap, config: &AppConfig) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if !services::auth::verify_token(&config.session_secret, token) {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
