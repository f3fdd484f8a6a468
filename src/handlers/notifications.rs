use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::errors::AppError;
use crate::models::Notification;
use crate::state::AppState;

use super::check_auth;

// GET /api/notifications — most recent first.
pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Notification>>, AppError> {
    check_auth(&headers, &state.config)?;

    let mut notifications = state.notifications.lock().unwrap().clone();
    notifications.reverse();
    Ok(Json(notifications))
}
