use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Booking;
use crate::services::transfer;
use crate::state::AppState;

use super::check_auth;

// POST /api/details/open — hand the selected booking across the
// navigation boundary, transfer-encoded.
#[derive(Deserialize)]
pub struct OpenRequest {
    pub payload: String,
}

pub async fn open(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<OpenRequest>,
) -> Result<Json<Booking>, AppError> {
    check_auth(&headers, &state.config)?;

    let booking =
        transfer::decode_booking(&body.payload).map_err(|e| AppError::Validation(e.to_string()))?;
    state.details.set_booking(booking.clone());
    Ok(Json(booking))
}

// GET /api/details
pub async fn current(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Booking>, AppError> {
    check_auth(&headers, &state.config)?;

    state
        .details
        .booking()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no booking selected".to_string()))
}

// POST /api/details/confirm
pub async fn confirm(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config)?;

    let (booking, draft) = state.details.confirm_booking()?;
    tracing::info!(id = %booking.id, "booking confirmed");
    Ok(Json(serde_json::json!({ "booking": booking, "draft": draft })))
}

// POST /api/details/cancel
pub async fn cancel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config)?;

    let (booking, draft) = state.details.cancel_booking()?;
    tracing::info!(id = %booking.id, "booking cancelled");
    Ok(Json(serde_json::json!({ "booking": booking, "draft": draft })))
}
