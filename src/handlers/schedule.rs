use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{BlockedDay, TIME_SLOTS};
use crate::state::AppState;

use super::check_auth;

// GET /api/schedule
pub async fn current(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config)?;

    let schedule = state.schedule.lock().unwrap();
    Ok(Json(serde_json::json!({
        "selected_date": schedule.selected_date(),
        "blocked": schedule.blocked(),
    })))
}

// GET /api/schedule/slots
pub async fn slots(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<&'static str>>, AppError> {
    check_auth(&headers, &state.config)?;
    Ok(Json(TIME_SLOTS.to_vec()))
}

// POST /api/schedule/select
#[derive(Deserialize)]
pub struct SelectRequest {
    pub date: String,
}

pub async fn select_date(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<SelectRequest>,
) -> Result<Json<BlockedDay>, AppError> {
    check_auth(&headers, &state.config)?;

    let date = body.date.trim();
    if date.is_empty() {
        return Err(AppError::Validation("date is required".to_string()));
    }

    let mut schedule = state.schedule.lock().unwrap();
    let blocked = schedule.select_date(date)?;
    Ok(Json(blocked.clone()))
}

// POST /api/schedule/full-day
pub async fn toggle_full_day(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<BlockedDay>, AppError> {
    check_auth(&headers, &state.config)?;

    let mut schedule = state.schedule.lock().unwrap();
    schedule.toggle_full_day()?;
    Ok(Json(schedule.blocked().clone()))
}

// POST /api/schedule/slots
#[derive(Deserialize)]
pub struct ToggleSlotRequest {
    pub slot: String,
}

pub async fn toggle_slot(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ToggleSlotRequest>,
) -> Result<Json<BlockedDay>, AppError> {
    check_auth(&headers, &state.config)?;

    let mut schedule = state.schedule.lock().unwrap();
    schedule.toggle_time_slot(&body.slot)?;
    Ok(Json(schedule.blocked().clone()))
}
