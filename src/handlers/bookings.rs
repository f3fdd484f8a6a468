use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::sse::{Event, Sse};
use axum::Json;
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::errors::AppError;
use crate::models::Booking;
use crate::services;
use crate::state::AppState;

use super::check_auth;

// GET /api/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    check_auth(&headers, &state.config)?;
    Ok(Json(state.dashboard.bookings()))
}

// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    check_auth(&headers, &state.config)?;

    state
        .repo
        .fetch_booking(&id)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))
}

// POST /api/bookings — public; the client-facing booking form posts here.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Booking>,
) -> Result<Json<Booking>, AppError> {
    if let Some(field) = body.missing_required_field() {
        return Err(AppError::Validation(format!("{field} is required")));
    }

    let stored = state.repo.create_booking(body)?;
    tracing::info!(id = %stored.id, client = %stored.client_name, "new booking received");
    Ok(Json(stored))
}

// GET /api/bookings/events — SSE stream of full booking snapshots.
#[derive(Deserialize)]
pub struct SseQuery {
    pub token: Option<String>,
}

pub async fn events_stream(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SseQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>, AppError> {
    // Auth via query param (EventSource can't set headers).
    let token = query.token.as_deref().unwrap_or("");
    if !services::auth::verify_token(&state.config.session_secret, token) {
        return Err(AppError::Unauthorized);
    }

    let sub = state.repo.subscribe_bookings()?;

    let initial = tokio_stream::once(snapshot_event(&sub.current));

    let live = BroadcastStream::new(sub.updates).filter_map(|result| match result {
        Ok(snapshot) => Some(snapshot_event(&snapshot)),
        // A lagged receiver skipped intermediate snapshots; the next full
        // emission supersedes them anyway.
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(_)) => None,
    });

    let keepalive = tokio_stream::StreamExt::map(
        tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(Duration::from_secs(30))),
        |_| Ok(Event::default().comment("keepalive")),
    );

    let merged = StreamExt::merge(initial.chain(live), keepalive);
    Ok(Sse::new(merged))
}

fn snapshot_event(bookings: &[Booking]) -> Result<Event, Infallible> {
    let data = serde_json::to_string(bookings).unwrap_or_default();
    Ok(Event::default().data(data).event("bookings"))
}
