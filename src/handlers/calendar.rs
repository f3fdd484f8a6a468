use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;
use crate::services::calendar;
use crate::state::AppState;

// GET /calendar/:booking_id — serves the booking as a downloadable .ics
// so the admin can drop it into any calendar app.
pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<Response, AppError> {
    let id = booking_id.strip_suffix(".ics").unwrap_or(&booking_id);

    let booking = state
        .repo
        .fetch_booking(id)?
        .ok_or_else(|| AppError::NotFound(format!("booking {id}")))?;

    let ics = calendar::generate_ics(&booking)
        .map_err(|e| AppError::Validation(format!("booking has no usable date/time: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"booking.ics\"",
            ),
        ],
        ics,
    )
        .into_response())
}
