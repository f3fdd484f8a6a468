use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::services;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// POST /api/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let email = body.email.trim();
    let password = body.password.trim();

    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }

    if email != state.config.admin_email || password != state.config.admin_password {
        tracing::warn!(email, "rejected login attempt");
        return Err(AppError::Unauthorized);
    }

    let token = services::auth::issue_token(
        &state.config.session_secret,
        email,
        state.config.session_ttl_minutes,
    );
    Ok(Json(serde_json::json!({ "token": token })))
}
