use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use fotobook::config::AppConfig;
use fotobook::db;
use fotobook::handlers;
use fotobook::services::notifier::{self, LogSink};
use fotobook::services::schedule;
use fotobook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    if config.admin_password == "changeme" || config.session_secret == "changeme" {
        tracing::warn!("ADMIN_PASSWORD/SESSION_SECRET left at defaults");
    }

    let conn = db::init_db(&config.database_url)?;
    let state = Arc::new(AppState::new(config.clone(), conn, Box::new(LogSink))?);

    // The schedule editor opens on today's date.
    {
        let mut sched = state.schedule.lock().unwrap();
        if let Err(e) = sched.select_date(&schedule::today()) {
            tracing::warn!(error = %e, "failed to load blocked day for today");
        }
    }

    tokio::spawn(notifier::run(Arc::clone(&state)));

    let app = app_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/login", post(handlers::auth::login))
        .route(
            "/api/bookings",
            get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
        )
        .route("/api/bookings/events", get(handlers::bookings::events_stream))
        .route("/api/bookings/:id", get(handlers::bookings::get_booking))
        .route("/api/details/open", post(handlers::details::open))
        .route("/api/details", get(handlers::details::current))
        .route("/api/details/confirm", post(handlers::details::confirm))
        .route("/api/details/cancel", post(handlers::details::cancel))
        .route("/api/schedule", get(handlers::schedule::current))
        .route("/api/schedule/select", post(handlers::schedule::select_date))
        .route("/api/schedule/full-day", post(handlers::schedule::toggle_full_day))
        .route(
            "/api/schedule/slots",
            get(handlers::schedule::slots).post(handlers::schedule::toggle_slot),
        )
        .route("/api/notifications", get(handlers::notifications::list))
        .route("/calendar/:booking_id", get(handlers::calendar::download_ics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
