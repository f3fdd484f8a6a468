use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::models::Notification;
use crate::repository::BookingRepository;
use crate::services::dashboard::DashboardState;
use crate::services::details::DetailsState;
use crate::services::notifier::NotificationSink;
use crate::services::schedule::ScheduleState;

pub struct AppState {
    pub config: AppConfig,
    pub repo: Arc<BookingRepository>,
    pub dashboard: DashboardState,
    pub details: DetailsState,
    pub schedule: Mutex<ScheduleState>,
    pub notifier: Box<dyn NotificationSink>,
    pub notifications: Mutex<Vec<Notification>>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        conn: Connection,
        notifier: Box<dyn NotificationSink>,
    ) -> anyhow::Result<Self> {
        let repo = Arc::new(BookingRepository::new(Arc::new(Mutex::new(conn))));
        let dashboard = DashboardState::new(&repo)?;
        let details = DetailsState::new(Arc::clone(&repo), config.owner_name.clone());
        let schedule = Mutex::new(ScheduleState::new(Arc::clone(&repo)));

        Ok(Self {
            config,
            repo,
            dashboard,
            details,
            schedule,
            notifier,
            notifications: Mutex::new(Vec::new()),
        })
    }
}
