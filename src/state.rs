//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{StatsService, TrackingService};

/// Handler-layer dependencies, constructed once at startup.
///
/// The services are stateless beyond their store client; no state is
/// retained between requests.
#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    pub fn new(tracking_service: Arc<TrackingService>, stats_service: Arc<StatsService>) -> Self {
        Self {
            tracking_service,
            stats_service,
        }
    }
}
