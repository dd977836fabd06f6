//! API route configuration.

use crate::api::handlers::{
    all_stats_handler, deployment_info_handler, group_stats_handler, health_handler,
    log_click_handler, register_user_handler, root_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /`                        - Liveness message
/// - `GET  /health`                  - Health status with timestamp
/// - `GET  /deployment-info`         - Static deployment guidance
/// - `POST /log-click`               - Record a click event
/// - `POST /register-user`           - Register a user and assignment click
/// - `GET  /stats/group/{group_id}`  - Statistics for one group
/// - `GET  /stats/all`               - Statistics for every group
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/deployment-info", get(deployment_info_handler))
        .route("/log-click", post(log_click_handler))
        .route("/register-user", post(register_user_handler))
        .route("/stats/group/{group_id}", get(group_stats_handler))
        .route("/stats/all", get(all_stats_handler))
}
