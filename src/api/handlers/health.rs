//! Handlers for the root and health endpoints.

use axum::Json;
use chrono::Utc;

use crate::api::dto::health::{HealthResponse, MessageResponse};

/// Returns a static liveness message.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "A/B Test API is running".to_string(),
    })
}

/// Returns service health with the current UTC timestamp.
///
/// # Endpoint
///
/// `GET /health`
///
/// No store interaction is performed; the endpoint only reports that the
/// process is serving requests.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
    })
}
