//! DTOs for the root and health endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Informational message returned by the root endpoint.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response. The endpoint performs no store interaction.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}
