//! DTOs for the click logging endpoint.

use serde::{Deserialize, Serialize};

/// Request to log a click event.
///
/// `user_id` and `group_id` are required; client metadata is optional.
/// Referential integrity of the ids is not checked by this layer.
#[derive(Debug, Deserialize)]
pub struct LogClickRequest {
    pub user_id: i64,
    pub group_id: i64,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Response confirming a logged click with its store-assigned id.
#[derive(Debug, Serialize)]
pub struct LogClickResponse {
    pub success: bool,
    pub click_id: i64,
}
