//! Handler for the click logging endpoint.

use axum::{Json, extract::State};

use crate::api::dto::clicks::{LogClickRequest, LogClickResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Logs a click event.
///
/// # Endpoint
///
/// `POST /log-click`
///
/// # Request Body
///
/// ```json
/// {
///   "user_id": 7,
///   "group_id": 2,
///   "user_agent": "Mozilla/5.0",  // optional
///   "ip_address": "192.168.1.1"   // optional
/// }
/// ```
///
/// # Response
///
/// `{"success": true, "click_id": <store-assigned id>}`
///
/// # Errors
///
/// Returns 500 with a `Database error:`-prefixed detail on store failure,
/// or a fixed detail when the store reports no rows written.
pub async fn log_click_handler(
    State(state): State<AppState>,
    Json(payload): Json<LogClickRequest>,
) -> Result<Json<LogClickResponse>, AppError> {
    let click = state
        .tracking_service
        .log_click(
            payload.user_id,
            payload.group_id,
            payload.user_agent,
            payload.ip_address,
        )
        .await?;

    Ok(Json(LogClickResponse {
        success: true,
        click_id: click.id,
    }))
}
