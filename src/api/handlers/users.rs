//! Handler for the user registration endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::users::{RegisterUserRequest, RegisterUserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user and records their group-assignment click.
///
/// # Endpoint
///
/// `POST /register-user`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "A",
///   "email": "a@x.com",
///   "group_id": 5
/// }
/// ```
///
/// # Response
///
/// `{"success": true, "user_id": <store-assigned id>, "group_id": 5}`
///
/// # Errors
///
/// Returns 400 if validation fails, before any store call: `name` must be
/// non-empty and `email` must be a well-formed address. This is stricter
/// than earlier revisions of this API, which inserted both fields as-is;
/// clients migrating from those revisions must send valid values.
/// Returns 500 on store failure from either write; a failed click insert
/// does not roll back the user insert.
pub async fn register_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<Json<RegisterUserResponse>, AppError> {
    payload.validate()?;

    let registration = state
        .tracking_service
        .register_user(payload.name, payload.email, payload.group_id)
        .await?;

    Ok(Json(RegisterUserResponse {
        success: true,
        user_id: registration.user_id,
        group_id: registration.group_id,
    }))
}
