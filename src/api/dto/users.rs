//! DTOs for the user registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new user into a test group.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(email(message = "invalid email address"))]
    pub email: String,

    pub group_id: i64,
}

/// Response confirming a registration.
#[derive(Debug, Serialize)]
pub struct RegisterUserResponse {
    pub success: bool,
    pub user_id: i64,
    pub group_id: i64,
}
