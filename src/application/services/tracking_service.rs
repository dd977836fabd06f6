//! Click logging and user registration service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{Click, NewClick, NewUser};
use crate::domain::repositories::{ClickRepository, UserRepository};
use crate::error::AppError;

/// Result of a successful registration.
///
/// The id of the assignment click is not reported to the caller.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user_id: i64,
    pub group_id: i64,
}

/// Service for recording click events and user registrations.
pub struct TrackingService {
    users: Arc<dyn UserRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl TrackingService {
    pub fn new(users: Arc<dyn UserRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { users, clicks }
    }

    /// Records a click event, stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on store failure and
    /// [`AppError::EmptyWrite`] when the store reports no rows written.
    pub async fn log_click(
        &self,
        user_id: i64,
        group_id: i64,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> Result<Click, AppError> {
        let new_click = NewClick {
            user_id,
            group_id,
            timestamp: Utc::now(),
            user_agent,
            ip_address,
        };

        self.clicks.insert_click(new_click).await
    }

    /// Registers a user and records their initial group-assignment click.
    ///
    /// Two sequential writes: the user insert first, then a click insert
    /// referencing the newly assigned user id. Each write stamps its own
    /// current UTC time. The writes are not transactional: if the click
    /// insert fails, the user row remains in the store and the error is
    /// still surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] or [`AppError::EmptyWrite`] from either
    /// write; a user-insert failure aborts before the click insert.
    pub async fn register_user(
        &self,
        name: String,
        email: String,
        group_id: i64,
    ) -> Result<Registration, AppError> {
        let new_user = NewUser {
            name,
            email,
            created_at: Utc::now(),
        };

        let user = self.users.insert_user(new_user).await?;

        let assignment = NewClick {
            user_id: user.id,
            group_id,
            timestamp: Utc::now(),
            user_agent: None,
            ip_address: None,
        };

        self.clicks.insert_click(assignment).await?;

        Ok(Registration {
            user_id: user.id,
            group_id,
        })
    }
}
