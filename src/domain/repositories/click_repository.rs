//! Repository trait for click event storage.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `clicks` table.
///
/// Clicks are append-only; this service issues no updates or deletes.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RestClickRepository`] - REST store implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Inserts one click record and returns it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on any store failure and
    /// [`AppError::EmptyWrite`] when the store reports zero rows written.
    async fn insert_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Retrieves all click records for a given group, in the store's
    /// return order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on any store failure.
    async fn list_by_group(&self, group_id: i64) -> Result<Vec<Click>, AppError>;
}
