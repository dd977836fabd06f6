//! Repository trait for group lookup.

use crate::domain::entities::Group;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `groups` table.
///
/// Groups are pre-populated externally; this service only reads them.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RestGroupRepository`] - REST store implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Retrieves all groups, in the store's return order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on any store failure.
    async fn list_all(&self) -> Result<Vec<Group>, AppError>;
}
