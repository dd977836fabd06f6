//! Repository trait for user storage.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `users` table.
///
/// Users are created once on registration and never mutated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RestUserRepository`] - REST store implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts one user record and returns it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on any store failure and
    /// [`AppError::EmptyWrite`] when the store reports zero rows written.
    async fn insert_user(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Retrieves the full user table, unfiltered.
    ///
    /// Statistics use the length of this result as the global user count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on any store failure.
    async fn list_all(&self) -> Result<Vec<User>, AppError>;
}
