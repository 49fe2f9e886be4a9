//! Repository trait for user persistence.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability for users.
///
/// Implementations translate each call into exactly one statement against the
/// backing store. None of them checks existence ahead of a write: outcomes of
/// `update_by_id` and `delete_by_id` come from the affected-row count of the
/// write itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user and returns it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the statement fails.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Returns every stored user in store-native order.
    ///
    /// An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on query failure.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Looks a user up by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on query failure.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Overwrites name, email and age of the row matching `user.id`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user))` if exactly one row was updated
    /// - `Ok(None)` if no row matched
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the statement fails.
    async fn update_by_id(&self, user: User) -> Result<Option<User>, AppError>;

    /// Deletes the row matching `id`.
    ///
    /// Returns `true` iff exactly one row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the statement fails.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}
