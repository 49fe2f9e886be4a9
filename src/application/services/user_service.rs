//! User management service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service wrapping a [`UserRepository`].
///
/// Turns storage outcomes (`None`, `false`) into [`AppError::NotFound`] so
/// handlers only deal with the error taxonomy. Works over any repository,
/// including `dyn UserRepository` chosen at startup.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Inserts a user and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.insert(new_user).await?;
        tracing::info!(id = user.id, "user created");
        Ok(user)
    }

    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(id))
    }

    /// Overwrites the stored fields of `user.id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row carries that id.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn update_user(&self, user: User) -> Result<User, AppError> {
        let id = user.id;
        let updated = self
            .repository
            .update_by_id(user)
            .await?
            .ok_or_else(|| AppError::not_found(id))?;

        tracing::info!(id, "user updated");
        Ok(updated)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row was removed.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::not_found(id));
        }

        tracing::info!(id, "user deleted");
        Ok(())
    }
}
