//! User management service.

use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::domain::age::age_on;
use crate::domain::entities::{User, UserProfile};
use crate::domain::pagination::PaginationWindow;
use crate::domain::repositories::UserRepository;
use crate::domain::validation::UserInput;
use crate::error::AppError;

/// Orchestrates user operations against a [`UserRepository`].
///
/// Input is validated here before it reaches the repository; the repository
/// itself never re-validates.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field constraint is violated.
    /// Returns [`AppError::Internal`] if the user could not be stored.
    pub async fn create_user(&self, input: UserInput) -> Result<User, AppError> {
        let new_user = input.into_new_user()?;

        let user = self.repository.create(new_user).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create user");
            AppError::internal(format!("Failed to create user: {e}"))
        })?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Fetches a user and derives their age as of today's local date.
    ///
    /// # Errors
    ///
    /// See [`Self::get_user_as_of`].
    pub async fn get_user(&self, id: i32) -> Result<UserProfile, AppError> {
        self.get_user_as_of(id, Local::now().date_naive()).await
    }

    /// Fetches a user and derives their age as of `today`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors, or if the stored
    /// date of birth is missing.
    pub async fn get_user_as_of(&self, id: i32, today: NaiveDate) -> Result<UserProfile, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = id, "User not found");
                AppError::not_found("User not found")
            })?;

        let Some(dob) = user.dob else {
            tracing::error!(user_id = id, "User has null DOB");
            return Err(AppError::internal("User has null DOB"));
        };

        tracing::info!(user_id = id, "User fetched");
        Ok(UserProfile {
            id: user.id,
            name: user.name,
            dob,
            age: age_on(dob, today),
        })
    }

    /// Lists one page of users.
    ///
    /// `page` and `limit` are raw query-string values, normalized by
    /// [`PaginationWindow::normalize`]. No total count is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(
        &self,
        page: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Vec<User>, AppError> {
        let window = PaginationWindow::normalize(page, limit);

        self.repository
            .list(window.limit, window.offset)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to list users with pagination"))
    }

    /// Validates the input and replaces name and date of birth in full.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field constraint is violated.
    /// Returns [`AppError::Internal`] for any repository failure, including an
    /// unknown id.
    pub async fn update_user(&self, id: i32, input: UserInput) -> Result<User, AppError> {
        let new_user = input.into_new_user()?;

        let user = self.repository.update(id, new_user).await.map_err(|e| {
            tracing::error!(user_id = id, error = %e, "Failed to update user");
            AppError::internal(format!("Failed to update user: {e}"))
        })?;

        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    /// Deletes a user.
    ///
    /// Deleting an id that does not exist is a failure, so repeated deletes
    /// of the same id are not idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] for any repository failure, including a
    /// missing row.
    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await.map_err(|e| {
            tracing::error!(user_id = id, error = %e, "Failed to delete user");
            AppError::internal(format!("Failed to delete user: {e}"))
        })?;

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Checks that the backing store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
