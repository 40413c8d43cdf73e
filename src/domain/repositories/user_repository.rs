//! Repository trait for user persistence.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Narrow query interface for user rows.
///
/// Every operation touches exactly one row (or one window of rows for
/// [`UserRepository::list`]) and none spans a transaction. Implementations do
/// not validate input; callers hand in a [`NewUser`] that already passed the
/// validation layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Returns up to `limit` users starting at `offset`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, AppError>;

    /// Replaces name and date of birth of an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i32, user: NewUser) -> Result<User, AppError>;

    /// Removes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row was deleted.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
