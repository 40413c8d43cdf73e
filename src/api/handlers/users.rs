//! Handlers for user endpoints.
//!
//! Handlers only coerce transport input (path id, query string, JSON body)
//! and map outcomes to status codes; rules live in
//! [`crate::application::services::UserService`].

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::dto::pagination::PaginationParams;
use crate::domain::entities::{User, UserProfile};
use crate::domain::validation::UserInput;
use crate::error::AppError;
use crate::state::AppState;

/// Lists users one page at a time.
///
/// # Endpoint
///
/// `GET /users?page=&limit=`
///
/// Invalid `page`/`limit` values fall back to 1 and 10. A query string that
/// cannot be decoded at all is treated as absent.
pub async fn list_users_handler(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<Vec<User>>, AppError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let users = state
        .user_service
        .list_users(params.page.as_deref(), params.limit.as_deref())
        .await?;

    Ok(Json(users))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// ```json
/// { "name": "Ada Lovelace", "dob": "1815-12-10" }
/// ```
///
/// # Errors
///
/// Returns 400 `BadRequest` if the body cannot be decoded.
/// Returns 400 `ValidationError` if a field constraint is violated.
/// Returns 500 `ServerError` if the user could not be stored.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(input) = payload.inspect_err(|e| {
        tracing::warn!(error = %e, "Invalid input to create user");
    })?;

    let user = state.user_service.create_user(input).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Fetches one user with their current age.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 400 `BadRequest` if the id is not an integer.
/// Returns 404 `NotFound` if no user has this id.
/// Returns 500 `ServerError` on storage failure or a missing date of birth.
pub async fn get_user_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<UserProfile>, AppError> {
    let Path(id) = id?;

    let profile = state.user_service.get_user(id).await?;

    Ok(Json(profile))
}

/// Replaces a user's name and date of birth.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Errors
///
/// Returns 400 `BadRequest` if the id or body cannot be decoded.
/// Returns 400 `ValidationError` if a field constraint is violated.
/// Returns 500 `ServerError` on storage failure, unknown ids included.
pub async fn update_user_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Path(id) = id?;
    let Json(input) = payload.inspect_err(|e| {
        tracing::warn!(user_id = id, error = %e, "Invalid input to update user");
    })?;

    let user = state.user_service.update_user(id, input).await?;

    Ok(Json(user))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 400 `BadRequest` if the id is not an integer.
/// Returns 500 `ServerError` on any storage failure, missing rows included.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    state.user_service.delete_user(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
