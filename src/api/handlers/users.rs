//! Handlers for the user endpoints.
//!
//! Bodies are taken as raw [`Bytes`] and decoded by [`UserPayload`], so a
//! missing or foreign `Content-Type` is not an error; only the JSON itself is
//! checked.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};

use crate::api::dto::user::{UserItem, UserPayload};
use crate::error::AppError;
use crate::state::AppState;

/// Parses a path segment as a user id.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| AppError::invalid_id(raw))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /user`
///
/// Any `ID` in the body is ignored; the store assigns it. The response carries
/// `Location: /users/{id}`.
///
/// # Errors
///
/// Returns 400 if the body is not well-formed JSON.
pub async fn create_user_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<UserItem>), AppError> {
    let payload = UserPayload::from_slice(&body)?;

    let user = state.user_service.create_user(payload.into_new_user()).await?;
    let location = format!("/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserItem::from(user)),
    ))
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
///
/// An empty store yields `[]`.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserItem>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserItem::from).collect()))
}

/// Fetches a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 400 if the id is not an integer.
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, AppError> {
    let id = parse_id(&raw_id)?;
    let user = state.user_service.get_user(id).await?;

    Ok(Json(UserItem::from(user)))
}

/// Replaces name, email and age of an existing user.
///
/// # Endpoint
///
/// `PUT /user/update`
///
/// The target is the `ID` field of the body.
///
/// # Errors
///
/// Returns 400 if the body is not well-formed JSON.
/// Returns 404 if no user carries that id.
pub async fn update_user_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UserItem>, AppError> {
    let payload = UserPayload::from_slice(&body)?;

    let user = state.user_service.update_user(payload.into_user()).await?;

    Ok(Json(UserItem::from(user)))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /user/delete/{id}`
///
/// The id is everything after `/user/delete/`, extra segments included.
///
/// # Errors
///
/// Returns 400 if the id is not an integer.
/// Returns 404 if no row was removed.
pub async fn delete_user_handler(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&raw_id)?;
    state.user_service.delete_user(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /user/delete/` with nothing after the slash.
pub async fn delete_user_without_id_handler() -> AppError {
    AppError::invalid_id("")
}

/// Fallback for a known path hit with the wrong verb.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
