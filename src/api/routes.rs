//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, delete_user_without_id_handler, get_user_handler,
    list_users_handler, method_not_allowed_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// User routes.
///
/// # Endpoints
///
/// - `POST   /user`               - Create a user
/// - `PUT    /user/update`        - Overwrite a user, id taken from the body
/// - `GET    /users`              - List all users
/// - `GET    /users/{id}`         - Fetch one user
/// - `DELETE /user/delete/{id}`   - Delete a user
///
/// The delete route captures the whole tail, so `/user/delete/` and
/// `/user/delete/1/2` reach the handler and fail id parsing with 400.
///
/// Any other verb on these paths answers 405 with an empty body.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user",
            post(create_user_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/user/update",
            put(update_user_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/users",
            get(list_users_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/users/{id}",
            get(get_user_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/user/delete/",
            delete(delete_user_without_id_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/user/delete/{*id}",
            delete(delete_user_handler).fallback(method_not_allowed_handler),
        )
}
