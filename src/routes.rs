//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/`        - Liveness probe, any method
//! - `/user*`   - User endpoints (see [`crate::api::routes::user_routes`])
//!
//! # Middleware
//!
//! - **CORS** - `Access-Control-Allow-Origin: *` on every response
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::root_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::any;
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(root_handler))
        .merge(api::routes::user_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(cors::layer()),
        )
}
