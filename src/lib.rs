//! # userfy
//!
//! A small HTTP service exposing create, read, update and delete operations
//! over a single "user" resource, persisted in SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The user entity and the repository trait
//! - **Application Layer** ([`application`]) - Maps storage outcomes onto [`AppError`]
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory repositories
//! - **API Layer** ([`api`]) - Handlers, DTOs, routes and middleware
//!
//! ## Endpoints
//!
//! | Path                 | Method | Success                                 |
//! |----------------------|--------|-----------------------------------------|
//! | `/`                  | any    | 200, empty                              |
//! | `/user`              | POST   | 201, user JSON, `Location: /users/{id}` |
//! | `/user/update`       | PUT    | 200, user JSON                          |
//! | `/users`             | GET    | 200, JSON array                         |
//! | `/users/{id}`        | GET    | 200, user JSON                          |
//! | `/user/delete/{id}`  | DELETE | 204, empty                              |
//!
//! Errors are reported by status code only, with an empty body.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://database/users.db"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{NewUser, User};
    pub use crate::domain::repositories::UserRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
