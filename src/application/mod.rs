//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers an API that
//! speaks in terms of the error taxonomy.
//!
//! - [`services::user_service::UserService`] - User CRUD orchestration

pub mod services;
