//! Core domain entities.
//!
//! - [`User`] - A persisted user record
//! - [`NewUser`] - Input for creating a user (no id yet)

pub mod user;

pub use user::{NewUser, User};
