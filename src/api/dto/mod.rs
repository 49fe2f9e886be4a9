//! Data Transfer Objects for API requests and responses.

pub mod user;
