//! Domain layer: the user entity and the storage contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP or storage layers.

pub mod entities;
pub mod repositories;
