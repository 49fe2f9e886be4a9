//! Persistence implementations of the domain repository traits.
//!
//! - [`SqliteUserRepository`] - SQLite-backed storage (production)
//! - [`MemoryUserRepository`] - In-process storage (tests, throwaway runs)
//! - [`database`] - Pool construction and table bootstrap

pub mod database;
pub mod memory_user_repository;
pub mod sqlite_user_repository;

pub use memory_user_repository::MemoryUserRepository;
pub use sqlite_user_repository::SqliteUserRepository;
