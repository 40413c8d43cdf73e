//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries
//! are checked at runtime so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage and retrieval

pub mod pg_user_repository;

pub use pg_user_repository::PgUserRepository;
