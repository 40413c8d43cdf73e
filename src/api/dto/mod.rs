//! Data Transfer Objects for API requests and responses.
//!
//! User payloads are the domain types themselves
//! ([`crate::domain::validation::UserInput`] in,
//! [`crate::domain::entities::User`] / [`crate::domain::entities::UserProfile`]
//! out); only transport-specific shapes live here.

pub mod health;
pub mod pagination;
