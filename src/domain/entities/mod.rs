//! Core domain entities.
//!
//! Entities are plain data structures. Creation input lives in a separate
//! struct ([`NewUser`]) and read-time derived data in [`UserProfile`].

pub mod user;

pub use user::{NewUser, User, UserProfile};
