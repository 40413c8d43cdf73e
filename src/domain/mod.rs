//! Domain layer containing business entities and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`validation`] - Constraint schema for user input
//! - [`pagination`] - Page/limit normalization
//! - [`age`] - Age derived from a date of birth
//!
//! The domain layer has no dependency on the HTTP or storage layers.
//! Orchestration lives in [`crate::application::services`].

pub mod age;
pub mod entities;
pub mod pagination;
pub mod repositories;
pub mod validation;
