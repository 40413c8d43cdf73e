//! HTTP layer translating requests into service calls.
//!
//! # Modules
//!
//! - [`dto`] - Transport-specific request/response shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request identification and access logging
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
