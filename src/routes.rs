//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Greeting
//! - `GET  /health`      - Health check (database)
//! - `/users`, `/users/{id}` - User resource, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! Outermost first:
//!
//! 1. **Request id** - drops a blank `X-Request-ID`, assigns one when absent
//!    and copies it onto the response
//! 2. **Access log** - one structured line per request with status and duration
//! 3. **Panic guard** - turns handler panics into `500 ServerError`
//!
//! Trailing-slash normalization is applied around the router by
//! [`crate::server::run`].

use crate::api;
use crate::api::handlers::{health_handler, root_handler};
use crate::api::middleware::{access_log, panic, request_id};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Layers added later wrap the ones added earlier, so the request id layers
/// are added last, blank-header removal outermost.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::user_routes())
        .with_state(state)
        .layer(panic::layer())
        .layer(middleware::from_fn(access_log::layer))
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
        .layer(middleware::map_request(request_id::drop_blank))
}
