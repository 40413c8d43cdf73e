//! Access logging middleware.
//!
//! Every request acquires a [`RequestSpan`] before the rest of the chain runs.
//! The span emits exactly one access log event when it is dropped, so the line
//! is written whether the inner service returned a success, an error response,
//! or never returned at all (the future was dropped).
//!
//! # Example Logs
//!
//! ```text
//! INFO access_log: Request method=POST path=/users status=201 request_id=6f1c... duration_ms=3.1
//! ```

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tracing::Instrument;

use crate::api::middleware::request_id::request_id_of;

/// Target of the access log events, usable in `RUST_LOG` filters.
pub const ACCESS_LOG_TARGET: &str = "access_log";

/// Snapshot of a request's outcome, as written to the access log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub request_id: String,
    pub duration: Duration,
    /// `false` when the request ended without producing a response.
    pub completed: bool,
}

/// Scoped guard over one request's lifetime.
pub struct RequestSpan {
    method: Method,
    path: String,
    request_id: String,
    started: Instant,
    status: Option<StatusCode>,
}

impl RequestSpan {
    /// Starts timing `req`.
    pub fn start(req: &Request) -> Self {
        Self {
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            request_id: request_id_of(req),
            started: Instant::now(),
            status: None,
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Records the final status of the response.
    pub fn finish(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    /// Current outcome. A span that was never finished reports `500`.
    pub fn record(&self) -> AccessRecord {
        AccessRecord {
            method: self.method.clone(),
            path: self.path.clone(),
            status: self.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            request_id: self.request_id.clone(),
            duration: self.started.elapsed(),
            completed: self.status.is_some(),
        }
    }
}

impl Drop for RequestSpan {
    fn drop(&mut self) {
        emit(&self.record());
    }
}

fn emit(record: &AccessRecord) {
    let duration_ms = record.duration.as_secs_f64() * 1000.0;

    if record.completed {
        tracing::info!(
            target: ACCESS_LOG_TARGET,
            method = %record.method,
            path = %record.path,
            status = record.status.as_u16(),
            request_id = %record.request_id,
            duration_ms,
            "Request"
        );
    } else {
        tracing::warn!(
            target: ACCESS_LOG_TARGET,
            method = %record.method,
            path = %record.path,
            status = record.status.as_u16(),
            request_id = %record.request_id,
            duration_ms,
            completed = false,
            "Request aborted"
        );
    }
}

/// Logs method, path, status, correlation id and duration of every request.
///
/// The inner chain runs inside a `request` tracing span carrying the
/// correlation id, so log lines emitted by handlers and services are tagged
/// with it too.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .merge(user_routes())
///     .layer(axum::middleware::from_fn(access_log::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let mut span = RequestSpan::start(&req);

    let request_span = tracing::info_span!(
        "request",
        request_id = %span.request_id(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    let response = next.run(req).instrument(request_span).await;

    span.finish(response.status());
    response
}
