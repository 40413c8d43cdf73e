//! Correlation id assignment and propagation.
//!
//! The `X-Request-ID` header is read from the inbound request; when absent a
//! UUID v4 is generated. The value is stored in the request extensions as a
//! [`RequestId`] for downstream middleware and handlers, and copied onto the
//! response header.

use axum::extract::Request;
use axum::http::HeaderName;
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

/// Header carrying the correlation id in both directions.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Removes an `X-Request-ID` header that is empty or only whitespace, so that
/// [`set_layer`] generates a fresh id for it. Must be the outermost layer.
///
/// ```rust,ignore
/// router.layer(axum::middleware::map_request(request_id::drop_blank))
/// ```
pub async fn drop_blank(mut req: Request) -> Request {
    let blank = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .is_some_and(|v| v.as_bytes().iter().all(u8::is_ascii_whitespace));

    if blank {
        req.headers_mut().remove(REQUEST_ID_HEADER);
    }
    req
}

/// Assigns the correlation id, right inside [`drop_blank`].
///
/// A non-blank caller-supplied value is kept verbatim.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid)
}

/// Copies the correlation id onto every response, error responses included.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(REQUEST_ID_HEADER)
}

/// Returns the correlation id attached to `req`, or `"-"` if none is.
pub fn request_id_of(req: &Request) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|id| id.header_value())
        .or_else(|| req.headers().get(REQUEST_ID_HEADER))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::HeaderValue;

    #[test]
    fn test_request_id_from_extension() {
        let mut req = Request::new(Body::empty());
        req.extensions_mut()
            .insert(RequestId::new(HeaderValue::from_static("abc-123")));

        assert_eq!(request_id_of(&req), "abc-123");
    }

    #[test]
    fn test_request_id_from_header_without_extension() {
        let req = Request::builder()
            .header("x-request-id", "from-header")
            .body(Body::empty())
            .unwrap();

        assert_eq!(request_id_of(&req), "from-header");
    }

    #[tokio::test]
    async fn test_drop_blank_removes_empty_header() {
        for value in ["", "   "] {
            let req = Request::builder()
                .header("x-request-id", value)
                .body(Body::empty())
                .unwrap();

            let req = drop_blank(req).await;
            assert!(req.headers().get(REQUEST_ID_HEADER).is_none());
        }
    }

    #[tokio::test]
    async fn test_drop_blank_keeps_caller_value() {
        let req = Request::builder()
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();

        let req = drop_blank(req).await;
        assert_eq!(req.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[test]
    fn test_request_id_missing() {
        let req = Request::new(Body::empty());
        assert_eq!(request_id_of(&req), "-");
    }
}
