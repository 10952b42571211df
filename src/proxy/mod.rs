//! Core HTTP forwarding handler.
//!
//! [`forward_handler`] serves every non-`OPTIONS` request under `/api`:
//! it builds the target URL ([`target`]), filters and augments headers
//! ([`headers`]), issues the outbound call, and streams the upstream
//! response back with CORS headers ([`cors`]). [`preflight_handler`]
//! answers `OPTIONS` without contacting the upstream.
//!
//! Any failure before the upstream response head arrives becomes a `500`
//! with a fixed JSON body. Upstream 4xx/5xx responses are relayed as-is.

pub mod cors;
pub mod headers;
pub mod target;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http_body_util::Full;

use crate::error::ProxyError;
use crate::server::AppState;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub async fn forward_handler(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let correlation_id = request
        .headers()
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::info!(
        correlation_id = %correlation_id,
        method = %method,
        path = %path,
        "request received"
    );

    match forward(&state, request).await {
        Ok(response) => {
            state.stats.forwarded.fetch_add(1, Ordering::Relaxed);
            tracing::info!(
                correlation_id = %correlation_id,
                status = response.status().as_u16(),
                "upstream responded"
            );
            response
        }
        Err(e) => {
            state.stats.failed.fetch_add(1, Ordering::Relaxed);
            tracing::error!(
                correlation_id = %correlation_id,
                method = %method,
                path = %path,
                error = %e,
                "proxy error"
            );
            internal_error_response()
        }
    }
}

pub async fn preflight_handler(State(state): State<Arc<AppState>>) -> Response {
    state.stats.preflights.fetch_add(1, Ordering::Relaxed);
    cors::preflight_response()
}

async fn forward(state: &AppState, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();

    let target = target::target_url(&state.upstream.base_url, &parts.uri);
    let uri: hyper::Uri = target
        .parse()
        .map_err(|e: axum::http::uri::InvalidUri| ProxyError::UriParse {
            uri: target.clone(),
            source: Box::new(e),
        })?;

    let body = if carries_body(&parts.method) {
        axum::body::to_bytes(body, usize::MAX)
            .await
            .map_err(|e| ProxyError::BodyRead {
                source: Box::new(e),
            })?
    } else {
        Bytes::new()
    };

    let outbound_headers = headers::build_outbound_headers(
        &parts.headers,
        state.upstream.credentials.as_ref(),
        !body.is_empty(),
    );

    tracing::debug!(method = %parts.method, target = %uri, "forwarding upstream");

    let mut outbound = hyper::Request::builder()
        .method(parts.method)
        .uri(uri)
        .body(Full::new(body))
        .map_err(ProxyError::http)?;
    *outbound.headers_mut() = outbound_headers;

    let upstream = state
        .http_client
        .request(outbound)
        .await
        .map_err(ProxyError::http)?;

    // Keep status and extensions (including a non-canonical reason phrase);
    // the body streams through without being collected.
    let (mut parts, body) = upstream.into_parts();
    headers::strip_response_headers(&mut parts.headers);
    cors::apply_cors_headers(&mut parts.headers);

    Ok(Response::from_parts(parts, Body::new(body)))
}

/// GET, HEAD and OPTIONS never send a body upstream, so theirs is never read.
fn carries_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

#[must_use]
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}
