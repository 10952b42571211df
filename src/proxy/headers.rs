//! Header filtering and injection for both directions of the relay.
//!
//! [`HOP_BY_HOP`] lists the connection-scoped names dropped in both
//! directions. Requests additionally drop [`REQUEST_ONLY`] (framing and
//! routing headers the outbound connection sets itself); responses
//! additionally drop [`RESPONSE_ONLY`]. All matching is case-insensitive.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::config::Credentials;

pub const HOP_BY_HOP: &[&str] = &[
    "connection",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailers",
    "transfer-encoding",
    "upgrade",
];

pub const REQUEST_ONLY: &[&str] = &["host", "content-length", "proxy-connection"];

pub const RESPONSE_ONLY: &[&str] = &["keep-alive"];

const DEFAULT_CONTENT_TYPE: &str = "application/json";

#[must_use]
pub fn is_excluded_request_header(name: &str) -> bool {
    HOP_BY_HOP
        .iter()
        .chain(REQUEST_ONLY)
        .any(|h| name.eq_ignore_ascii_case(h))
}

#[must_use]
pub fn is_excluded_response_header(name: &str) -> bool {
    HOP_BY_HOP
        .iter()
        .chain(RESPONSE_ONLY)
        .any(|h| name.eq_ignore_ascii_case(h))
}

/// Build the header set for the outbound request.
///
/// Inbound headers are copied minus the request exclusion set, keeping the
/// last value of repeated names. Credentials, when present, overwrite any
/// forwarded `Authorization`. A non-empty body without a surviving
/// `Content-Type` is labelled `application/json`.
#[must_use]
pub fn build_outbound_headers(
    original: &HeaderMap,
    credentials: Option<&Credentials>,
    has_body: bool,
) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(original.keys_len());
    for (name, value) in original {
        if !is_excluded_request_header(name.as_str()) {
            headers.insert(name.clone(), value.clone());
        }
    }

    if let Some(credentials) = credentials {
        headers.insert(AUTHORIZATION, credentials.authorization().clone());
    }

    if has_body && !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    }

    headers
}

/// Strip the response exclusion set from an upstream response in place.
/// Every value of the remaining headers is kept.
pub fn strip_response_headers(headers: &mut HeaderMap) {
    let excluded: Vec<HeaderName> = headers
        .keys()
        .filter(|name| is_excluded_response_header(name.as_str()))
        .cloned()
        .collect();
    for name in excluded {
        headers.remove(name);
    }
}
