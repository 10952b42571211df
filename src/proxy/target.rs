//! Target URL construction.
//!
//! The forwarded path is everything after the first `/api/` in the inbound
//! path. The inbound query string is appended verbatim; nothing is
//! re-encoded.

use axum::http::Uri;

/// Mount point of the forwarding handler.
pub const ROUTE_PREFIX: &str = "/api";

const ROUTING_MARKER: &str = "/api/";

/// Suffix of `path` following the first routing marker, or `""` when the
/// marker is absent.
#[must_use]
pub fn forwarded_path(path: &str) -> &str {
    path.split_once(ROUTING_MARKER).map_or("", |(_, rest)| rest)
}

/// `<base>/<forwarded path><?query>` for an inbound request URI.
#[must_use]
pub fn target_url(base: &str, uri: &Uri) -> String {
    let suffix = forwarded_path(uri.path());
    match uri.query() {
        Some(query) if !query.is_empty() => format!("{base}/{suffix}?{query}"),
        _ => format!("{base}/{suffix}"),
    }
}
