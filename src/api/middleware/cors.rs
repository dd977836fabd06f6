//! Cross-origin policy for the browser client.
//!
//! Requests from a fixed allow-list of origins are permitted with
//! credentials. Because credentials are allowed, wildcard header and
//! origin values are not usable; request headers are mirrored back and
//! origins are checked against the configured list.

use axum::http::{HeaderValue, Method, request::Parts};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Builds the CORS layer from the configured origin allow-list.
///
/// List entries may contain a single `*` to match by prefix and suffix,
/// e.g. `https://*.vercel.app` for preview deployments.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let allowed = allowed_origins.to_vec();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _: &Parts| {
                origin
                    .to_str()
                    .map(|o| origin_allowed(&allowed, o))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Checks an origin against the allow-list.
///
/// Entries without a `*` must match exactly. Entries with a `*` match when
/// the origin carries the entry's prefix and suffix with at least one
/// character in between.
fn origin_allowed(allowed: &[String], origin: &str) -> bool {
    allowed.iter().any(|entry| {
        if let Some((prefix, suffix)) = entry.split_once('*') {
            origin.len() > prefix.len() + suffix.len()
                && origin.starts_with(prefix)
                && origin.ends_with(suffix)
        } else {
            entry == origin
        }
    })
}
