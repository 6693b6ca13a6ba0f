//! Client-facing host resolution shared by the edge and the origin.
//!
//! Behind CloudFront the `host` header names the origin, so the host the
//! client addressed has to be recovered from `x-original-host` (set by the
//! rewriter) or, failing that, from `x-forwarded-host`.

use super::event::Request;
use super::rewriter::{HOST, ORIGINAL_HOST};

const CF_CONNECTING_IP: &str = "cf-connecting-ip";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Resolve the host the client addressed.
///
/// Priority: a non-empty `x-original-host`, then `x-forwarded-host` when the
/// request carries a non-empty `cf-connecting-ip`, then `host`. Missing
/// headers resolve to `""`.
#[must_use]
pub fn resolve_client_host(request: &Request) -> &str {
    if let Some(original) = request.first_value(ORIGINAL_HOST).filter(|v| !v.is_empty()) {
        return original;
    }

    let forwarded = request
        .first_value(CF_CONNECTING_IP)
        .is_some_and(|ip| !ip.is_empty())
        .then(|| request.first_value(X_FORWARDED_HOST))
        .flatten()
        .filter(|v| !v.is_empty());

    forwarded
        .or_else(|| request.first_value(HOST))
        .unwrap_or_default()
}

/// Drop a `:port` suffix.
#[must_use]
pub fn strip_port(host: &str) -> &str {
    host.split(':').next().unwrap_or(host)
}
