//! Locale-aware request routing.
//!
//! Every page request must carry a locale prefix (`/en/about`). The
//! middleware inspects the first path segment: a supported locale passes
//! through unchanged, anything else is redirected to the default-locale
//! equivalent with the query string preserved. Reserved prefixes (API,
//! sitemap, health, metrics) and asset-like paths are excluded from
//! rewriting.
//!
//! A content path whose first segment happens to equal a locale tag is
//! indistinguishable from a locale-prefixed one; this is an accepted
//! ambiguity of prefix-based locale schemes.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::i18n::{Locale, LocaleRegistry};

/// Path prefixes never rewritten to a locale-prefixed form.
const RESERVED_PREFIXES: &[&str] = &["api", "sitemap.xml", "health", "metrics", "assets"];

/// Redirect locale-less page requests to `/{default}{path}`.
pub async fn locale_redirect(req: Request, next: Next) -> Response {
    let path = req.uri().path();

    if is_excluded(path) || has_locale_prefix(path) {
        return next.run(req).await;
    }

    let target = default_locale_target(path, req.uri().query());
    debug!("Rewriting locale-less path {} -> {}", path, target);
    Redirect::temporary(&target).into_response()
}

/// Check whether a path is outside the locale-prefixed page tree.
fn is_excluded(path: &str) -> bool {
    let first = first_segment(path);

    if RESERVED_PREFIXES.contains(&first) {
        return true;
    }

    // Asset convention: a final segment with an extension is never a page
    path.rsplit('/').next().is_some_and(|last| last.contains('.'))
}

/// Check whether the first path segment is a supported locale tag.
fn has_locale_prefix(path: &str) -> bool {
    LocaleRegistry::get().is_supported(first_segment(path))
}

fn first_segment(path: &str) -> &str {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default()
}

/// Build the canonical default-locale target for a locale-less path.
///
/// Malformed paths (no leading slash) are treated as locale-less and land on
/// the default-locale root.
fn default_locale_target(path: &str, query: Option<&str>) -> String {
    let default = Locale::default_locale();

    let suffix = if path.starts_with('/') { path } else { "/" };
    let suffix = if suffix == "/" { "" } else { suffix };

    match query {
        Some(q) if !q.is_empty() => format!("/{}{}?{}", default.tag(), suffix, q),
        _ => format!("/{}{}", default.tag(), suffix),
    }
}
