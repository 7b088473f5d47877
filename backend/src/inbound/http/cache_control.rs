//! Shared cache-control policies for HTTP handlers.

/// Responses that must never be stored by clients or proxies.
pub const NO_STORE: &str = "no-store";

/// Header tuple for [`NO_STORE`] responses.
pub const fn no_store_header() -> (&'static str, &'static str) {
    ("Cache-Control", NO_STORE)
}
