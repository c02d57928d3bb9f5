//! Greeting endpoint.
//!
//! Serves a fixed plain-text body. The handler takes no input and has no side
//! effects, so every request gets the same response.

/// Fixed response body for `GET /hello`
pub const GREETING: &str = "Hello";

/// Greeting handler.
///
/// Returns `Hello` as `text/plain; charset=utf-8`.
pub async fn hello() -> &'static str {
    GREETING
}
