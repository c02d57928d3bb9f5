//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! Used by Kubernetes and load balancers to decide whether to keep the process.

use http::StatusCode;

/// Health check handler.
///
/// Returns 200 with an empty body. This only proves the process can respond to
/// HTTP; it checks nothing else.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
