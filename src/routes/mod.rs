//! HTTP route handlers.
//!
//! Two routes are registered: `/healthz` for liveness probes and `/hello` for
//! the greeting. Anything else falls through to axum's default 404.
//!
//! Every request gets a request ID span via middleware, and panics inside
//! handlers are turned into 500 responses instead of dropping the connection.

pub mod health;
pub mod hello;

use axum::{middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and middleware.
pub fn create_router() -> Router {
    let routes = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/hello", get(hello::hello));

    with_layers(routes)
}

fn with_layers(router: Router) -> Router {
    router
        // Panic recovery - innermost so the request span still records the 500
        .layer(CatchPanicLayer::new())
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
