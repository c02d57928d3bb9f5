//! hello-probe: a minimal HTTP service with a liveness probe and a greeting.
//!
//! The binary reads its configuration from the environment, installs tracing,
//! and serves `GET /healthz` and `GET /hello` on `0.0.0.0:$PORT`.

pub mod config;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use config::AppConfig;
pub use routes::create_router;
