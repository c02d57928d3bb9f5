//! HTTP server module.
//!
//! Binds the listening socket, serves the router until shutdown, and drains
//! connections gracefully on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
