//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - Flash messages carried across redirects in a cookie
//! - Page views returned as JSON view models

pub mod error;
pub mod extractors;
pub mod flash;
pub mod messages;
pub mod routes;
pub mod server;

pub use error::{ApiError, PageError};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
