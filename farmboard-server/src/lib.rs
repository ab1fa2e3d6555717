//! farmboard-server: discussion board and farm production reports over HTTP
//!
//! - [`db`]: connection pool, board schema migrations and repositories
//! - [`models`]: presence-checked form input
//! - [`http`]: axum router, page/JSON error mapping, flash messages

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use http::{build_router, run_server, AppState, ServerConfig};
