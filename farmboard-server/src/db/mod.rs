//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - One shared `PgPool`; connections are checked out per query or per
//!   transaction and returned on drop
//! - Every externally supplied value is a bound parameter
//! - Read-modify-write sequences run as one statement or one locked
//!   transaction

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_lazy_pool, create_pool, create_pool_with_options};
pub use repos::*;
