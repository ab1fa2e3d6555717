//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - List queries count first, then fetch the page (two statements)
//! - Missing rows surface as `DbError::NotFound`
//! - Multi-step mutations run in a transaction

pub mod comments;
pub mod likes;
pub mod posts;
pub mod reports;

pub use comments::{Comment, CommentRepo};
pub use likes::{LikeOutcome, LikeRepo};
pub use posts::{Post, PostRepo, PostSummary};
pub use reports::ReportRepo;

use crate::config::ConfigError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
