//! Comment repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::NewComment;

/// Comment record from database
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Comments on a post, oldest first.
    pub async fn list_for_post(&self, post_id: i64) -> Result<Vec<Comment>, DbError> {
        let comments = sqlx::query_as(
            r#"
            SELECT id, post_id, author, content, created_at
            FROM board.comments
            WHERE post_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Append a comment. Fails with NotFound when the post does not exist.
    pub async fn create(&self, post_id: i64, comment: NewComment) -> Result<Comment, DbError> {
        sqlx::query_as(
            r#"
            INSERT INTO board.comments (post_id, author, content)
            SELECT p.id, $2, $3
            FROM board.posts p
            WHERE p.id = $1
            RETURNING id, post_id, author, content, created_at
            "#,
        )
        .bind(post_id)
        .bind(&comment.author)
        .bind(&comment.content)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("post", post_id))
    }
}
