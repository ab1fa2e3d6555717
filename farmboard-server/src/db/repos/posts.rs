//! Post repository
//!
//! Handles post CRUD:
//! - list: count, then fetch one page newest-first
//! - view: view-count increment and fetch in one statement

use chrono::{DateTime, Utc};
use farmboard_core::{Paginated, Pagination};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{NewPost, PostEdit};

/// Post record from database
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub like_count: i64,
}

/// Post row for the listing (no content)
#[derive(Debug, Clone, FromRow)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub view_count: i64,
    pub like_count: i64,
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List posts, newest first.
    ///
    /// The count and the page are separate statements; under concurrent
    /// writes the total may be slightly stale relative to the items.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<PostSummary>, DbError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM board.posts")
            .fetch_one(self.pool)
            .await?;

        let items: Vec<PostSummary> = sqlx::query_as(
            r#"
            SELECT id, title, author, created_at, view_count, like_count
            FROM board.posts
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        Ok(page.paginate(items, total))
    }

    /// Insert a post, returning its generated id.
    pub async fn create(&self, post: NewPost) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO board.posts (title, content, author)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(post_id = id, "post created");
        Ok(id)
    }

    /// Get a single post by ID without touching its counters.
    pub async fn get(&self, id: i64) -> Result<Post, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, title, author, content, created_at, updated_at, view_count, like_count
            FROM board.posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("post", id))
    }

    /// Count one view and return the updated post.
    pub async fn view(&self, id: i64) -> Result<Post, DbError> {
        sqlx::query_as(
            r#"
            UPDATE board.posts
            SET view_count = view_count + 1
            WHERE id = $1
            RETURNING id, title, author, content, created_at, updated_at, view_count, like_count
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("post", id))
    }

    /// Replace title and content. Last write wins.
    pub async fn update(&self, id: i64, edit: PostEdit) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE board.posts
            SET title = $1, content = $2, updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(&edit.title)
        .bind(&edit.content)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("post", id));
        }
        Ok(())
    }

    /// Delete a post; its comments and likes go with it.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM board.posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("post", id));
        }
        tracing::debug!(post_id = id, "post deleted");
        Ok(())
    }
}
