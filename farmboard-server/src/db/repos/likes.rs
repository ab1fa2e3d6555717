//! Like repository
//!
//! A like is the row (post_id, user_ip). The post's `like_count` is
//! recomputed from those rows inside the toggle transaction, so the two can
//! not drift apart.

use farmboard_core::{LikeState, LikeTransition};
use sqlx::PgPool;

use super::DbError;

/// Result of one toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeOutcome {
    pub transition: LikeTransition,
    /// Like count after the toggle
    pub like_count: i64,
}

impl LikeOutcome {
    pub fn state(&self) -> LikeState {
        self.transition.to
    }
}

/// Like repository
pub struct LikeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LikeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Current state for a client.
    pub async fn state(&self, post_id: i64, user_ip: &str) -> Result<LikeState, DbError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM board.likes WHERE post_id = $1 AND user_ip = $2)",
        )
        .bind(post_id)
        .bind(user_ip)
        .fetch_one(self.pool)
        .await?;

        Ok(LikeState::from_exists(exists))
    }

    /// Flip the like state for a client.
    ///
    /// The post row is locked first, so concurrent toggles on one post run
    /// one after another and each sees the previous one's result.
    pub async fn toggle(&self, post_id: i64, user_ip: &str) -> Result<LikeOutcome, DbError> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM board.posts WHERE id = $1 FOR UPDATE")
                .bind(post_id)
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            return Err(DbError::not_found("post", post_id));
        }

        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM board.likes WHERE post_id = $1 AND user_ip = $2)",
        )
        .bind(post_id)
        .bind(user_ip)
        .fetch_one(&mut *tx)
        .await?;

        let transition = LikeState::from_exists(exists).toggle();

        if transition.to.is_liked() {
            sqlx::query(
                r#"
                INSERT INTO board.likes (post_id, user_ip)
                VALUES ($1, $2)
                ON CONFLICT (post_id, user_ip) DO NOTHING
                "#,
            )
            .bind(post_id)
            .bind(user_ip)
            .execute(&mut *tx)
            .await?;
        } else {
            sqlx::query("DELETE FROM board.likes WHERE post_id = $1 AND user_ip = $2")
                .bind(post_id)
                .bind(user_ip)
                .execute(&mut *tx)
                .await?;
        }

        let (like_count,): (i64,) = sqlx::query_as(
            r#"
            UPDATE board.posts
            SET like_count = (SELECT COUNT(*) FROM board.likes WHERE post_id = $1)
            WHERE id = $1
            RETURNING like_count
            "#,
        )
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            post_id,
            delta = transition.counter_delta(),
            like_count,
            "like toggled"
        );

        Ok(LikeOutcome {
            transition,
            like_count,
        })
    }
}
