//! Board schema migrations
//!
//! Only the `board` namespace belongs to this application. The `fms`
//! reporting tables are loaded externally and never created or altered here.

use sqlx::PgPool;

use super::DbError;

const STATEMENTS: &[&str] = &[
    "CREATE SCHEMA IF NOT EXISTS board",
    r#"
    CREATE TABLE IF NOT EXISTS board.posts (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ,
        view_count BIGINT NOT NULL DEFAULT 0,
        like_count BIGINT NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS board.comments (
        id BIGSERIAL PRIMARY KEY,
        post_id BIGINT NOT NULL REFERENCES board.posts(id) ON DELETE CASCADE,
        author TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS board.likes (
        post_id BIGINT NOT NULL REFERENCES board.posts(id) ON DELETE CASCADE,
        user_ip TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        PRIMARY KEY (post_id, user_ip)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_posts_created_at ON board.posts(created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_comments_post_id ON board.comments(post_id, created_at)",
];

/// Run all board migrations (idempotent).
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running board migrations...");

    let mut tx = pool.begin().await?;
    for statement in STATEMENTS {
        sqlx::query(*statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!("Board migrations complete");
    Ok(())
}
