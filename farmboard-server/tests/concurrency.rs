//! Concurrent toggles and views against a real database
//!
//! DATABASE_URL=postgres://... cargo test -p farmboard-server -- --ignored

use farmboard_server::db::{create_pool_with_options, migrations, LikeRepo, PostRepo};
use farmboard_server::models::NewPost;
use farmboard_server::DatabaseConfig;
use sqlx::PgPool;
use tokio::task::JoinSet;

async fn setup() -> (PgPool, i64) {
    let config = DatabaseConfig::from_env().expect("database config required");
    let pool = create_pool_with_options(&config, 10)
        .await
        .expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");

    let post = NewPost::new(Some("concurrency"), Some("tester"), Some("body")).unwrap();
    let id = PostRepo::new(&pool).create(post).await.unwrap();
    (pool, id)
}

#[tokio::test]
#[ignore = "requires database"]
async fn concurrent_toggles_keep_count_consistent() {
    let (pool, post_id) = setup().await;

    // Ten clients like once; one client toggles four times and ends unliked.
    let mut ips: Vec<String> = (1..=10).map(|n| format!("10.1.0.{n}")).collect();
    ips.extend(std::iter::repeat("10.9.9.9".to_string()).take(4));

    let mut tasks = JoinSet::new();
    for ip in ips {
        let pool = pool.clone();
        tasks.spawn(async move { LikeRepo::new(&pool).toggle(post_id, &ip).await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM board.likes WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    let post = PostRepo::new(&pool).get(post_id).await.unwrap();

    assert_eq!(post.like_count, rows);
    assert_eq!(post.like_count, 10);
    assert!(!LikeRepo::new(&pool)
        .state(post_id, "10.9.9.9")
        .await
        .unwrap()
        .is_liked());

    PostRepo::new(&pool).delete(post_id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn concurrent_views_are_all_counted() {
    let (pool, post_id) = setup().await;
    const VIEWS: i64 = 25;

    let mut tasks = JoinSet::new();
    for _ in 0..VIEWS {
        let pool = pool.clone();
        tasks.spawn(async move { PostRepo::new(&pool).view(post_id).await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    let post = PostRepo::new(&pool).get(post_id).await.unwrap();
    assert_eq!(post.view_count, VIEWS);

    PostRepo::new(&pool).delete(post_id).await.unwrap();
}
