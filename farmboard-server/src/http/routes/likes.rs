//! Like toggle

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::post,
    Router,
};
use farmboard_core::LikeState;

use crate::db::repos::LikeRepo;
use crate::http::error::PageError;
use crate::http::extractors::ClientIp;
use crate::http::flash::FlashRedirect;
use crate::http::messages;
use crate::http::server::AppState;

/// Flash message for the state a toggle ended in.
fn toggle_message(state: LikeState) -> &'static str {
    match state {
        LikeState::Liked => messages::LIKE_ADDED,
        LikeState::NotLiked => messages::LIKE_REMOVED,
    }
}

/// POST /post/like/{id} - flip this client's like, back to the post
async fn like_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    client: ClientIp,
) -> Result<FlashRedirect, PageError> {
    let outcome = LikeRepo::new(&state.pool)
        .toggle(post_id, &client.as_key())
        .await?;

    Ok(FlashRedirect::new(
        format!("/post/{post_id}"),
        toggle_message(outcome.state()),
    ))
}

/// Like routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/post/like/{id}", post(like_post))
}
