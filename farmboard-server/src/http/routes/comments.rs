//! Comment submission

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::post,
    Form, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Comment, CommentRepo};
use crate::http::error::PageError;
use crate::http::flash::FlashRedirect;
use crate::http::messages;
use crate::http::server::AppState;
use crate::models::NewComment;

/// Submitted comment form
#[derive(Debug, Default, Deserialize)]
pub struct CommentForm {
    pub author: Option<String>,
    pub content: Option<String>,
}

/// Comment response
#[derive(Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            post_id: c.post_id,
            author: c.author,
            content: c.content,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// POST /post/comment/{id} - append a comment, back to the post
async fn add_comment(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Form(form): Form<CommentForm>,
) -> Result<FlashRedirect, PageError> {
    let back = format!("/post/{post_id}");
    let comment = NewComment::new(form.author.as_deref(), form.content.as_deref())
        .map_err(|e| PageError::invalid_form(back.clone(), messages::COMMENT_MISSING_FIELDS, e))?;

    CommentRepo::new(&state.pool).create(post_id, comment).await?;

    Ok(FlashRedirect::new(back, messages::COMMENT_ADDED))
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/post/comment/{id}", post(add_comment))
}
