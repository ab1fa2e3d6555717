//! Post pages: listing, detail, create, edit, delete

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Form, Json, Router,
};
use farmboard_core::{Paginated, PaginationParams};
use serde::{Deserialize, Serialize};

use super::comments::CommentResponse;
use crate::db::repos::{CommentRepo, LikeRepo, Post, PostRepo, PostSummary};
use crate::http::error::PageError;
use crate::http::extractors::ClientIp;
use crate::http::flash::{ClearFlash, FlashRedirect, Flashes};
use crate::http::messages;
use crate::http::server::AppState;
use crate::models::{NewPost, PostEdit};

/// Page size of the post listing
const POSTS_PER_PAGE: i64 = 10;

/// Submitted post form; absent fields fail the presence check, not parsing
#[derive(Debug, Default, Deserialize)]
pub struct PostForm {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

/// Post row in the listing
#[derive(Serialize)]
pub struct PostSummaryResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub created_at: String,
    pub view_count: i64,
    pub like_count: i64,
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(p: PostSummary) -> Self {
        Self {
            id: p.id,
            title: p.title,
            author: p.author,
            created_at: p.created_at.to_rfc3339(),
            view_count: p.view_count,
            like_count: p.like_count,
        }
    }
}

/// Full post
#[derive(Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            author: p.author,
            content: p.content,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.map(|t| t.to_rfc3339()),
            view_count: p.view_count,
            like_count: p.like_count,
        }
    }
}

#[derive(Serialize)]
pub struct IndexView {
    pub flashes: Vec<String>,
    pub posts: Paginated<PostSummaryResponse>,
}

#[derive(Serialize)]
pub struct CreateFormView {
    pub flashes: Vec<String>,
}

#[derive(Serialize)]
pub struct PostView {
    pub flashes: Vec<String>,
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
    /// Whether the requesting client has liked this post
    pub liked: bool,
}

#[derive(Serialize)]
pub struct EditFormView {
    pub flashes: Vec<String>,
    pub post: PostResponse,
}

/// GET / - newest posts, ten per page
async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
    flashes: Flashes,
) -> Result<(ClearFlash, Json<IndexView>), PageError> {
    let page = params
        .resolve_fixed(POSTS_PER_PAGE)
        .map_err(|e| PageError::internal(e.to_string()))?;
    let posts = PostRepo::new(&state.pool).list(page).await?;

    let (flashes, clear) = flashes.take();
    Ok((
        clear,
        Json(IndexView {
            flashes,
            posts: posts.map(PostSummaryResponse::from),
        }),
    ))
}

/// GET /create/ - new post form
async fn create_form(flashes: Flashes) -> (ClearFlash, Json<CreateFormView>) {
    let (flashes, clear) = flashes.take();
    (clear, Json(CreateFormView { flashes }))
}

/// POST /create/ - insert and go to the new post
async fn create_post(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Result<FlashRedirect, PageError> {
    let post = NewPost::new(
        form.title.as_deref(),
        form.author.as_deref(),
        form.content.as_deref(),
    )
    .map_err(|e| PageError::invalid_form("/create/", messages::CREATE_MISSING_FIELDS, e))?;

    let id = PostRepo::new(&state.pool).create(post).await?;
    tracing::info!(post_id = id, "post created");

    Ok(FlashRedirect::new(format!("/post/{id}"), messages::POST_CREATED))
}

/// GET /post/{id} - detail view; counts a view
async fn view_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    client: ClientIp,
    flashes: Flashes,
) -> Result<(ClearFlash, Json<PostView>), PageError> {
    let post = PostRepo::new(&state.pool).view(id).await?;
    let comments = CommentRepo::new(&state.pool).list_for_post(id).await?;
    let liked = LikeRepo::new(&state.pool)
        .state(id, &client.as_key())
        .await?
        .is_liked();

    let (flashes, clear) = flashes.take();
    Ok((
        clear,
        Json(PostView {
            flashes,
            post: PostResponse::from(post),
            comments: comments.into_iter().map(CommentResponse::from).collect(),
            liked,
        }),
    ))
}

/// GET /edit/{id} - edit form
async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    flashes: Flashes,
) -> Result<(ClearFlash, Json<EditFormView>), PageError> {
    let post = PostRepo::new(&state.pool).get(id).await?;

    let (flashes, clear) = flashes.take();
    Ok((
        clear,
        Json(EditFormView {
            flashes,
            post: PostResponse::from(post),
        }),
    ))
}

/// POST /edit/{id} - replace title and content
async fn edit_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<PostForm>,
) -> Result<FlashRedirect, PageError> {
    let edit = PostEdit::new(form.title.as_deref(), form.content.as_deref()).map_err(|e| {
        PageError::invalid_form(format!("/edit/{id}"), messages::EDIT_MISSING_FIELDS, e)
    })?;

    PostRepo::new(&state.pool).update(id, edit).await?;

    Ok(FlashRedirect::new(format!("/post/{id}"), messages::POST_UPDATED))
}

/// POST /delete/{id}
async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<FlashRedirect, PageError> {
    PostRepo::new(&state.pool).delete(id).await?;
    tracing::info!(post_id = id, "post deleted");

    Ok(FlashRedirect::new("/", messages::POST_DELETED))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/create/", get(create_form).post(create_post))
        .route("/post/{id}", get(view_post))
        .route("/edit/{id}", get(edit_form).post(edit_post))
        .route("/delete/{id}", post(delete_post))
}
