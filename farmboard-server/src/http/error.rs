//! Error types with IntoResponse
//!
//! JSON routes answer with `{"error": "<message>"}`. Page routes turn user
//! errors into a redirect with a flash message. Database faults are logged
//! and answered with a generic 500 in both cases; raw database text never
//! reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use farmboard_core::CoreError;
use serde_json::json;

use super::flash::FlashRedirect;
use super::messages;
use crate::db::DbError;
use crate::models::ValidationError;

const INTERNAL_MESSAGE: &str = "an internal error occurred";

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_MESSAGE })),
    )
        .into_response()
}

/// Error for JSON API routes
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404)
    NotFound { message: String },

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { message } => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                internal_error_response()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                internal_error_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound {
                message: messages::DATA_NOT_FOUND.to_owned(),
            },
            _ => Self::Database(e),
        }
    }
}

/// Error for page routes
#[derive(Debug)]
pub enum PageError {
    /// Send the client elsewhere with a flash message
    Redirect(FlashRedirect),

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl PageError {
    pub fn redirect(to: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Redirect(FlashRedirect::new(to, message))
    }

    /// A missing post sends the client back to the listing.
    pub fn post_not_found() -> Self {
        Self::redirect("/", messages::POST_NOT_FOUND)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Redirect back to a form when validation failed.
    pub fn invalid_form(to: impl Into<String>, message: &str, err: ValidationError) -> Self {
        tracing::debug!("form rejected: {}", err);
        Self::redirect(to, message)
    }

    /// Redirect when a query parameter is out of range.
    pub fn invalid_parameter(to: impl Into<String>, message: &str, err: CoreError) -> Self {
        tracing::debug!("parameter rejected: {}", err);
        Self::redirect(to, message)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                internal_error_response()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                internal_error_response()
            }
        }
    }
}

/// On page routes the only rows looked up by id are posts.
impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::post_not_found(),
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::{LOCATION, SET_COOKIE};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_error_only() {
        let err = ApiError::from(DbError::NotFound {
            resource: "chick_info",
            id: "C-404".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": messages::DATA_NOT_FOUND })
        );
    }

    #[tokio::test]
    async fn database_error_is_generic_500() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": INTERNAL_MESSAGE }));
    }

    #[tokio::test]
    async fn page_not_found_redirects_to_listing() {
        let err = PageError::from(DbError::NotFound {
            resource: "post",
            id: "7".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/");
        assert!(response.headers().get(SET_COOKIE).is_some());
    }

    #[tokio::test]
    async fn page_database_error_does_not_leak() {
        let err = PageError::from(DbError::Sqlx(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(!text.contains("no rows"));
    }
}
