//! One-shot flash messages
//!
//! A redirect stores its message in the `flash` cookie; the next page view
//! reads the pending messages into its body and clears the cookie. The cookie
//! value is URL-safe base64 of a JSON string array.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, IntoResponseParts, Redirect, Response, ResponseParts};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Cookie carrying pending flash messages
pub const FLASH_COOKIE: &str = "flash";

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

/// Encode messages as a cookie value.
pub fn encode(messages: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    let json = serde_json::to_vec(messages).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a cookie value. Anything malformed reads as no messages.
pub fn decode(value: &str) -> Vec<String> {
    URL_SAFE_NO_PAD
        .decode(value.trim())
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Pending flash messages of the incoming request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashes(Vec<String>);

impl Flashes {
    /// Take the messages for a page body, along with the response part that
    /// clears them from the client.
    pub fn take(self) -> (Vec<String>, ClearFlash) {
        let clear = ClearFlash(!self.0.is_empty());
        (self.0, clear)
    }
}

impl<S> FromRequestParts<S> for Flashes
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let messages = read_cookie(&parts.headers, FLASH_COOKIE)
            .map(decode)
            .unwrap_or_default();
        Ok(Self(messages))
    }
}

/// Response part expiring the flash cookie, when there was anything to clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearFlash(bool);

impl IntoResponseParts for ClearFlash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.0 {
            res.headers_mut().append(
                SET_COOKIE,
                HeaderValue::from_static("flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
            );
        }
        Ok(res)
    }
}

/// `303 See Other` carrying a flash message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashRedirect {
    to: String,
    message: String,
}

impl FlashRedirect {
    pub fn new(to: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        let cookie = format!(
            "{}={}; {}",
            FLASH_COOKIE,
            encode(std::slice::from_ref(&self.message)),
            COOKIE_ATTRIBUTES
        );

        let mut response = Redirect::to(&self.to).into_response();
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("dropping unencodable flash cookie: {}", e),
        }
        response
    }
}
