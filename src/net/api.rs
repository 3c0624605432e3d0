//! "Current user" lookup against the backend.
//!
//! Client-side (csr): a real `GET` via `gloo-net` with the token attached as
//! a bearer credential. Native builds only get the trait and the pure
//! helpers, which is what the renderer tests drive.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and body failures come back as distinct
//! `AuthCheckError` variants; the renderer collapses them all to the
//! anonymous nav.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::error::AuthCheckError;

/// Resolves a bearer token to the user it belongs to.
#[allow(async_fn_in_trait)]
pub trait CurrentUserApi {
    /// Ask the backend who owns `token`.
    ///
    /// # Errors
    ///
    /// Returns an `AuthCheckError` when the request fails, the status is not
    /// 2xx, or the body is not a user record.
    async fn current_user(&self, token: &str) -> Result<User, AuthCheckError>;
}

/// Value of the `Authorization` header for `token`.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Accept 2xx, reject everything else.
///
/// # Errors
///
/// Returns `AuthCheckError::Status` for any non-2xx status.
pub fn ensure_success(status: u16) -> Result<(), AuthCheckError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(AuthCheckError::Status(status))
    }
}

/// Parse a "current user" response body.
///
/// # Errors
///
/// Returns `AuthCheckError::Decode` if the body is not a JSON user record.
pub fn decode_user(body: &str) -> Result<User, AuthCheckError> {
    serde_json::from_str(body).map_err(|e| AuthCheckError::Decode(e.to_string()))
}

/// `gloo-net` backed implementation used in the browser.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct HttpCurrentUserApi {
    path: String,
}

#[cfg(feature = "csr")]
impl HttpCurrentUserApi {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "csr")]
impl CurrentUserApi for HttpCurrentUserApi {
    async fn current_user(&self, token: &str) -> Result<User, AuthCheckError> {
        let resp = gloo_net::http::Request::get(&self.path)
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| AuthCheckError::Network(e.to_string()))?;
        ensure_success(resp.status())?;
        let body = resp
            .text()
            .await
            .map_err(|e| AuthCheckError::Network(e.to_string()))?;
        decode_user(&body)
    }
}
