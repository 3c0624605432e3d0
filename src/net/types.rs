//! Wire DTOs returned by the backend auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// The user a bearer token belongs to, as returned by `/api/v1/auth/me`.
///
/// Only `email` is rendered. Unknown fields are ignored so the backend can
/// grow the payload without breaking the nav.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Backend user id, if present.
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
}
