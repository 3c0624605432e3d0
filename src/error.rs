//! Failure taxonomy for the "current user" check.

/// Why a stored token could not be turned into a user.
///
/// Every variant is handled the same way (token cleared, anonymous nav); the
/// distinction only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthCheckError {
    /// The endpoint answered with a non-2xx status.
    #[error("current user request rejected: status {0}")]
    Status(u16),

    /// The request could not be sent or the body could not be read.
    #[error("current user request failed: {0}")]
    Network(String),

    /// The body was not a valid user record.
    #[error("current user response parse failed: {0}")]
    Decode(String),
}
