//! The two mutually exclusive states the nav container can show.
//!
//! There is deliberately no loading variant: the container keeps whatever
//! the template put there until the auth check settles.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::User;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    /// Login and register links.
    Anonymous,
    /// Dashboard link, the user's email and a logout button.
    Authenticated { email: String },
}

impl NavState {
    pub fn for_user(user: &User) -> Self {
        Self::Authenticated { email: user.email.clone() }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}
