//! Navigation configuration: element ids, storage key, endpoint and hrefs.
//!
//! The hosting templates hard-code these values, so `NavConfig::default()`
//! is what the WASM entry point uses. Tests build custom configs to check
//! that nothing downstream reaches for the constants directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CONTAINER_ID: &str = "nav-actions";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_CURRENT_USER_PATH: &str = "/api/v1/auth/me";
pub const DEFAULT_LOGIN_HREF: &str = "/login.html";
pub const DEFAULT_REGISTER_HREF: &str = "/register.html";
pub const DEFAULT_DASHBOARD_HREF: &str = "/dashboard.html";
pub const DEFAULT_LOGOUT_REDIRECT: &str = "/";

/// Id of the logout button inside the authenticated markup.
pub const LOGOUT_BUTTON_ID: &str = "logout";

/// CSS selector for the logout button, scoped to the nav container.
pub fn logout_button_selector() -> String {
    format!("#{LOGOUT_BUTTON_ID}")
}

/// Link targets rendered into the navigation markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinks {
    pub login: String,
    pub register: String,
    pub dashboard: String,
}

impl Default for NavLinks {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_HREF.to_owned(),
            register: DEFAULT_REGISTER_HREF.to_owned(),
            dashboard: DEFAULT_DASHBOARD_HREF.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Id of the placeholder element the actions are mounted into.
    pub container_id: String,
    /// `localStorage` key holding the bearer token.
    pub token_key: String,
    /// Path of the "who am I" endpoint.
    pub current_user_path: String,
    pub links: NavLinks,
    /// Where the browser goes after logout.
    pub logout_redirect: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            current_user_path: DEFAULT_CURRENT_USER_PATH.to_owned(),
            links: NavLinks::default(),
            logout_redirect: DEFAULT_LOGOUT_REDIRECT.to_owned(),
        }
    }
}
