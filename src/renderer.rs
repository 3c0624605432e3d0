//! Page-load auth check that decides which nav actions to show.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load from the WASM entry point. Reads the stored
//! token, resolves it through the "current user" endpoint, and renders
//! exactly one of the two `NavState`s into the container.
//!
//! ERROR HANDLING
//! ==============
//! Every `AuthCheckError` is treated the same: the token is cleared and the
//! anonymous nav is shown. Nothing is surfaced to the user beyond that.

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

use log::{debug, info, warn};

use crate::config::{NavConfig, NavLinks};
use crate::error::AuthCheckError;
use crate::net::api::CurrentUserApi;
use crate::net::types::User;
use crate::state::nav::NavState;
use crate::util::navigate::Navigator;
use crate::util::storage::TokenStore;

/// Click handler attached to the logout control.
pub type LogoutHandler = Box<dyn Fn()>;

/// The container element the nav is rendered into.
pub trait NavHost {
    /// Replace the container's content with the markup for `state`.
    fn show(&self, state: &NavState, links: &NavLinks);

    /// Attach `on_logout` to the logout control rendered by `show`.
    fn bind_logout(&self, on_logout: LogoutHandler);
}

/// Looks up the container element by id.
pub trait NavDocument {
    type Host: NavHost;

    fn find_host(&self, id: &str) -> Option<Self::Host>;
}

/// What a single run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The page has no nav container; nothing was touched.
    NoContainer,
    /// No token was stored; anonymous nav rendered without a request.
    Anonymous,
    /// Token accepted; authenticated nav rendered and logout wired.
    Authenticated(User),
    /// Token rejected; token cleared and anonymous nav rendered.
    Rejected(AuthCheckError),
}

pub struct NavRenderer<S, A, N> {
    config: NavConfig,
    store: S,
    api: A,
    navigator: N,
}

impl<S, A, N> NavRenderer<S, A, N>
where
    S: TokenStore + Clone + 'static,
    A: CurrentUserApi,
    N: Navigator + Clone + 'static,
{
    pub fn new(store: S, api: A, navigator: N, config: NavConfig) -> Self {
        Self { config, store, api, navigator }
    }

    /// Render the nav for the current token into `document`'s container.
    ///
    /// Issues at most one request, and only when a non-empty token is stored.
    pub async fn run<D: NavDocument>(&self, document: &D) -> NavOutcome {
        let Some(host) = document.find_host(&self.config.container_id) else {
            debug!("no #{} on this page, skipping nav", self.config.container_id);
            return NavOutcome::NoContainer;
        };

        let Some(token) = self.store.token().filter(|t| !t.is_empty()) else {
            debug!("no stored token, rendering anonymous nav");
            host.show(&NavState::Anonymous, &self.config.links);
            return NavOutcome::Anonymous;
        };

        match self.api.current_user(&token).await {
            Ok(user) => {
                info!("nav authenticated as {}", user.email);
                host.show(&NavState::for_user(&user), &self.config.links);
                host.bind_logout(self.logout_handler());
                NavOutcome::Authenticated(user)
            }
            Err(err) => {
                warn!("stored token rejected, clearing it: {err}");
                self.store.clear_token();
                host.show(&NavState::Anonymous, &self.config.links);
                NavOutcome::Rejected(err)
            }
        }
    }

    fn logout_handler(&self) -> LogoutHandler {
        let store = self.store.clone();
        let navigator = self.navigator.clone();
        let redirect = self.config.logout_redirect.clone();
        Box::new(move || logout(&store, &navigator, &redirect))
    }
}

/// Drop the stored token and send the browser to `redirect`.
pub fn logout<S: TokenStore, N: Navigator>(store: &S, navigator: &N, redirect: &str) {
    store.clear_token();
    info!("logged out, redirecting to {redirect}");
    navigator.navigate_to(redirect);
}
