//! In-memory fakes for the renderer's browser seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::NavLinks;
use crate::error::AuthCheckError;
use crate::net::api::CurrentUserApi;
use crate::net::types::User;
use crate::renderer::{LogoutHandler, NavDocument, NavHost};
use crate::state::nav::NavState;
use crate::util::navigate::Navigator;
use crate::util::storage::TokenStore;

#[derive(Clone, Default)]
pub struct MemoryTokens {
    token: Rc<RefCell<Option<String>>>,
    reads: Rc<Cell<usize>>,
}

impl MemoryTokens {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.token.borrow_mut() = Some(token.to_owned());
        store
    }

    pub fn stored(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl TokenStore for MemoryTokens {
    fn token(&self) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.token.borrow().clone()
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}

/// Answers every request with the same canned result.
pub struct StubApi {
    response: Result<User, AuthCheckError>,
    tokens_seen: RefCell<Vec<String>>,
}

impl StubApi {
    pub fn ok(email: &str) -> Self {
        Self::with(Ok(User { id: Some(1), email: email.to_owned() }))
    }

    pub fn err(err: AuthCheckError) -> Self {
        Self::with(Err(err))
    }

    fn with(response: Result<User, AuthCheckError>) -> Self {
        Self { response, tokens_seen: RefCell::new(Vec::new()) }
    }

    pub fn tokens_seen(&self) -> Vec<String> {
        self.tokens_seen.borrow().clone()
    }
}

impl CurrentUserApi for StubApi {
    async fn current_user(&self, token: &str) -> Result<User, AuthCheckError> {
        self.tokens_seen.borrow_mut().push(token.to_owned());
        self.response.clone()
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, href: &str) {
        self.visits.borrow_mut().push(href.to_owned());
    }
}

#[derive(Clone, Default)]
pub struct RecordingHost {
    shown: Rc<RefCell<Vec<(NavState, NavLinks)>>>,
    logout: Rc<RefCell<Option<LogoutHandler>>>,
}

impl RecordingHost {
    pub fn states(&self) -> Vec<NavState> {
        self.shown.borrow().iter().map(|(state, _)| state.clone()).collect()
    }

    pub fn last_links(&self) -> Option<NavLinks> {
        self.shown.borrow().last().map(|(_, links)| links.clone())
    }

    pub fn has_logout(&self) -> bool {
        self.logout.borrow().is_some()
    }

    /// Simulate a click on the logout control.
    pub fn click_logout(&self) {
        if let Some(handler) = self.logout.borrow().as_ref() {
            handler();
        }
    }
}

impl NavHost for RecordingHost {
    fn show(&self, state: &NavState, links: &NavLinks) {
        self.shown.borrow_mut().push((state.clone(), links.clone()));
    }

    fn bind_logout(&self, on_logout: LogoutHandler) {
        *self.logout.borrow_mut() = Some(on_logout);
    }
}

/// A page that may or may not contain the nav container.
#[derive(Default)]
pub struct FakeDocument {
    host: Option<RecordingHost>,
    lookups: RefCell<Vec<String>>,
}

impl FakeDocument {
    pub fn with_host(host: RecordingHost) -> Self {
        Self { host: Some(host), lookups: RefCell::new(Vec::new()) }
    }

    pub fn without_host() -> Self {
        Self::default()
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl NavDocument for FakeDocument {
    type Host = RecordingHost;

    fn find_host(&self, id: &str) -> Option<RecordingHost> {
        self.lookups.borrow_mut().push(id.to_owned());
        self.host.clone()
    }
}
