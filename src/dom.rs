//! Browser implementation of the nav container.
//!
//! Mounts `NavActions` into `#nav-actions` with Leptos and wires the logout
//! button through a plain `click` listener.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};

use crate::components::nav_actions::NavActions;
use crate::config::{LOGOUT_BUTTON_ID, NavLinks, logout_button_selector};
use crate::renderer::{LogoutHandler, NavDocument, NavHost};
use crate::state::nav::NavState;

/// The current `window.document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl NavDocument for BrowserDocument {
    type Host = DomNavHost;

    fn find_host(&self, id: &str) -> Option<DomNavHost> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        element
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
            .map(|element| DomNavHost { element })
    }
}

#[derive(Clone, Debug)]
pub struct DomNavHost {
    element: web_sys::HtmlElement,
}

impl NavHost for DomNavHost {
    fn show(&self, state: &NavState, links: &NavLinks) {
        // Drop whatever placeholder the template rendered.
        self.element.set_inner_html("");
        let state = state.clone();
        let links = links.clone();
        leptos::mount::mount_to(self.element.clone(), move || {
            view! { <NavActions state=state links=links/> }
        })
        .forget();
    }

    fn bind_logout(&self, on_logout: LogoutHandler) {
        // Only the button this host rendered, not another `#logout` on the page.
        let Some(button) = self
            .element
            .query_selector(&logout_button_selector())
            .ok()
            .flatten()
        else {
            log::warn!("#{LOGOUT_BUTTON_ID} missing after render, logout not wired");
            return;
        };

        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| on_logout()) as Box<dyn FnMut(web_sys::Event)>);
        if button
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to attach logout listener");
            return;
        }
        // The button lives until the next full page load.
        cb.forget();
    }
}
