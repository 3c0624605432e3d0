//! Navigation actions for the page header.
//!
//! DESIGN
//! ======
//! Pure markup: the logout button carries a fixed id and gets its click
//! handler from the DOM host, so the component stays free of browser
//! handles and renders identically on native test builds.

#[cfg(test)]
#[path = "nav_actions_test.rs"]
mod nav_actions_test;

use leptos::prelude::*;

use crate::config::{LOGOUT_BUTTON_ID, NavLinks};
use crate::state::nav::NavState;

/// Login/register links when anonymous; dashboard, email and logout when
/// authenticated.
#[component]
pub fn NavActions(state: NavState, #[prop(optional)] links: NavLinks) -> impl IntoView {
    match state {
        NavState::Anonymous => view! {
            <a class="btn btn-outline-primary me-2" href=links.login>
                "Вход"
            </a>
            <a class="btn btn-primary" href=links.register>
                "Регистрация"
            </a>
        }
        .into_any(),
        NavState::Authenticated { email } => view! {
            <a class="btn btn-outline-secondary me-2" href=links.dashboard>
                "Дашборд"
            </a>
            <div class="d-flex align-items-center">
                <span class="small-muted me-2">{email}</span>
                <button id=LOGOUT_BUTTON_ID class="btn btn-danger">
                    "Выйти"
                </button>
            </div>
        }
        .into_any(),
    }
}
