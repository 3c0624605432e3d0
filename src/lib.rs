//! # nav-actions
//!
//! Leptos + WASM navigation island for the server-rendered tracker pages.
//! On startup it reads the stored bearer token, asks the backend who the
//! token belongs to, and mounts either the anonymous (login/register) or the
//! authenticated (dashboard/email/logout) actions into `#nav-actions`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates, the REST backend and the login/registration pages live
//! elsewhere. This crate only owns the `#nav-actions` placeholder and the
//! `token` key in `localStorage`.

pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod renderer;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod dom;

#[cfg(test)]
pub(crate) mod testing;

/// WASM entry point: runs the navigation check once per page load.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use crate::config::NavConfig;
    use crate::dom::BrowserDocument;
    use crate::net::api::HttpCurrentUserApi;
    use crate::renderer::NavRenderer;
    use crate::util::navigate::WindowNavigator;
    use crate::util::storage::LocalStorageTokens;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = NavConfig::default();
    let renderer = NavRenderer::new(
        LocalStorageTokens::new(config.token_key.clone()),
        HttpCurrentUserApi::new(config.current_user_path.clone()),
        WindowNavigator,
        config,
    );

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = renderer.run(&BrowserDocument).await;
        log::debug!("nav render finished: {outcome:?}");
    });
}
