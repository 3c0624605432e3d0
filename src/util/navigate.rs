//! Full-page navigation.

/// Sends the browser to another URL.
pub trait Navigator {
    fn navigate_to(&self, href: &str);
}

/// Navigates by assigning `window.location.href`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

#[cfg(feature = "csr")]
impl Navigator for WindowNavigator {
    fn navigate_to(&self, href: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(href).is_err() {
                log::warn!("navigation to {href} failed");
            }
        }
    }
}
