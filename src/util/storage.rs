//! Bearer token persistence in `localStorage`.
//!
//! The login page writes the token; this crate only reads it once per page
//! load and removes it when it is rejected or the user logs out.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a missing or throwing `localStorage` reads
//! as "no token" and deletes are silently dropped.

/// Read/delete access to the stored bearer token.
pub trait TokenStore {
    /// Current token, if one is stored.
    fn token(&self) -> Option<String>;

    /// Remove the stored token.
    fn clear_token(&self);
}

/// `window.localStorage` backed token store.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct LocalStorageTokens {
    key: String,
}

#[cfg(feature = "csr")]
impl LocalStorageTokens {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "csr")]
impl TokenStore for LocalStorageTokens {
    fn token(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn clear_token(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
