//! # `localStorage` token store: browser-side persistence
//!
//! [`LocalStorageTokenStore`] keeps the auth token under the `"token"` key of
//! `window.localStorage`, so a signed-in session survives page reloads.
//!
//! The struct is zero-sized and looks the storage object up on every call;
//! `web_sys::Storage` is not `Send` and the lookup is cheap. Private browsing
//! modes can deny storage entirely, which surfaces as
//! [`SessionError::StorageUnavailable`].

use web_sys::Storage;

use crate::session::{normalize, SessionError, TokenStore, TOKEN_KEY};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, SessionError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(SessionError::StorageUnavailable)
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        let value = self
            .storage()?
            .get_item(TOKEN_KEY)
            .map_err(|_| SessionError::StorageUnavailable)?;
        Ok(normalize(value))
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| SessionError::StorageWrite)
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|_| SessionError::StorageWrite)
    }
}
