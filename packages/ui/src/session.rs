//! Shared token-store constructor for all platforms.
//!
//! Returns the [`store::TokenStore`] the session should persist to:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageTokenStore`]
//! - **Desktop** (native): `<data_dir>/canteen/token` via [`store::FileTokenStore`]
//! - WASM without the `web` feature keeps the token in memory only

use std::fmt;
use std::rc::Rc;

use store::TokenStore;

pub fn make_token_store() -> impl TokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageTokenStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryTokenStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("canteen");
        store::FileTokenStore::new(base)
    }
}

/// The token store the session persists to. `StoreProvider` uses the one
/// found in context, falling back to [`SessionVault::platform`].
#[derive(Clone)]
pub struct SessionVault(Rc<dyn TokenStore>);

impl SessionVault {
    pub fn new(tokens: impl TokenStore + 'static) -> Self {
        Self(Rc::new(tokens))
    }

    pub fn platform() -> Self {
        Self::new(make_token_store())
    }

    /// Persist or forget the token, logging rather than failing.
    pub fn persist(&self, token: Option<&str>) {
        let result = match token {
            Some(token) => self.0.save(token),
            None => self.0.clear(),
        };
        if let Err(e) = result {
            tracing::warn!("Could not persist session token: {e}");
        }
    }

    pub fn load(&self) -> Option<String> {
        match self.0.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Could not read session token: {e}");
                None
            }
        }
    }
}

impl PartialEq for SessionVault {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SessionVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionVault")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryTokenStore;

    #[test]
    fn vault_persists_through_shared_store() {
        let memory = MemoryTokenStore::new();
        let vault = SessionVault::new(memory.clone());
        assert_eq!(vault.load(), None);

        vault.persist(Some("jwt"));
        assert_eq!(memory.load().unwrap().as_deref(), Some("jwt"));

        let copy = vault.clone();
        assert_eq!(copy, vault);
        copy.persist(None);
        assert_eq!(vault.load(), None);
    }
}
