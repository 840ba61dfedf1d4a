use std::sync::{Arc, Mutex};

use crate::session::{normalize, SessionError, TokenStore};

/// In-memory TokenStore for tests and as a fallback when no data dir exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(normalize(self.slot().clone()))
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_clear() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("jwt-123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("jwt-123"));

        // Clones share the same slot
        let other = store.clone();
        other.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn blank_token_loads_as_none() {
        let store = MemoryTokenStore::new();
        store.save("   ").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
