//! # Auth token persistence
//!
//! The only client state that outlives a page load is the auth token. It is
//! kept behind the [`TokenStore`] trait so each platform picks its own
//! backend:
//!
//! | Backend | Platform | Location |
//! |---------|----------|----------|
//! | [`MemoryTokenStore`](crate::MemoryTokenStore) | tests, fallback | process memory |
//! | [`FileTokenStore`](crate::FileTokenStore) | desktop | `<data_dir>/canteen/token` |
//! | `LocalStorageTokenStore` | web (`web` feature) | `localStorage["token"]` |

use thiserror::Error;

/// Key (browser) or filename (desktop) the token is stored under.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("token file: {0}")]
    Io(#[from] std::io::Error),
    #[error("browser storage unavailable")]
    StorageUnavailable,
    #[error("browser storage rejected the write")]
    StorageWrite,
}

pub trait TokenStore {
    /// The persisted token, if any. Blank tokens count as absent.
    fn load(&self) -> Result<Option<String>, SessionError>;

    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Forget the token. Clearing an absent token is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Trim and drop blank tokens.
pub fn normalize(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_are_absent() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("  \n".to_string())), None);
        assert_eq!(normalize(Some(" abc\n".to_string())), Some("abc".to_string()));
    }
}
