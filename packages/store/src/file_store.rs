//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the auth token in a single file so a desktop
//! session survives restarts.
//!
//! ```text
//! <base_dir>/
//! └── token        # the raw token string
//! ```
//!
//! Use `dirs::data_dir()` joined with `canteen` as the base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/canteen/` |
//! | Linux | `~/.local/share/canteen/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\canteen\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::session::{normalize, SessionError, TokenStore, TOKEN_KEY};

#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(raw) => Ok(normalize(Some(raw))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.token_path(), token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(self.token_path()) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_token_roundtrip() {
        let dir = std::env::temp_dir().join(format!("canteen_token_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileTokenStore::new(dir.clone());
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();

        store.save("jwt-abc").unwrap();

        // Re-open from same directory
        let reopened = FileTokenStore::new(dir.clone());
        assert_eq!(reopened.load().unwrap().as_deref(), Some("jwt-abc"));

        reopened.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
