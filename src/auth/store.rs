use crate::AuthError;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Single source of truth for the backend bearer token
///
/// Every collaborator that talks to the backend reads the credential through
/// this trait; there is exactly one stored copy per store.
pub trait CredentialStore: Send + Sync {
    /// Reads the stored token, or None if no credential is stored
    fn read(&self) -> Result<Option<String>, AuthError>;

    /// Stores a token, replacing any existing one
    fn write(&self, token: &str) -> Result<(), AuthError>;

    /// Removes the stored token
    fn clear(&self) -> Result<(), AuthError>;
}

/// File-backed credential store
///
/// The token lives in a single plain-text file; reads trim surrounding
/// whitespace so a trailing newline in a hand-edited file is harmless.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileTokenStore {
    fn read(&self) -> Result<Option<String>, AuthError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::Io(e)),
        }
    }

    fn write(&self, token: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Io(e)),
        }
    }
}

/// In-memory credential store for tests and embedding
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl CredentialStore for MemoryTokenStore {
    fn read(&self) -> Result<Option<String>, AuthError> {
        Ok(self.token.lock().map_err(poisoned)?.clone())
    }

    fn write(&self, token: &str) -> Result<(), AuthError> {
        *self.token.lock().map_err(poisoned)? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.token.lock().map_err(poisoned)? = None;
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> AuthError {
    AuthError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        "credential store lock poisoned",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));

        assert_eq!(store.read().unwrap(), None);

        store.write("secret-token").unwrap();
        assert_eq!(store.read().unwrap(), Some("secret-token".to_string()));

        store.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_file_store_trims_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  secret-token\n").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.read().unwrap(), Some("secret-token".to_string()));
    }

    #[test]
    fn test_file_store_blank_file_is_no_credential() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "\n\n").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/deeper/token"));

        store.write("tok").unwrap();
        assert_eq!(store.read().unwrap(), Some("tok".to_string()));
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));

        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.read().unwrap(), None);

        store.write("tok").unwrap();
        assert_eq!(store.read().unwrap(), Some("tok".to_string()));

        store.clear().unwrap();
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_memory_store_with_token() {
        let store = MemoryTokenStore::with_token("preset");
        assert_eq!(store.read().unwrap(), Some("preset".to_string()));
    }
}
