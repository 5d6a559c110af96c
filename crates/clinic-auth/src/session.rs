//! The identity persisted between CLI invocations.
//!
//! Stored as pretty JSON at `<data_dir>/.clinic-session.json`, readable
//! only by the owner on unix.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clinic_config::StorageConfig;

use crate::error::AuthError;
use crate::identity::Identity;

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(storage.session_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `identity`, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file cannot be written.
    pub fn save(&self, identity: &Identity) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(identity)
            .map_err(|e| AuthError::SessionStore(format!("encode session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", self.path.display());
            }
        }

        tracing::debug!(identifier = %identity.identifier, path = %self.path.display(), "session saved");
        Ok(())
    }

    /// The stored identity, or `None` when nobody is logged in. A session
    /// file that no longer parses is treated as logged out.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file exists but cannot be read.
    pub fn load(&self) -> Result<Option<Identity>, AuthError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AuthError::SessionStore(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };
        match serde_json::from_str(&text) {
            Ok(identity) => Ok(Some(identity)),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "ignoring unreadable session file");
                Ok(None)
            }
        }
    }

    /// The stored identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotLoggedIn` when no session is stored.
    pub fn require(&self) -> Result<Identity, AuthError> {
        self.load()?.ok_or(AuthError::NotLoggedIn)
    }

    /// Remove the session file. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file cannot be removed.
    pub fn clear(&self) -> Result<bool, AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AuthError::SessionStore(format!(
                "failed to delete {}: {e}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::enums::Role;
    use pretty_assertions::assert_eq;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("data").join(".clinic-session.json"))
    }

    #[test]
    fn save_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().unwrap();
        let sessions = store_in(&tmp);
        let identity = Identity::for_role(Role::Receptionist);

        sessions.save(&identity).unwrap();
        assert_eq!(sessions.load().unwrap(), Some(identity.clone()));
        assert_eq!(sessions.require().unwrap(), identity);

        assert!(sessions.clear().unwrap());
        assert_eq!(sessions.load().unwrap(), None);
        assert!(!sessions.clear().unwrap());
    }

    #[test]
    fn missing_session_is_not_logged_in() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(matches!(store_in(&tmp).require(), Err(AuthError::NotLoggedIn)));
    }

    #[test]
    fn corrupt_session_reads_as_logged_out() {
        let tmp = tempfile::TempDir::new().unwrap();
        let sessions = SessionStore::new(tmp.path().join(".clinic-session.json"));
        fs::write(sessions.path(), "{not json").unwrap();
        assert_eq!(sessions.load().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let sessions = store_in(&tmp);
        sessions.save(&Identity::for_role(Role::Admin)).unwrap();
        let mode = fs::metadata(sessions.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn from_config_uses_data_dir() {
        let mut storage = StorageConfig::default();
        storage.set_data_dir(Path::new("/srv/clinic"));
        assert_eq!(
            SessionStore::from_config(&storage).path(),
            Path::new("/srv/clinic/.clinic-session.json")
        );
    }
}
