use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Context, Result};
use tracing::debug;

/// Token file name in the storage directory.
/// Holds the raw token string; absence of the file means logged out.
const TOKEN_FILE: &str = "jwt_token";

/// The current authentication session: one optional token, mirrored to
/// durable storage on every mutation.
pub struct Session {
    storage_dir: PathBuf,
    token: Option<String>,
}

impl Session {
    pub fn new(storage_dir: PathBuf) -> Self {
        Self {
            storage_dir,
            token: None,
        }
    }

    /// Restore a previously persisted token from disk.
    /// Returns true if a token was found.
    pub fn restore(&mut self) -> Result<bool> {
        let path = self.token_path();
        if path.exists() {
            let token = std::fs::read_to_string(&path)
                .context("Failed to read session token file")?;
            // An empty file is indistinguishable from logged out
            if !token.is_empty() {
                self.token = Some(token);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Get the current token, if any. No side effects.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is present. Recomputed on every read.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store a token in memory and on disk.
    ///
    /// The token is opaque and its shape is not validated, but empty input
    /// is rejected: an empty token would break the rule that authenticated
    /// means a non-empty token is present.
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        anyhow::ensure!(!token.is_empty(), "Session token must be non-empty");

        let path = self.token_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, token).context("Failed to persist session token")?;
        self.token = Some(token.to_string());
        Ok(())
    }

    /// Clear the in-memory token and remove it from disk.
    /// Idempotent - safe to call when already logged out. Navigation after
    /// logout is the caller's responsibility; this only clears state.
    pub fn log_out(&mut self) -> Result<()> {
        self.token = None;
        let path = self.token_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to remove session token file")?;
        }
        Ok(())
    }

    fn token_path(&self) -> PathBuf {
        self.storage_dir.join(TOKEN_FILE)
    }
}

/// Shared handle to the session, cloned into the API client and the router.
///
/// The handle is constructed once at startup and passed by reference to
/// every collaborator; mutation happens only through `set_token` and
/// `log_out`, both driven from the single event-processing path.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    /// Open the session store, restoring any token persisted by a previous
    /// run so a restarted process is authenticated before any explicit call.
    pub fn open(storage_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut session = Session::new(storage_dir.into());
        let restored = session.restore()?;
        debug!(restored, "Session store opened");
        Ok(Self {
            inner: Arc::new(RwLock::new(session)),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.read().token().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.write().set_token(token)
    }

    pub fn log_out(&self) -> Result<()> {
        self.write().log_out()
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_token_round_trip() {
        let dir = tempdir().unwrap();
        let session = SessionHandle::open(dir.path()).unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        session.set_token("abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn set_token_rejects_empty() {
        let dir = tempdir().unwrap();
        let session = SessionHandle::open(dir.path()).unwrap();

        assert!(session.set_token("").is_err());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn log_out_clears_state_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let session = SessionHandle::open(dir.path()).unwrap();

        session.set_token("abc").unwrap();
        session.log_out().unwrap();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());

        // Logging out again is a no-op
        session.log_out().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn token_survives_restart() {
        let dir = tempdir().unwrap();

        let session = SessionHandle::open(dir.path()).unwrap();
        session.set_token("abc").unwrap();
        drop(session);

        // A fresh handle on the same directory restores the token
        let restarted = SessionHandle::open(dir.path()).unwrap();
        assert!(restarted.is_authenticated());
        assert_eq!(restarted.token().as_deref(), Some("abc"));
    }

    #[test]
    fn log_out_removes_persisted_token() {
        let dir = tempdir().unwrap();

        let session = SessionHandle::open(dir.path()).unwrap();
        session.set_token("abc").unwrap();
        session.log_out().unwrap();
        drop(session);

        let restarted = SessionHandle::open(dir.path()).unwrap();
        assert!(!restarted.is_authenticated());
    }

    #[test]
    fn empty_token_file_is_logged_out() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("jwt_token"), "").unwrap();

        let session = SessionHandle::open(dir.path()).unwrap();
        assert!(!session.is_authenticated());
    }
}
