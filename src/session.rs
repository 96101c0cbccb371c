//! Durable session storage
//!
//! The session token is the only piece of client state that survives a
//! restart. It lives in a single file with a fixed name under the user's data
//! directory, written on login/registration and removed on logout.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::debug;

const TOKEN_FILE: &str = "session.token";

/// An authenticated session. The token is opaque to the client and attached
/// as a bearer credential to every gated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
}

/// File-backed store with an explicit init/teardown lifecycle: created on
/// login, destroyed on logout. Injected into whatever needs it instead of
/// being read ambiently.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the user's data directory
    pub fn open() -> io::Result<Self> {
        let dirs = ProjectDirs::from("app", "walletx", "walletx").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no home directory available")
        })?;
        Ok(Self::at(dirs.data_dir().join(TOKEN_FILE)))
    }

    /// Store at an explicit path (for testing)
    pub fn at(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// Load the persisted session, if any
    pub fn load(&self) -> Option<Session> {
        let token = fs::read_to_string(&self.path).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            return None;
        }
        Some(Session { token })
    }

    /// Persist a session, replacing any previous one
    pub fn save(&self, session: &Session) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &session.token)?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Destroy the session. Clearing an already-empty store is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
