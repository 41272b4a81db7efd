//! # Credential Store
//!
//! Holds the admin session: username, password, and an authenticated
//! flag, persisted to a local JSON session file. This is the console's
//! analogue of a browser session — and like one, the flag is a UX
//! convenience only. The server re-verifies the Basic header on every
//! admin request, so a forged session file buys nothing but a 401.
//!
//! The store is an explicit object handed to the code that needs it;
//! nothing reads ambient global state. Admin API calls take a
//! [`Credentials`] reference, making the auth dependency visible in
//! every signature that has one.
//!
//! ## Security posture
//!
//! The password is persisted in cleartext because the Basic header must
//! be re-derived from it on every request. That is the design being
//! implemented, not an oversight; in memory the value is zeroized on
//! drop and redacted from `Debug`. A token exchange at login would be
//! the stronger design.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::ClientError;
use crate::SiteClient;

/// An admin session: the credential pair plus the authenticated flag.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    /// Admin username.
    pub username: String,
    password: String,
    #[zeroize(skip)]
    authenticated: bool,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("authenticated", &self.authenticated)
            .finish()
    }
}

impl Credentials {
    /// Build a session from a credential pair, marked authenticated.
    ///
    /// The flag is local bookkeeping: the server remains the authority,
    /// and a pair it rejects still yields 401s on every admin call.
    /// [`CredentialStore::login`] is the normal path, which verifies the
    /// pair before persisting it.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            authenticated: true,
        }
    }

    /// Whether this session was marked authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Derive the `Authorization` header value for an admin request.
    ///
    /// Reconstructed from the stored pair on every call — the encoded
    /// form is never cached.
    pub fn authorization_header(&self) -> String {
        format!(
            "Basic {}",
            BASE64.encode(format!("{}:{}", self.username, self.password))
        )
    }
}

/// File-backed persistence for the admin session.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store over the given session file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the session file path from the environment.
    ///
    /// `ORBITA_SESSION_FILE` wins; otherwise `$HOME/.orbita/session.json`,
    /// falling back to a dotfile in the working directory when no home
    /// directory is available.
    pub fn from_env() -> Self {
        if let Ok(path) = std::env::var("ORBITA_SESSION_FILE") {
            return Self::new(path);
        }
        match std::env::var("HOME") {
            Ok(home) => Self::new(Path::new(&home).join(".orbita").join("session.json")),
            Err(_) => Self::new(".orbita-session.json"),
        }
    }

    /// The session file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session, if any.
    ///
    /// A missing file is a normal logged-out state, not an error.
    pub fn load(&self) -> Result<Option<Credentials>, ClientError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ClientError::Session(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };
        let credentials = serde_json::from_str(&raw).map_err(|e| {
            ClientError::Session(format!("malformed session file {}: {e}", self.path.display()))
        })?;
        Ok(Some(credentials))
    }

    /// Whether an authenticated session is persisted.
    ///
    /// Reads the flag only — no server round-trip. A stale or hand-edited
    /// file can make this return `true`; the server still rejects its
    /// credentials per request.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.load(), Ok(Some(credentials)) if credentials.is_authenticated())
    }

    /// Log in: verify the pair against the backend, then persist it.
    ///
    /// A rejected login persists nothing — the store stays in its prior
    /// state. The error does not say which field was wrong; the backend
    /// decides the message.
    pub async fn login(
        &self,
        client: &SiteClient,
        username: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        client.login(username, password).await?;
        self.save(&Credentials::new(username, password))?;
        tracing::debug!(username, path = %self.path.display(), "session persisted");
        Ok(())
    }

    /// Log out: drop the persisted session.
    pub fn logout(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Session(format!(
                "failed to remove {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, credentials: &Credentials) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ClientError::Session(format!(
                        "failed to create {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }
        let raw = serde_json::to_string_pretty(credentials)
            .map_err(|e| ClientError::Session(format!("failed to serialize session: {e}")))?;
        std::fs::write(&self.path, raw).map_err(|e| {
            ClientError::Session(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_header_encodes_the_pair() {
        let credentials = Credentials::new("admin", "secret");
        // base64("admin:secret")
        assert_eq!(credentials.authorization_header(), "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn header_is_rederived_per_call() {
        let mut credentials = Credentials::new("admin", "secret");
        let first = credentials.authorization_header();
        credentials.password = "rotated".to_string();
        assert_ne!(credentials.authorization_header(), first);
    }

    #[test]
    fn debug_redacts_password() {
        let credentials = Credentials::new("admin", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}
