//! # Session Subcommands & Auth Gate
//!
//! `login` verifies a credential pair against the backend and persists
//! it; `logout` clears the persisted session. [`require_session`] is the
//! gate in front of every admin command: it refuses to run logged out
//! and points at `login` instead.
//!
//! The gate reads the persisted flag only — no server round-trip. It is
//! UX, not security: the backend independently authorizes every admin
//! request, so passing the gate with a stale session just yields 401s.

use anyhow::{bail, Context, Result};
use clap::Args;

use orbita_client::{CredentialStore, Credentials, SiteClient};

/// Arguments for the `orbita login` subcommand.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Admin username.
    #[arg(long)]
    pub username: String,
    /// Admin password.
    #[arg(long)]
    pub password: String,
}

/// Execute the login subcommand.
///
/// A rejected pair persists nothing and the error does not say which
/// field was wrong.
pub async fn run_login(
    args: &LoginArgs,
    client: &SiteClient,
    store: &CredentialStore,
) -> Result<u8> {
    store
        .login(client, &args.username, &args.password)
        .await
        .context("login failed")?;

    println!("OK: logged in as {}", args.username);
    println!("  Session: {}", store.path().display());
    Ok(0)
}

/// Execute the logout subcommand. Logging out twice is a no-op.
pub fn run_logout(store: &CredentialStore) -> Result<u8> {
    store.logout().context("logout failed")?;
    println!("OK: logged out");
    Ok(0)
}

/// The auth gate: load the persisted session or refuse with a pointer to
/// `login`.
pub fn require_session(store: &CredentialStore) -> Result<Credentials> {
    match store.load()? {
        Some(credentials) if credentials.is_authenticated() => Ok(credentials),
        _ => bail!("not logged in — run `orbita login` first"),
    }
}
