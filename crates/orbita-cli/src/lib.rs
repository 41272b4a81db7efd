//! # orbita-cli — Admin Console for the Orbita Agency Platform
//!
//! Provides the `orbita` command-line interface over the typed API
//! client.
//!
//! ## Subcommands
//!
//! - `orbita quote` — Submit a quote request (public, no session).
//! - `orbita login` / `orbita logout` — Admin session management.
//! - `orbita dashboard` — Lead and portfolio totals.
//! - `orbita quotes` — Lead management: list, set-status, delete.
//! - `orbita projects` — Portfolio management: list, create, edit, delete.
//!
//! Admin commands are gated on the persisted session
//! ([`session::require_session`]) and refuse to run logged out. The gate
//! is a convenience, not a boundary — the backend re-verifies the Basic
//! header on every admin request, so a stale session simply collects
//! 401s and a hint to log in again.

pub mod dashboard;
pub mod intake;
pub mod projects;
pub mod quotes;
pub mod session;

use std::io::{BufRead, Write};

use orbita_client::ClientError;

/// Wrap an admin-call failure, attaching a re-login hint when the server
/// rejected the credentials rather than the request.
pub fn admin_call_failed(err: ClientError) -> anyhow::Error {
    if err.is_auth() {
        anyhow::Error::new(err).context("credentials rejected — run `orbita login` again")
    } else {
        anyhow::Error::new(err)
    }
}

/// Ask for interactive confirmation on stdout/stdin.
///
/// Anything other than `y`/`yes` (case-insensitive) declines. Destructive
/// commands call this unless `--yes` was passed.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N]: ");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;
    Ok(is_affirmative(&input))
}

/// Confirmation check over an arbitrary reader, for testability.
fn is_affirmative(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Read one line of input from a reader and interpret it as a yes/no
/// answer.
pub fn confirm_from(reader: &mut impl BufRead) -> anyhow::Result<bool> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(is_affirmative(&input))
}
