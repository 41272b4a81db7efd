//! # Dashboard Subcommand
//!
//! Lead and portfolio totals. The two listings are fetched concurrently
//! and both must succeed before anything renders — a single failure
//! shows one transient error and no stats, never a half-populated
//! dashboard.

use anyhow::Result;
use orbita_client::{CredentialStore, SiteClient};
use orbita_core::QuoteStatus;

use crate::admin_call_failed;
use crate::session::require_session;

/// Execute the dashboard subcommand.
pub async fn run_dashboard(client: &SiteClient, store: &CredentialStore) -> Result<u8> {
    let auth = require_session(store)?;

    let (quotes, projects) = tokio::try_join!(
        client.quotes().list_admin(&auth),
        client.projects().list_admin(&auth),
    )
    .map_err(admin_call_failed)?;

    let new_quotes = quotes
        .iter()
        .filter(|q| q.status == QuoteStatus::New)
        .count();

    println!("Dashboard — logged in as {}", auth.username);
    println!("  Quotes:   {} total | {} new", quotes.len(), new_quotes);
    println!("  Projects: {} total", projects.len());
    Ok(0)
}
