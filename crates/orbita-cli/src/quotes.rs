//! # Lead Management Subcommands
//!
//! `list` shows every lead in the order the backend returns them
//! (newest first). `set-status` applies immediately; `delete` asks for
//! confirmation unless `--yes` was passed. Every mutation is followed by
//! a full re-fetch, so what is printed is server truth, not a local
//! echo.

use anyhow::Result;
use clap::{Args, Subcommand};
use uuid::Uuid;

use orbita_client::{CredentialStore, Credentials, SiteClient};
use orbita_core::{Quote, QuoteStatus};

use crate::session::require_session;
use crate::{admin_call_failed, confirm};

/// Arguments for the `orbita quotes` subcommand.
#[derive(Args, Debug)]
pub struct QuotesArgs {
    #[command(subcommand)]
    pub command: QuotesCommand,
}

/// Lead management subcommands.
#[derive(Subcommand, Debug)]
pub enum QuotesCommand {
    /// List all leads, newest first.
    List,

    /// Set a lead's status (new, in_progress, completed).
    SetStatus {
        /// Lead identifier.
        #[arg(long)]
        id: Uuid,
        /// Target status.
        #[arg(long)]
        status: QuoteStatus,
    },

    /// Delete a lead.
    Delete {
        /// Lead identifier.
        #[arg(long)]
        id: Uuid,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Execute the quotes subcommand.
pub async fn run_quotes(
    args: &QuotesArgs,
    client: &SiteClient,
    store: &CredentialStore,
) -> Result<u8> {
    let auth = require_session(store)?;

    match &args.command {
        QuotesCommand::List => {
            let quotes = fetch(client, &auth).await?;
            print_quotes(&quotes);
            Ok(0)
        }

        QuotesCommand::SetStatus { id, status } => {
            client
                .quotes()
                .update_status(*id, *status, &auth)
                .await
                .map_err(admin_call_failed)?;
            println!("OK: status updated");

            let quotes = fetch(client, &auth).await?;
            print_quotes(&quotes);
            Ok(0)
        }

        QuotesCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete quote {id}?"))? {
                println!("Aborted.");
                return Ok(1);
            }

            client
                .quotes()
                .delete(*id, &auth)
                .await
                .map_err(admin_call_failed)?;
            println!("OK: quote deleted");

            let quotes = fetch(client, &auth).await?;
            print_quotes(&quotes);
            Ok(0)
        }
    }
}

async fn fetch(client: &SiteClient, auth: &Credentials) -> Result<Vec<Quote>> {
    client
        .quotes()
        .list_admin(auth)
        .await
        .map_err(admin_call_failed)
}

fn print_quotes(quotes: &[Quote]) {
    println!("Quotes: {} total", quotes.len());
    for quote in quotes {
        println!(
            "  [{}] {} — {} <{}>",
            quote.status, quote.id, quote.name, quote.email
        );
        if let Some(phone) = &quote.phone {
            println!("      Phone: {phone}");
        }
        println!("      From: {} ({})", quote.country, quote.ip_address);
        println!("      Date: {}", quote.created_at.format("%Y-%m-%d %H:%M UTC"));
        println!("      {}", quote.message);
    }
}
