//! # Quote Intake Subcommand
//!
//! The public submission flow: check the presence rules locally, submit,
//! report. A validation failure never dials the backend; a failed
//! submission keeps the entered values visible so the user can resubmit
//! as-is. No automatic retry.

use anyhow::{bail, Result};
use clap::Args;

use orbita_client::{ClientError, SiteClient};
use orbita_core::QuoteRequest;

/// Arguments for the `orbita quote` subcommand.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Your name.
    #[arg(long)]
    pub name: String,
    /// Contact email.
    #[arg(long)]
    pub email: String,
    /// Contact phone (optional).
    #[arg(long)]
    pub phone: Option<String>,
    /// What you need built.
    #[arg(long)]
    pub message: String,
}

impl QuoteArgs {
    fn to_request(&self) -> QuoteRequest {
        QuoteRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

/// Execute the quote subcommand.
pub async fn run_quote(args: &QuoteArgs, client: &SiteClient) -> Result<u8> {
    let request = args.to_request();

    match client.quotes().submit(&request).await {
        Ok(response) => {
            println!("OK: {}", response.message);
            if let Some(id) = response.quote_id {
                println!("  Quote ID: {id}");
            }
            Ok(0)
        }
        // Caught before dispatch — nothing was sent.
        Err(ClientError::Validation(e)) => bail!("{e}"),
        Err(e) => {
            eprintln!("ERROR: {e}");
            eprintln!("Your entries were kept — resubmit with:");
            eprint!(
                "  orbita quote --name {:?} --email {:?}",
                request.name, request.email
            );
            if let Some(phone) = &request.phone {
                eprint!(" --phone {phone:?}");
            }
            eprintln!(" --message {:?}", request.message);
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_map_onto_the_request_shape() {
        let args = QuoteArgs {
            name: "Ivan".to_string(),
            email: "ivan@example.com".to_string(),
            phone: None,
            message: "Need a site".to_string(),
        };
        let request = args.to_request();
        assert_eq!(request.name, "Ivan");
        assert!(request.phone.is_none());
        assert!(request.validate().is_ok());
    }
}
