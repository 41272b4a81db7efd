//! # Portfolio Management Subcommands
//!
//! Create and edit share the draft shape; `tech` is passed as one
//! comma-delimited string and split/trimmed on submit, dropping blank
//! segments. `edit` pre-populates unspecified fields from the fetched
//! project — the existing tech sequence is serialized back to its
//! delimited form and re-parsed, which round-trips element-wise. Every
//! mutation is followed by a full re-fetch.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use uuid::Uuid;

use orbita_client::{CredentialStore, Credentials, SiteClient};
use orbita_core::{Project, ProjectDraft, TechList};

use crate::session::require_session;
use crate::{admin_call_failed, confirm};

/// Arguments for the `orbita projects` subcommand.
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

/// Portfolio management subcommands.
#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    /// List all portfolio entries, newest first.
    List,

    /// Create a portfolio entry.
    Create {
        /// Display title.
        #[arg(long)]
        title: String,
        /// Short description.
        #[arg(long)]
        description: String,
        /// Technologies, comma-delimited (e.g. "React, Rust, Postgres").
        #[arg(long)]
        tech: String,
        /// Cover image URL.
        #[arg(long)]
        image: String,
        /// Link to the live project (optional).
        #[arg(long)]
        link: Option<String>,
    },

    /// Edit a portfolio entry. Unspecified fields keep their current
    /// values.
    Edit {
        /// Project identifier.
        #[arg(long)]
        id: Uuid,
        /// New display title.
        #[arg(long)]
        title: Option<String>,
        /// New short description.
        #[arg(long)]
        description: Option<String>,
        /// New technologies, comma-delimited.
        #[arg(long)]
        tech: Option<String>,
        /// New cover image URL.
        #[arg(long)]
        image: Option<String>,
        /// New link to the live project.
        #[arg(long)]
        link: Option<String>,
    },

    /// Delete a portfolio entry.
    Delete {
        /// Project identifier.
        #[arg(long)]
        id: Uuid,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Execute the projects subcommand.
pub async fn run_projects(
    args: &ProjectsArgs,
    client: &SiteClient,
    store: &CredentialStore,
) -> Result<u8> {
    let auth = require_session(store)?;

    match &args.command {
        ProjectsCommand::List => {
            let projects = fetch(client, &auth).await?;
            print_projects(&projects);
            Ok(0)
        }

        ProjectsCommand::Create {
            title,
            description,
            tech,
            image,
            link,
        } => {
            let draft = ProjectDraft {
                title: title.clone(),
                description: description.clone(),
                tech: TechList::parse(tech)?,
                image: image.clone(),
                link: link.clone(),
            };

            let created = client
                .projects()
                .create(&draft, &auth)
                .await
                .map_err(admin_call_failed)?;
            println!("OK: created project {}", created.id);

            let projects = fetch(client, &auth).await?;
            print_projects(&projects);
            Ok(0)
        }

        ProjectsCommand::Edit {
            id,
            title,
            description,
            tech,
            image,
            link,
        } => {
            // No by-id endpoint exists; the edit form is pre-populated
            // from the fetched listing, as the admin surface always was.
            let projects = fetch(client, &auth).await?;
            let current = projects
                .iter()
                .find(|p| p.id == *id)
                .with_context(|| format!("project not found: {id}"))?;

            // Existing tech round-trips through its delimited editing
            // form; an explicit --tech replaces it wholesale.
            let tech_input = match tech {
                Some(input) => input.clone(),
                None => current.tech.join_display(),
            };

            let draft = ProjectDraft {
                title: title.clone().unwrap_or_else(|| current.title.clone()),
                description: description
                    .clone()
                    .unwrap_or_else(|| current.description.clone()),
                tech: TechList::parse(&tech_input)?,
                image: image.clone().unwrap_or_else(|| current.image.clone()),
                link: link.clone().or_else(|| current.link.clone()),
            };

            let updated = client
                .projects()
                .update(*id, &draft, &auth)
                .await
                .map_err(admin_call_failed)?;
            println!("OK: updated project {}", updated.id);

            let projects = fetch(client, &auth).await?;
            print_projects(&projects);
            Ok(0)
        }

        ProjectsCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete project {id}?"))? {
                println!("Aborted.");
                return Ok(1);
            }

            client
                .projects()
                .delete(*id, &auth)
                .await
                .map_err(admin_call_failed)?;
            println!("OK: project deleted");

            let projects = fetch(client, &auth).await?;
            print_projects(&projects);
            Ok(0)
        }
    }
}

async fn fetch(client: &SiteClient, auth: &Credentials) -> Result<Vec<Project>> {
    client
        .projects()
        .list_admin(auth)
        .await
        .map_err(admin_call_failed)
}

fn print_projects(projects: &[Project]) {
    println!("Projects: {} total", projects.len());
    for project in projects {
        println!("  {} — {}", project.id, project.title);
        println!("      Tech: {}", project.tech.join_display());
        println!("      Image: {}", project.image);
        if let Some(link) = &project.link {
            println!("      Link: {link}");
        }
        println!("      {}", project.description);
    }
}
