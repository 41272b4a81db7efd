//! # API Route Modules
//!
//! Route modules for the Orbita API surface:
//!
//! - `quotes` — public quote intake plus admin lead management
//!   (list, status transitions, deletion).
//! - `projects` — public portfolio listing plus admin portfolio CRUD.
//! - `login` — admin credential check backing the console's session flow.
//!
//! Each module exposes its own router; admin routers are mounted behind
//! the Basic-auth middleware in `crate::app`, public routers in front of
//! it.

pub mod login;
pub mod projects;
pub mod quotes;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acknowledgement body for mutations that return no record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AckResponse {
    /// Always `true` on the success path; failures use the error envelope.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}
