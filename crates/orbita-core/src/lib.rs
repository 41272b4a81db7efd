#![deny(missing_docs)]

//! # orbita-core — Foundational Types for the Orbita Agency Platform
//!
//! This crate defines the wire-level domain types shared by the API server
//! (`orbita-api`), the typed HTTP client (`orbita-client`), and the admin
//! console (`orbita-cli`). It has no internal crate dependencies — only
//! `serde`, `serde_json`, `thiserror`, `chrono`, `uuid`, and `utoipa` from
//! the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Closed enums for lifecycle states.** [`QuoteStatus`] is a serde
//!    enum, not a string column. A value outside `{new, in_progress,
//!    completed}` is unrepresentable on either side of the wire.
//!
//! 2. **[`TechList`] is the sole path between the delimited editing form
//!    and the stored sequence.** Split, trim, and blank-segment dropping
//!    live in one place, so the join/parse round-trip holds everywhere.
//!
//! 3. **Validation at the boundary.** Request shapes ([`QuoteRequest`],
//!    [`ProjectDraft`]) validate before any network or store interaction;
//!    a validation failure never costs a round-trip.

pub mod error;
pub mod project;
pub mod quote;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use project::{Project, ProjectDraft, TechList};
pub use quote::{Quote, QuoteRequest, QuoteStatus};
