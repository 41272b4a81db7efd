//! # Portfolio Project Domain Types
//!
//! Projects are the agency's public portfolio entries, managed exclusively
//! through the admin surface. The technology list is edited as a single
//! comma-delimited string and stored as an ordered sequence; [`TechList`]
//! owns that conversion in both directions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ValidationError;

/// Ordered technology tags for a project.
///
/// Display order is meaningful, so this is a sequence, not a set. The
/// delimited editing form round-trips: for any list of non-empty trimmed
/// entries, `TechList::parse(&list.join_display())` reproduces the list
/// element-wise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Vec<String>)]
pub struct TechList(Vec<String>);

impl TechList {
    /// Parse the comma-delimited editing form into an ordered list.
    ///
    /// Segments are trimmed and blank segments dropped, so `"React, , Go"`
    /// yields two entries. An input that yields zero entries is rejected —
    /// a project with no technologies is not a valid state.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let entries: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if entries.is_empty() {
            return Err(ValidationError::EmptyTechList);
        }
        Ok(Self(entries))
    }

    /// Build a list from already-separated entries, applying the same
    /// trim-and-drop-blank rules as [`TechList::parse`].
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<String> = entries
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if entries.is_empty() {
            return Err(ValidationError::EmptyTechList);
        }
        Ok(Self(entries))
    }

    /// Serialize back to the `", "`-joined editing form.
    pub fn join_display(&self) -> String {
        self.0.join(", ")
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Number of entries. Never zero for a parsed list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty. Only reachable for wire-deserialized
    /// values that bypassed [`TechList::parse`]; the boundary validation
    /// in [`ProjectDraft::validate`] rejects these.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TechList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.join_display())
    }
}

/// A stored portfolio entry, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Opaque identifier assigned at creation.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Short description shown on the portfolio card.
    pub description: String,
    /// Ordered technology tags.
    pub tech: TechList,
    /// Cover image URL.
    pub image: String,
    /// Optional link to the live project.
    #[serde(default)]
    pub link: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Create/update payload for a project. The create and edit forms share
/// this shape; the server assigns `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDraft {
    /// Display title. Required.
    pub title: String,
    /// Short description. Required.
    pub description: String,
    /// Ordered technology tags. Must contain at least one entry.
    pub tech: TechList,
    /// Cover image URL. Required.
    pub image: String,
    /// Optional link to the live project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProjectDraft {
    /// Check the presence rules for a draft.
    ///
    /// The tech check closes a gap in the original editing surface, which
    /// never enforced non-emptiness: an empty sequence is rejected here on
    /// both sides of the wire.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "title" });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "description" });
        }
        if self.image.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "image" });
        }
        if self.tech.is_empty() {
            return Err(ValidationError::EmptyTechList);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_draft() -> ProjectDraft {
        ProjectDraft {
            title: "E-Commerce Platform".to_string(),
            description: "Storefront with custom checkout".to_string(),
            tech: TechList::parse("React, Rust, Postgres").unwrap(),
            image: "https://cdn.example.com/shop.jpg".to_string(),
            link: Some("https://shop.example.com".to_string()),
        }
    }

    #[test]
    fn parse_splits_trims_and_drops_blanks() {
        let list = TechList::parse(" React ,, Node.js ,  , MongoDB").unwrap();
        assert_eq!(list.entries(), ["React", "Node.js", "MongoDB"]);
    }

    #[test]
    fn parse_preserves_order() {
        let list = TechList::parse("Zig, Ada, COBOL").unwrap();
        assert_eq!(list.entries(), ["Zig", "Ada", "COBOL"]);
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(
            TechList::parse("  , ,").unwrap_err(),
            ValidationError::EmptyTechList
        );
        assert_eq!(
            TechList::parse("").unwrap_err(),
            ValidationError::EmptyTechList
        );
    }

    #[test]
    fn join_display_uses_comma_space() {
        let list = TechList::parse("React,Rust").unwrap();
        assert_eq!(list.join_display(), "React, Rust");
    }

    #[test]
    fn serde_form_is_a_plain_array() {
        let list = TechList::parse("React, Rust").unwrap();
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"["React","Rust"]"#
        );
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        let mut draft = valid_draft();
        draft.title = " ".to_string();
        assert_eq!(
            draft.validate().unwrap_err(),
            ValidationError::MissingField { field: "title" }
        );
    }

    #[test]
    fn wire_deserialized_empty_tech_rejected_by_validate() {
        // serde(transparent) admits an empty array; the boundary check
        // must catch it.
        let draft: ProjectDraft = serde_json::from_value(serde_json::json!({
            "title": "X",
            "description": "Y",
            "tech": [],
            "image": "https://example.com/x.jpg"
        }))
        .unwrap();
        assert_eq!(draft.validate().unwrap_err(), ValidationError::EmptyTechList);
    }

    proptest! {
        /// For any sequence of non-empty trimmed entries, joining for
        /// display and re-parsing reproduces the sequence element-wise.
        #[test]
        fn join_then_parse_round_trips(
            entries in proptest::collection::vec("[a-zA-Z0-9+#./ ]*[a-zA-Z0-9+#./]", 1..8)
        ) {
            let original = TechList::from_entries(&entries).unwrap();
            let reparsed = TechList::parse(&original.join_display()).unwrap();
            prop_assert_eq!(reparsed, original);
        }
    }
}
