//! Type definitions for tags, catalogs and search results.
//!
//! Core data structures shared by the parser, aggregator and search.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregate::ClosingWords;

// ============================================================================
// Tag Notation
// ============================================================================

/// Deduplication key of a tag: type code plus identifier.
///
/// Kept as two fields so that a type code containing `:` can never collide
/// with a different (type, identifier) split of the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TagKey {
    /// Category code, e.g. `N` or `Location`
    pub type_code: String,
    /// Entity name, e.g. `Bartender`
    pub identifier: String,
}

impl TagKey {
    /// Create a new tag key.
    #[must_use]
    pub fn new(type_code: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            type_code: type_code.into(),
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_code, self.identifier)
    }
}

/// One recognized bracket token in source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOccurrence {
    /// Category code before the `:`
    pub type_code: String,
    /// Entity name between `:` and `|`
    pub identifier: String,
    /// Trailing content after `|`, empty when absent
    pub data: String,
    /// The full token, verbatim
    pub raw_text: String,
}

impl TagOccurrence {
    /// Key used to deduplicate occurrences of the same entity.
    #[must_use]
    pub fn key(&self) -> TagKey {
        TagKey::new(self.type_code.clone(), self.identifier.clone())
    }

    /// `;`-separated sub-fields of `data`, trimmed, empty fields dropped.
    #[must_use]
    pub fn data_fields(&self) -> Vec<&str> {
        self.data
            .split(';')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect()
    }

    /// Whether `data` contains any of `words`, ignoring case.
    #[must_use]
    pub fn is_closed_by<S: AsRef<str>>(&self, words: &[S]) -> bool {
        ClosingWords::new(words).closes(self)
    }

    /// Build a canonical token: `[T:Id | data]`, or `[T:Id]` without data.
    #[must_use]
    pub fn format(type_code: &str, identifier: &str, data: &str) -> String {
        let data = data.trim();
        if data.is_empty() {
            format!("[{}:{}]", type_code.trim(), identifier.trim())
        } else {
            format!("[{}:{} | {}]", type_code.trim(), identifier.trim(), data)
        }
    }
}

// ============================================================================
// Tag Catalog
// ============================================================================

/// Static tag definition supplied by configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredTagType {
    /// Display label, e.g. `NPC`
    pub label: String,
    /// Insertable template, e.g. `[N:Name | Description]`
    pub template: String,
}

impl ConfiguredTagType {
    /// Create a configured tag type.
    #[must_use]
    pub fn new(label: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            template: template.into(),
        }
    }
}

/// Display entry of the tag catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    /// Shown to the user
    pub label: String,
    /// Inserted into the document when picked
    pub template: String,
}

impl TagEntry {
    /// Entry for a discovered tag: labelled by its key, templated by its raw token.
    #[must_use]
    pub fn from_occurrence(occurrence: &TagOccurrence) -> Self {
        Self {
            label: occurrence.key().to_string(),
            template: occurrence.raw_text.clone(),
        }
    }
}

impl From<&ConfiguredTagType> for TagEntry {
    fn from(value: &ConfiguredTagType) -> Self {
        Self {
            label: value.label.clone(),
            template: value.template.clone(),
        }
    }
}

/// Tag catalog of one project, partitioned by origin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsForGame {
    /// Configured tag types, sorted by label
    pub config: Vec<TagEntry>,
    /// Open tags found across the session documents
    pub active: Vec<TagEntry>,
    /// Open tags found in the notes document
    pub notes: Vec<TagEntry>,
}

impl TagsForGame {
    /// True when all three partitions are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.config.is_empty() && self.active.is_empty() && self.notes.is_empty()
    }
}

// ============================================================================
// Documents & Search Results
// ============================================================================

/// One session as supplied by the session provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDocument {
    /// Stable identity used for navigation
    pub id: String,
    /// Display name
    pub name: String,
    /// Narrative text
    pub content: String,
}

impl SessionDocument {
    /// Create a session document.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A document that contains the search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// True when the hit is the notes document
    pub is_notes: bool,
    /// Session identity, `None` for the notes document
    pub session_id: Option<String>,
    /// Session name, or `Notes`
    pub name: String,
}

impl SearchMatch {
    /// Match in a session document.
    #[must_use]
    pub fn session(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_notes: false,
            session_id: Some(id.into()),
            name: name.into(),
        }
    }

    /// Match in the notes document.
    #[must_use]
    pub fn notes() -> Self {
        Self {
            is_notes: true,
            session_id: None,
            name: crate::search::NOTES_MATCH_NAME.to_string(),
        }
    }
}
