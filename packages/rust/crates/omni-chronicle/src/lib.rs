//! omni-chronicle - Inline tag catalog and document search for session logs.
//!
//! Sessions and project notes are free-form prose. Entities worth tracking are
//! marked inline with a bracket tag:
//!
//! ```text
//! [N:Bartender | Friendly; Knowledgeable]
//!  ^ ^          ^
//!  | identifier data (`;`-separated sub-fields)
//!  type code
//! ```
//!
//! Features:
//! - Linear scan of bracket tags with verbatim raw tokens for re-insertion
//! - Per-scope catalog: configured, active (sessions) and notes tags
//! - Closing keywords hide finished entities from the catalog
//! - Case-insensitive document search over sessions and notes
//!
//! # Architecture
//!
//! ```text
//! omni-chronicle/src/
//! ├── lib.rs       # Re-exports (this file)
//! ├── error.rs     # ChronicleError
//! ├── types.rs     # TagOccurrence, TagKey, TagEntry, TagsForGame, SearchMatch
//! ├── notation.rs  # Bracket tag parser
//! ├── aggregate.rs # TagAggregator, dedup + closing rules
//! ├── search.rs    # Document search
//! ├── config.rs    # ChronicleConfig (YAML)
//! ├── project.rs   # ProjectSource providers (in-memory, filesystem)
//! └── bin/chronicle.rs
//! ```
//!
//! # Example
//!
//! ```rust
//! use omni_chronicle::{ChronicleConfig, TagAggregator, search};
//!
//! let config = ChronicleConfig::default();
//! let aggregator = TagAggregator::new(&config.tag_types, &config.exclude_words);
//! let tags = aggregator.aggregate(&["[N:Guard | Alert]"], "");
//! assert_eq!(tags.active[0].label, "N:Guard");
//!
//! let matches = search("guard", &[], "The guard sleeps.");
//! assert!(matches[0].is_notes);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod aggregate;
mod config;
mod error;
mod notation;
mod project;
mod search;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use aggregate::{TagAggregator, aggregate, configured_entries, reduce_open_tags};
pub use config::{CONFIG_FILE_NAME, ChronicleConfig};
pub use error::ChronicleError;
pub use notation::{count_tags, is_valid_tag, parse_tag, parse_tags};
pub use project::{
    FsProject, InMemoryProject, NOTES_FILE_NAME, ProjectSource, SESSIONS_DIR_NAME,
    search_project, tags_for_project,
};
pub use search::{NOTES_MATCH_NAME, search};
pub use types::{
    ConfiguredTagType, SearchMatch, SessionDocument, TagEntry, TagKey, TagOccurrence, TagsForGame,
};
