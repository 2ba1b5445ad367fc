//! Document search: which sessions and notes contain a term.
//!
//! Exact, case-insensitive substring containment. One match per document,
//! reported in the order documents were supplied, notes last.

use log::debug;

use crate::types::{SearchMatch, SessionDocument};

/// Display name reported for a hit in the notes document.
pub const NOTES_MATCH_NAME: &str = "Notes";

/// Find the documents containing `term`.
///
/// # Arguments
///
/// * `term` - Literal search term; an empty term matches nothing
/// * `sessions` - Session documents in navigation order
/// * `notes_text` - The project notes, possibly empty
///
/// # Returns
///
/// One `SearchMatch` per matching document.
#[must_use]
pub fn search(term: &str, sessions: &[SessionDocument], notes_text: &str) -> Vec<SearchMatch> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();

    let mut matches: Vec<SearchMatch> = sessions
        .iter()
        .filter(|session| contains_folded(&session.content, &needle))
        .map(|session| SearchMatch::session(session.id.clone(), session.name.clone()))
        .collect();
    if contains_folded(notes_text, &needle) {
        matches.push(SearchMatch::notes());
    }

    debug!(
        "search '{term}': {} of {} documents matched",
        matches.len(),
        sessions.len() + 1
    );
    matches
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(folded_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("The DRAGON", "dragon"));
        assert!(!contains_folded("", "dragon"));
        assert!(!contains_folded("drag on", "dragon"));
    }
}
