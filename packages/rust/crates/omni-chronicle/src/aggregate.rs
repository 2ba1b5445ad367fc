//! Tag aggregation: dedup by key, closing keywords, per-scope catalogs.
//!
//! Sessions and notes are reduced independently. Within one scope the last
//! occurrence of a key decides its status and template; entries keep the
//! position where their key was first seen.

use std::collections::HashMap;

use log::debug;

use crate::notation::parse_tags;
use crate::types::{ConfiguredTagType, TagEntry, TagKey, TagOccurrence, TagsForGame};

/// Lowercased, non-blank closing keywords, otherwise kept as given.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClosingWords {
    words: Vec<String>,
}

impl ClosingWords {
    pub(crate) fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let words = words
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|word| !word.trim().is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub(crate) fn closes(&self, occurrence: &TagOccurrence) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let data = occurrence.data.to_lowercase();
        self.words.iter().any(|word| data.contains(word.as_str()))
    }
}

/// Reusable aggregator bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct TagAggregator {
    config: Vec<TagEntry>,
    closing: ClosingWords,
}

impl TagAggregator {
    /// Create an aggregator from configured types and closing keywords.
    #[must_use]
    pub fn new<W: AsRef<str>>(config_types: &[ConfiguredTagType], exclude_words: &[W]) -> Self {
        Self {
            config: configured_entries(config_types),
            closing: ClosingWords::new(exclude_words),
        }
    }

    /// Build the catalog for one project.
    ///
    /// `session_texts` must be in the caller's fixed order (e.g. chronological).
    #[must_use]
    pub fn aggregate<S: AsRef<str>>(&self, session_texts: &[S], notes_text: &str) -> TagsForGame {
        let active = reduce_scope(
            session_texts.iter().map(AsRef::<str>::as_ref),
            &self.closing,
        );
        let notes = reduce_scope(std::iter::once(notes_text), &self.closing);
        debug!(
            "tag catalog: {} config, {} active from {} sessions, {} notes",
            self.config.len(),
            active.len(),
            session_texts.len(),
            notes.len()
        );
        TagsForGame {
            config: self.config.clone(),
            active,
            notes,
        }
    }
}

fn reduce_scope<'a>(texts: impl Iterator<Item = &'a str>, closing: &ClosingWords) -> Vec<TagEntry> {
    let mut slots: HashMap<TagKey, usize> = HashMap::new();
    let mut latest: Vec<(TagOccurrence, bool)> = Vec::new();
    let mut seen = 0usize;

    for text in texts {
        for occurrence in parse_tags(text) {
            seen += 1;
            let closed = closing.closes(&occurrence);
            let key = occurrence.key();
            if let Some(&slot) = slots.get(&key) {
                latest[slot] = (occurrence, closed);
            } else {
                slots.insert(key, latest.len());
                latest.push((occurrence, closed));
            }
        }
    }

    let entries: Vec<TagEntry> = latest
        .iter()
        .filter(|(_, closed)| !closed)
        .map(|(occurrence, _)| TagEntry::from_occurrence(occurrence))
        .collect();
    debug!(
        "reduced {seen} occurrences to {} keys, {} open",
        latest.len(),
        entries.len()
    );
    entries
}

/// Reduce the occurrences of one scope to its open entries.
///
/// # Arguments
///
/// * `texts` - Documents of the scope, scanned in order as if concatenated
/// * `exclude_words` - Closing keywords, matched case-insensitively in `data`
#[must_use]
pub fn reduce_open_tags<S: AsRef<str>, W: AsRef<str>>(
    texts: &[S],
    exclude_words: &[W],
) -> Vec<TagEntry> {
    reduce_scope(
        texts.iter().map(AsRef::<str>::as_ref),
        &ClosingWords::new(exclude_words),
    )
}

/// Configured types as catalog entries, sorted alphabetically by label.
#[must_use]
pub fn configured_entries(config_types: &[ConfiguredTagType]) -> Vec<TagEntry> {
    let mut entries: Vec<TagEntry> = config_types.iter().map(TagEntry::from).collect();
    entries.sort_by(|a, b| {
        a.label
            .to_lowercase()
            .cmp(&b.label.to_lowercase())
            .then_with(|| a.label.cmp(&b.label))
    });
    entries
}

/// Build the full tag catalog of a project.
///
/// # Arguments
///
/// * `config_types` - Configured tag types (the `config` partition)
/// * `exclude_words` - Closing keywords
/// * `session_texts` - Session contents in a fixed order
/// * `notes_text` - The project notes, possibly empty
#[must_use]
pub fn aggregate<W: AsRef<str>, S: AsRef<str>>(
    config_types: &[ConfiguredTagType],
    exclude_words: &[W],
    session_texts: &[S],
    notes_text: &str,
) -> TagsForGame {
    TagAggregator::new(config_types, exclude_words).aggregate(session_texts, notes_text)
}
