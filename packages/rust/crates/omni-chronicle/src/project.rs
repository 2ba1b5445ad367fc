//! Project sources: where session and notes text comes from.
//!
//! The core only sees text. A `ProjectSource` supplies it; a failing source
//! degrades to empty input instead of failing the catalog or the search.

use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::aggregate::TagAggregator;
use crate::config::ChronicleConfig;
use crate::error::ChronicleError;
use crate::search::search;
use crate::types::{SearchMatch, SessionDocument, TagsForGame};

/// Directory below a project root holding one file per session.
pub const SESSIONS_DIR_NAME: &str = "sessions";
/// Notes file of a project root.
pub const NOTES_FILE_NAME: &str = "notes.md";

const SESSION_EXTENSIONS: &[&str] = &["md", "txt"];

/// Supplier of a project's documents.
pub trait ProjectSource {
    /// Sessions in navigation order (chronological).
    ///
    /// # Errors
    ///
    /// Returns an error when the sessions cannot be read.
    fn sessions(&self) -> Result<Vec<SessionDocument>, ChronicleError>;

    /// The notes text, empty when the project has no notes.
    ///
    /// # Errors
    ///
    /// Returns an error when the notes cannot be read.
    fn notes(&self) -> Result<String, ChronicleError>;
}

// ============================================================================
// In-memory source
// ============================================================================

/// Project held in memory, e.g. documents already loaded by the host.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProject {
    sessions: Vec<SessionDocument>,
    notes: String,
}

impl InMemoryProject {
    /// Create an empty project.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a session; order of calls is navigation order.
    #[must_use]
    pub fn with_session(mut self, session: SessionDocument) -> Self {
        self.sessions.push(session);
        self
    }

    /// Set the notes text.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl ProjectSource for InMemoryProject {
    fn sessions(&self) -> Result<Vec<SessionDocument>, ChronicleError> {
        Ok(self.sessions.clone())
    }

    fn notes(&self) -> Result<String, ChronicleError> {
        Ok(self.notes.clone())
    }
}

// ============================================================================
// Filesystem source
// ============================================================================

/// Project directory: `sessions/**/*.{md,txt}` plus `notes.md`.
///
/// Session id is the path relative to `sessions/` (forward slashes), the
/// name is the file stem. Sessions are ordered by id with digit runs compared
/// by value, so `9.md` lists before `10.md` and date-prefixed names list
/// chronologically. Unreadable files are skipped with a warning.
#[derive(Debug, Clone)]
pub struct FsProject {
    root: PathBuf,
}

impl FsProject {
    /// Open a project root.
    ///
    /// # Errors
    ///
    /// Returns `ChronicleError::NotADirectory` when `root` is not a directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, ChronicleError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ChronicleError::NotADirectory(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Project root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn sessions_dir(&self) -> PathBuf {
        self.root.join(SESSIONS_DIR_NAME)
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn is_session_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SESSION_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

fn session_id(path: &Path, sessions_dir: &Path) -> String {
    path.strip_prefix(sessions_dir)
        .unwrap_or(path)
        .components()
        .map(|component| component.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

fn read_session_text(path: &Path) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Skipping unreadable session {}: {e}", path.display());
            return None;
        }
    };
    match String::from_utf8(bytes) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("Session {} is not valid UTF-8, decoding lossily", path.display());
            Some(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Split an id into alternating digit / non-digit runs.
fn id_runs(id: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (index, ch) in id.char_indices() {
        let digit = ch.is_ascii_digit();
        if let Some(previous) = current
            && previous != digit
        {
            runs.push((previous, &id[start..index]));
            start = index;
        }
        current = Some(digit);
    }
    if let Some(previous) = current {
        runs.push((previous, &id[start..]));
    }
    runs
}

fn compare_session_ids(a: &str, b: &str) -> Ordering {
    let (runs_a, runs_b) = (id_runs(a), id_runs(b));
    for (left, right) in runs_a.iter().zip(&runs_b) {
        let ordering = match (left, right) {
            ((true, digits_a), (true, digits_b)) => {
                let value_a = digits_a.trim_start_matches('0');
                let value_b = digits_b.trim_start_matches('0');
                value_a
                    .len()
                    .cmp(&value_b.len())
                    .then_with(|| value_a.cmp(value_b))
            }
            ((_, text_a), (_, text_b)) => text_a.cmp(text_b),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    runs_a.len().cmp(&runs_b.len()).then_with(|| a.cmp(b))
}

impl ProjectSource for FsProject {
    fn sessions(&self) -> Result<Vec<SessionDocument>, ChronicleError> {
        let dir = self.sessions_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut sessions = Vec::new();
        let walker = WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0 || !is_hidden(&entry.file_name().to_string_lossy())
            });
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping session entry: {e}");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_session_file(path) {
                continue;
            }
            let Some(content) = read_session_text(path) else {
                continue;
            };
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default();
            sessions.push(SessionDocument::new(session_id(path, &dir), name, content));
        }
        sessions.sort_by(|a, b| compare_session_ids(&a.id, &b.id));
        Ok(sessions)
    }

    fn notes(&self) -> Result<String, ChronicleError> {
        let path = self.root.join(NOTES_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(ChronicleError::io(path, e)),
        }
    }
}

// ============================================================================
// Facade
// ============================================================================

fn sessions_or_empty(source: &impl ProjectSource) -> Vec<SessionDocument> {
    source.sessions().unwrap_or_else(|e| {
        warn!("Failed to load sessions, continuing without them: {e}");
        Vec::new()
    })
}

fn notes_or_empty(source: &impl ProjectSource) -> String {
    source.notes().unwrap_or_else(|e| {
        warn!("Failed to load notes, continuing without them: {e}");
        String::new()
    })
}

/// Tag catalog of a project.
#[must_use]
pub fn tags_for_project(source: &impl ProjectSource, config: &ChronicleConfig) -> TagsForGame {
    let sessions = sessions_or_empty(source);
    let notes = notes_or_empty(source);
    let texts: Vec<&str> = sessions.iter().map(|s| s.content.as_str()).collect();
    TagAggregator::new(&config.tag_types, &config.exclude_words).aggregate(&texts, &notes)
}

/// Documents of a project containing `term`.
#[must_use]
pub fn search_project(term: &str, source: &impl ProjectSource) -> Vec<SearchMatch> {
    if term.is_empty() {
        return Vec::new();
    }
    let sessions = sessions_or_empty(source);
    let notes = notes_or_empty(source);
    search(term, &sessions, &notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_session_file() {
        assert!(is_session_file(Path::new("a/2024-01-01.md")));
        assert!(is_session_file(Path::new("log.TXT")));
        assert!(!is_session_file(Path::new("image.png")));
        assert!(!is_session_file(Path::new("README")));
    }

    #[test]
    fn test_compare_session_ids_by_number_value() {
        let mut ids = vec!["10.md", "9.md", "session-2.md", "session-10.md", "01.md"];
        ids.sort_by(|a, b| compare_session_ids(a, b));
        assert_eq!(
            ids,
            vec!["01.md", "9.md", "10.md", "session-2.md", "session-10.md"]
        );
    }

    #[test]
    fn test_compare_session_ids_keeps_dates_chronological() {
        assert_eq!(
            compare_session_ids("2024-01-15.md", "2024-02-01.md"),
            Ordering::Less
        );
        assert_eq!(
            compare_session_ids("arc-2/1.md", "arc-10/1.md"),
            Ordering::Less
        );
    }

    #[test]
    fn test_session_id_uses_forward_slashes() {
        let dir = Path::new("/p/sessions");
        let path = dir.join("arc-1").join("01.md");
        assert_eq!(session_id(&path, dir), "arc-1/01.md");
    }
}
