//! Chronicle Config - Tag types and closing keywords from `chronicle.yaml`.
//!
//! ```yaml
//! tag_types:
//!   - label: NPC
//!     template: "[N:Name | Description]"
//! exclude_words: [closed, dead]
//! ```
//!
//! Keys missing from the file keep their built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ChronicleError;
use crate::types::{ConfiguredTagType, TagOccurrence};

/// Config file looked up in a project root.
pub const CONFIG_FILE_NAME: &str = "chronicle.yaml";

const DEFAULT_TAG_TYPES: &[(&str, &str, &str)] = &[
    ("NPC", "N", "Description"),
    ("Location", "L", "Description"),
    ("Item", "I", "Description"),
    ("Quest", "Q", "Objective"),
    ("Faction", "F", "Stance"),
    ("Event", "E", "Outcome"),
];

const DEFAULT_EXCLUDE_WORDS: &[&str] = &["closed"];

/// Tag catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChronicleConfig {
    /// Configured tag types, shown in the `config` partition
    pub tag_types: Vec<ConfiguredTagType>,
    /// Closing keywords, matched case-insensitively in a tag's data
    pub exclude_words: Vec<String>,
}

impl Default for ChronicleConfig {
    fn default() -> Self {
        Self {
            tag_types: DEFAULT_TAG_TYPES
                .iter()
                .map(|(label, code, field)| {
                    ConfiguredTagType::new(*label, TagOccurrence::format(code, "Name", field))
                })
                .collect(),
            exclude_words: DEFAULT_EXCLUDE_WORDS
                .iter()
                .map(std::string::ToString::to_string)
                .collect(),
        }
    }
}

impl ChronicleConfig {
    /// Parse configuration from YAML text; an empty document yields defaults.
    ///
    /// # Errors
    ///
    /// Returns the YAML error when the text does not describe a config.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str::<Option<Self>>(content)?.unwrap_or_default())
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ChronicleError::Io` when the file cannot be read and
    /// `ChronicleError::Config` when it is not valid config YAML.
    pub fn load(path: &Path) -> Result<Self, ChronicleError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ChronicleError::io(path, source))?;
        Self::from_yaml_str(&content).map_err(|source| ChronicleError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::warn!("Config file not found: {}", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {e}");
                Self::default()
            }
        }
    }

    /// Config file of a project root, if present.
    #[must_use]
    pub fn discover(root: &Path) -> Option<PathBuf> {
        let candidate = root.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }
}
