//! Configuration for walking a Pidgin log archive.
//!
//! # Example
//!
//! ```rust
//! use pidginpack::config::ArchiveConfig;
//! use pidginpack::parsers::IcqParser;
//!
//! let config = ArchiveConfig::new().with_exclude_groups(false);
//! let parser = IcqParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Folder Pidgin keeps its own bookkeeping logs in.
pub const SYSTEM_FOLDER: &str = ".system";

/// Suffix Pidgin appends to multi-user chat folders.
pub const GROUP_CHAT_SUFFIX: &str = ".chat";

/// Extension of HTML transcripts.
pub const TRANSCRIPT_EXTENSION: &str = "html";

/// Controls which folders and files of an archive are parsed.
///
/// ```rust
/// use pidginpack::config::ArchiveConfig;
///
/// let config = ArchiveConfig::default();
/// assert!(config.exclude_groups);
/// assert!(config.is_excluded_folder(".system"));
/// assert!(config.is_excluded_folder("12345.chat"));
/// assert!(!config.is_excluded_folder("987654"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Skip group conversations (folders ending in `group_suffix`) (default: true)
    pub exclude_groups: bool,

    /// Folder name that is never a conversation partner (default: `.system`)
    pub system_folder: String,

    /// Suffix marking a group conversation folder (default: `.chat`)
    pub group_suffix: String,

    /// Only files with this extension are parsed; `None` parses every file
    /// (default: `html`)
    pub transcript_extension: Option<String>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            exclude_groups: true,
            system_folder: SYSTEM_FOLDER.to_string(),
            group_suffix: GROUP_CHAT_SUFFIX.to_string(),
            transcript_extension: Some(TRANSCRIPT_EXTENSION.to_string()),
        }
    }
}

impl ArchiveConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables skipping group conversations.
    #[must_use]
    pub fn with_exclude_groups(mut self, exclude: bool) -> Self {
        self.exclude_groups = exclude;
        self
    }

    /// Sets the reserved system folder name.
    #[must_use]
    pub fn with_system_folder(mut self, name: impl Into<String>) -> Self {
        self.system_folder = name.into();
        self
    }

    /// Sets the group conversation suffix.
    #[must_use]
    pub fn with_group_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.group_suffix = suffix.into();
        self
    }

    /// Restricts parsing to one file extension, or lifts the restriction with `None`.
    #[must_use]
    pub fn with_transcript_extension(mut self, extension: Option<&str>) -> Self {
        self.transcript_extension = extension.map(str::to_string);
        self
    }

    /// Returns `true` if a partner folder with this name must be skipped.
    pub fn is_excluded_folder(&self, name: &str) -> bool {
        if name == self.system_folder {
            return true;
        }
        self.exclude_groups && name.ends_with(&self.group_suffix)
    }

    /// Returns `true` if a file with this extension should be parsed.
    pub fn accepts_extension(&self, extension: Option<&str>) -> bool {
        match (&self.transcript_extension, extension) {
            (None, _) => true,
            (Some(wanted), Some(ext)) => wanted.eq_ignore_ascii_case(ext),
            (Some(_), None) => false,
        }
    }
}
