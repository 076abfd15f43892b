//! Archive walker: owner folder → partner folders → transcripts.
//!
//! ```text
//! icq/123456789/                      <- owner (the root handed to the walker)
//! ├── .system/                        <- Pidgin bookkeeping, never parsed
//! ├── 987654321/                      <- one folder per partner
//! │   ├── 2020-05-01.140510+0200CEST.html
//! │   └── 2020-05-02.090000+0200CEST.html
//! └── 555555.chat/                    <- group chat, skipped by default
//! ```
//!
//! Folders and files are visited in file-name order so the aggregated list is
//! reproducible across platforms.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::Message;
use crate::config::ArchiveConfig;
use crate::core::ParseStats;
use crate::error::{PidginError, Result};

use super::transcript::TranscriptParser;

/// Walks one owner's log folder and aggregates every transcript below it.
///
/// # Example
///
/// ```rust,no_run
/// use pidginpack::config::ArchiveConfig;
/// use pidginpack::parsers::ArchiveWalker;
/// use std::path::Path;
///
/// let walker = ArchiveWalker::with_config(ArchiveConfig::new().with_exclude_groups(false));
/// let messages = walker.walk(Path::new(".purple/logs/icq/123456789"))?;
/// # Ok::<(), pidginpack::PidginError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveWalker {
    config: ArchiveConfig,
    transcripts: TranscriptParser,
}

impl ArchiveWalker {
    /// Creates a walker with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a walker with custom configuration.
    pub fn with_config(config: ArchiveConfig) -> Self {
        Self {
            config,
            transcripts: TranscriptParser::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ArchiveConfig {
        &self.config
    }

    /// Parses every transcript of every partner below `root`.
    ///
    /// # Errors
    ///
    /// Returns [`PidginError::FolderEnumeration`] if `root` or a partner
    /// folder cannot be listed. Unreadable or misnamed transcripts are logged
    /// and skipped.
    pub fn walk(&self, root: &Path) -> Result<Vec<Message>> {
        self.walk_with_stats(root, &mut ParseStats::default())
    }

    /// Like [`walk`](Self::walk), tallying into `stats`.
    ///
    /// `root` is canonicalized first so relative roots such as `.` still name
    /// the owner.
    pub fn walk_with_stats(&self, root: &Path, stats: &mut ParseStats) -> Result<Vec<Message>> {
        let root = fs::canonicalize(root).map_err(|e| PidginError::folder_enumeration(root, e))?;
        let root = root.as_path();
        let partners = self.partner_folders(root)?;
        info!(
            partners = partners.len(),
            root = %root.display(),
            "found conversation partners"
        );

        let mut messages = Vec::new();
        for folder in &partners {
            stats.folders += 1;
            let before = messages.len();
            for file in self.transcript_files(folder, stats)? {
                debug!(path = %file.display(), "parsing transcript");
                match self.transcripts.parse_file_with_stats(&file, stats) {
                    Ok(parsed) => messages.extend(parsed),
                    Err(e) if e.is_file_level() => {
                        warn!(path = %file.display(), error = %e, "skipping transcript");
                    }
                    Err(e) => return Err(e),
                }
            }
            debug!(
                folder = %folder.display(),
                messages = messages.len() - before,
                "parsed partner folder"
            );
        }

        info!(messages = messages.len(), root = %root.display(), "parsed archive");
        Ok(messages)
    }

    /// Lists the partner folders directly below `root`, exclusions applied.
    pub fn partner_folders(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut folders = Vec::new();
        for entry in list_children(root) {
            let entry = entry.map_err(|e| PidginError::folder_enumeration(root, io::Error::from(e)))?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if self.config.is_excluded_folder(&name) {
                debug!(folder = %name, "excluding folder");
                continue;
            }
            folders.push(entry.into_path());
        }
        Ok(folders)
    }

    /// Lists the transcript files directly inside one partner folder.
    fn transcript_files(&self, folder: &Path, stats: &mut ParseStats) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in list_children(folder) {
            let entry =
                entry.map_err(|e| PidginError::folder_enumeration(folder, io::Error::from(e)))?;
            if entry.path().is_dir() {
                continue;
            }
            let path = entry.into_path();
            let extension = path.extension().and_then(|s| s.to_str());
            if !self.config.accepts_extension(extension) {
                debug!(path = %path.display(), "ignoring non-transcript file");
                stats.ignored_files += 1;
                continue;
            }
            files.push(path);
        }
        Ok(files)
    }
}

/// Immediate children of `dir`, sorted by name.
///
/// Links are not resolved while listing, so a dangling one surfaces later as
/// an unreadable transcript instead of failing the whole folder.
fn list_children(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const LINE: &str = r##"<font color="#16569E"><font size="2">(14:05:10)</font> <b>Me:</b></font> Hi<br/>"##;

    fn transcript() -> String {
        ["<html>", LINE, "</html>"].join("\n")
    }

    fn owner_with(partners: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        let owner = dir.path().join("me123");
        for partner in partners {
            let folder = owner.join(partner);
            fs::create_dir_all(&folder).unwrap();
            fs::write(folder.join("2020-05-01.140510+0200CEST.html"), transcript()).unwrap();
        }
        dir
    }

    #[test]
    fn test_partner_folders_excludes_system_and_groups() {
        let dir = owner_with(&["alice456", ".system", "12345.chat"]);
        let owner = dir.path().join("me123");

        let folders = ArchiveWalker::new().partner_folders(&owner).unwrap();
        let names: Vec<_> = folders
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["alice456"]);
    }

    #[test]
    fn test_groups_included_when_policy_disabled() {
        let dir = owner_with(&["alice456", "12345.chat"]);
        let owner = dir.path().join("me123");

        let walker = ArchiveWalker::with_config(ArchiveConfig::new().with_exclude_groups(false));
        let messages = walker.walk(&owner).unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().any(|m| m.partner_id == "12345.chat"));
    }

    #[test]
    fn test_walk_is_sorted_by_folder_name() {
        let dir = owner_with(&["zed", "amy", "mia"]);
        let owner = dir.path().join("me123");

        let messages = ArchiveWalker::new().walk(&owner).unwrap();
        let partners: Vec<_> = messages.iter().map(|m| m.partner_id.as_str()).collect();
        assert_eq!(partners, ["amy", "mia", "zed"]);
    }

    #[test]
    fn test_files_in_root_are_ignored() {
        let dir = owner_with(&["alice456"]);
        let owner = dir.path().join("me123");
        fs::write(owner.join("stray.html"), transcript()).unwrap();

        let messages = ArchiveWalker::new().walk(&owner).unwrap();
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_nested_folders_are_not_descended() {
        let dir = owner_with(&["alice456"]);
        let nested = dir.path().join("me123").join("alice456").join("old");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("2019-01-01.000000+0100CET.html"), transcript()).unwrap();

        let messages = ArchiveWalker::new().walk(&dir.path().join("me123")).unwrap();
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let dir = owner_with(&["alice456"]);
        let folder = dir.path().join("me123").join("alice456");
        fs::write(folder.join("garbage.html"), transcript()).unwrap();

        let mut stats = ParseStats::new();
        let messages = ArchiveWalker::new()
            .walk_with_stats(&dir.path().join("me123"), &mut stats)
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(stats.malformed_files, 1);
        assert_eq!(stats.files, 1);
    }

    #[test]
    fn test_non_html_files_are_ignored() {
        let dir = owner_with(&["alice456"]);
        let folder = dir.path().join("me123").join("alice456");
        fs::write(folder.join("2020-05-02.140510+0200CEST.txt"), "plain log").unwrap();

        let mut stats = ParseStats::new();
        ArchiveWalker::new()
            .walk_with_stats(&dir.path().join("me123"), &mut stats)
            .unwrap();
        assert_eq!(stats.ignored_files, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_link_is_unreadable_not_fatal() {
        let dir = owner_with(&["alice456"]);
        let folder = dir.path().join("me123").join("alice456");
        std::os::unix::fs::symlink(
            folder.join("gone.html"),
            folder.join("2020-05-02.140510+0200CEST.html"),
        )
        .unwrap();

        let mut stats = ParseStats::new();
        let messages = ArchiveWalker::new()
            .walk_with_stats(&dir.path().join("me123"), &mut stats)
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(stats.unreadable_files, 1);
        assert_eq!(stats.files, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_linked_partner_folder_is_walked() {
        let dir = owner_with(&["alice456"]);
        let elsewhere = dir.path().join("elsewhere");
        fs::create_dir_all(&elsewhere).unwrap();
        fs::write(elsewhere.join("2020-05-01.140510+0200CEST.html"), transcript()).unwrap();
        std::os::unix::fs::symlink(&elsewhere, dir.path().join("me123").join("bob789")).unwrap();

        let messages = ArchiveWalker::new().walk(&dir.path().join("me123")).unwrap();
        let partners: Vec<_> = messages.iter().map(|m| m.partner_id.as_str()).collect();
        assert_eq!(partners, ["alice456", "bob789"]);
    }

    #[test]
    fn test_root_with_relative_components_keeps_owner() {
        let dir = owner_with(&["alice456"]);
        let dotted = dir.path().join("me123").join("alice456").join("..");

        let messages = ArchiveWalker::new().walk(&dotted).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].author_id, "me123");
    }

    #[test]
    fn test_missing_root_is_enumeration_failure() {
        let dir = TempDir::new().unwrap();
        let err = ArchiveWalker::new()
            .walk(&dir.path().join("nope"))
            .unwrap_err();
        assert!(err.is_folder_enumeration());
    }
}
