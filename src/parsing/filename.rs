//! Identity and date recovery from a transcript's location.
//!
//! Pidgin stores a conversation as
//! `<owner>/<partner>/<yyyy-MM-dd>.<HHmmss><±hhmm><zone>.html`, for example
//! `123456789/987654321/2020-05-01.140510+0200CEST.html`. Nothing in the file
//! body names the two accounts, so the folder names are the only source of
//! stable identifiers.

use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate};
use regex::Regex;

use crate::error::{PidginError, Result};

// The zone name never contains a dot, so whatever follows one is the extension.
static FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})\.(\d{6})([+-]\d{4})([^.]+)(?:\..*)?$")
        .expect("valid file name regex")
});

/// Everything a transcript's path says about its conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptPath {
    /// Account that owns the log archive (grandparent folder).
    pub owner_id: String,
    /// Account on the other side (parent folder).
    pub partner_id: String,
    /// Calendar date the log was opened on, in the log's own offset.
    pub date: NaiveDate,
    /// Full opening instant encoded in the file name.
    ///
    /// Only [`date`](Self::date) feeds into messages; the time of day is kept
    /// for callers that want it.
    pub opened_at: DateTime<FixedOffset>,
    /// Time zone abbreviation trailing the offset, e.g. `CEST`.
    pub zone: String,
}

impl TranscriptPath {
    /// Builds a context directly, bypassing path inspection.
    ///
    /// Used when parsing transcript text that did not come from disk.
    pub fn new(owner_id: impl Into<String>, partner_id: impl Into<String>, date: NaiveDate) -> Self {
        let opened_at = date
            .and_hms_opt(0, 0, 0)
            .unwrap_or_default()
            .and_utc()
            .fixed_offset();
        Self {
            owner_id: owner_id.into(),
            partner_id: partner_id.into(),
            date,
            opened_at,
            zone: String::from("UTC"),
        }
    }

    /// Recovers owner, partner and date from a transcript path.
    ///
    /// # Errors
    ///
    /// - [`PidginError::MalformedPathHierarchy`] if the file is not nested
    ///   two folders deep.
    /// - [`PidginError::MalformedFilename`] if the name does not follow
    ///   Pidgin's date pattern.
    ///
    /// ```rust
    /// use pidginpack::parsing::filename::TranscriptPath;
    /// use std::path::Path;
    ///
    /// let ctx = TranscriptPath::from_path(Path::new(
    ///     "icq/me123/alice456/2020-05-01.140510+0200CEST.html",
    /// ))?;
    /// assert_eq!(ctx.owner_id, "me123");
    /// assert_eq!(ctx.partner_id, "alice456");
    /// assert_eq!(ctx.date.to_string(), "2020-05-01");
    /// # Ok::<(), pidginpack::PidginError>(())
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let partner_dir = path.parent();
        let owner_dir = partner_dir.and_then(Path::parent);

        let partner_id = partner_dir.and_then(folder_name);
        let owner_id = owner_dir.and_then(folder_name);
        let (Some(owner_id), Some(partner_id)) = (owner_id, partner_id) else {
            return Err(PidginError::malformed_hierarchy(path));
        };

        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| PidginError::malformed_filename(path, "file name is not valid UTF-8"))?;
        let (opened_at, zone) = parse_file_name(name)
            .ok_or_else(|| {
                PidginError::malformed_filename(
                    path,
                    format!("'{name}' does not match yyyy-MM-dd.HHmmss±hhmmZONE"),
                )
            })?;

        Ok(Self {
            owner_id: owner_id.to_string(),
            partner_id: partner_id.to_string(),
            date: opened_at.date_naive(),
            opened_at,
            zone,
        })
    }
}

fn folder_name(dir: &Path) -> Option<&str> {
    dir.file_name().and_then(|s| s.to_str()).filter(|s| !s.is_empty())
}

/// Parses `2020-05-01.140510+0200CEST[.html]` into the opening instant and
/// zone name. Any extension is ignored.
fn parse_file_name(name: &str) -> Option<(DateTime<FixedOffset>, String)> {
    let caps = FILE_NAME.captures(name)?;
    let stamp = format!("{}.{}{}", &caps[1], &caps[2], &caps[3]);
    let opened_at = DateTime::parse_from_str(&stamp, "%Y-%m-%d.%H%M%S%z").ok()?;
    Some((opened_at, caps[4].to_string()))
}
