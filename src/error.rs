//! Error types for pidginpack.
//!
//! Errors come in two tiers:
//!
//! - [`PidginError`] is returned from fallible operations. Some variants are
//!   recovered locally (an unreadable or misnamed transcript is logged and
//!   skipped by the archive walker), others abort the whole run
//!   ([`PidginError::FolderEnumeration`]).
//! - [`LineError`] describes why one transcript line did not produce a
//!   message. Line errors never escape a file parse; they are logged and
//!   tallied in [`ParseStats`](crate::core::ParseStats).

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized [`Result`] type for pidginpack operations.
///
/// # Example
///
/// ```rust
/// use pidginpack::error::Result;
/// use pidginpack::Message;
///
/// fn collect() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, PidginError>;

/// The error type for all pidginpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PidginError {
    /// A generic I/O error, typically while writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A transcript file could not be opened or decoded.
    #[error("Cannot read transcript {}: {source}", path.display())]
    UnreadableFile {
        /// The transcript that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The transcript file name does not follow `yyyy-MM-dd.HHmmss±hhmmZONE.html`.
    #[error("Malformed transcript file name {}: {reason}", path.display())]
    MalformedFilename {
        /// The offending path
        path: PathBuf,
        /// What did not match
        reason: String,
    },

    /// The transcript is not nested `<owner>/<partner>/<file>`.
    #[error("Transcript {} is not nested below an owner and a partner folder", path.display())]
    MalformedPathHierarchy {
        /// The offending path
        path: PathBuf,
    },

    /// The archive root or a partner folder could not be listed.
    #[error("Cannot list folder {}: {source}", path.display())]
    FolderEnumeration {
        /// The folder that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Invalid date in a filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown output format or similar configuration mistake.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being configured
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PidginError {
    /// Creates an unreadable-file error.
    pub fn unreadable_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PidginError::UnreadableFile {
            path: path.into(),
            source,
        }
    }

    /// Creates a malformed file name error.
    pub fn malformed_filename(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        PidginError::MalformedFilename {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a malformed path hierarchy error.
    pub fn malformed_hierarchy(path: impl Into<PathBuf>) -> Self {
        PidginError::MalformedPathHierarchy { path: path.into() }
    }

    /// Creates a folder enumeration error.
    pub fn folder_enumeration(path: impl Into<PathBuf>, source: io::Error) -> Self {
        PidginError::FolderEnumeration {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        PidginError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        PidginError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if a single transcript was rejected but the run can go on.
    pub fn is_file_level(&self) -> bool {
        matches!(
            self,
            PidginError::UnreadableFile { .. }
                | PidginError::MalformedFilename { .. }
                | PidginError::MalformedPathHierarchy { .. }
        )
    }

    /// Returns `true` if this is a folder enumeration failure.
    pub fn is_folder_enumeration(&self) -> bool {
        matches!(self, PidginError::FolderEnumeration { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, PidginError::InvalidDate { .. })
    }
}

/// The three fragments every message line must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// `(HH:MM:SS)` inside `<font size="2">`
    Time,
    /// Sender alias inside `<b>`
    Alias,
    /// Body after the alias and the closing font tag
    Content,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Time => write!(f, "time"),
            Field::Alias => write!(f, "alias"),
            Field::Content => write!(f, "content"),
        }
    }
}

/// Why a line was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum LineErrorKind {
    /// The line failed the four-marker structural gate.
    #[error("line is not a well-formed message entry")]
    StructurallyInvalidLine,

    /// A required fragment was absent or blank.
    #[error("missing {0} fragment")]
    MissingField(Field),

    /// The time token matched neither `HH:MM:SS` nor `DD.MM.YYYY HH:MM:SS`.
    #[error("unrecognized timestamp format")]
    UnrecognizedTimestampFormat,
}

/// A skipped line together with the reason.
///
/// The raw line is kept for the diagnostic trail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {line}")]
pub struct LineError {
    /// Why the line was rejected
    pub kind: LineErrorKind,
    /// The raw line
    pub line: String,
}

impl LineError {
    pub fn new(kind: LineErrorKind, line: impl Into<String>) -> Self {
        Self {
            kind,
            line: line.into(),
        }
    }
}
