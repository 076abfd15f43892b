//! Post-processing of the aggregated message list and run diagnostics.

use serde::Serialize;

use crate::Message;
use crate::error::LineErrorKind;

/// Sorts messages by timestamp, keeping the walk order for equal timestamps.
///
/// The archive walk order is deterministic but follows folder and file
/// names, so callers that want a timeline call this downstream.
pub fn sort_chronologically(messages: &mut [Message]) {
    messages.sort_by_key(|msg| msg.timestamp);
}

/// Tally of what a walk parsed and skipped.
///
/// Every skip is also logged; this is the summary of that trail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Partner folders visited
    pub folders: usize,
    /// Transcript files opened
    pub files: usize,
    /// Interior lines examined (header and footer excluded)
    pub lines: usize,
    /// Messages produced
    pub messages: usize,
    /// Lines failing the structural gate
    pub invalid_lines: usize,
    /// Lines missing the time, alias or content fragment
    pub missing_fields: usize,
    /// Lines with an unknown timestamp shape
    pub bad_timestamps: usize,
    /// Files that could not be read
    pub unreadable_files: usize,
    /// Files with a malformed name or location
    pub malformed_files: usize,
    /// Files ignored because of their extension
    pub ignored_files: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one skipped line.
    pub fn record_line_error(&mut self, kind: LineErrorKind) {
        match kind {
            LineErrorKind::StructurallyInvalidLine => self.invalid_lines += 1,
            LineErrorKind::MissingField(_) => self.missing_fields += 1,
            LineErrorKind::UnrecognizedTimestampFormat => self.bad_timestamps += 1,
        }
    }

    /// Total lines that did not produce a message.
    pub fn skipped_lines(&self) -> usize {
        self.invalid_lines + self.missing_fields + self.bad_timestamps
    }

    /// Total files that did not contribute (unreadable or malformed).
    pub fn failed_files(&self) -> usize {
        self.unreadable_files + self.malformed_files
    }

    /// Percentage of examined lines that became messages.
    pub fn salvage_ratio(&self) -> f64 {
        if self.lines == 0 {
            return 0.0;
        }
        self.messages as f64 / self.lines as f64 * 100.0
    }
}
