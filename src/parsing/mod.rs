//! Line- and path-level parsing primitives.
//!
//! These are pure functions shared by the transcript and archive parsers in
//! [`crate::parsers`]:
//!
//! - [`markup`] - marker constants, fragment extraction, the structural gate
//! - [`timestamp`] - the two timestamp shapes Pidgin writes
//! - [`line`] - one line to one [`Message`](crate::Message)
//! - [`filename`] - owner, partner and date from a transcript path

pub mod filename;
pub mod line;
pub mod markup;
pub mod timestamp;

// Re-export commonly used items
pub use filename::TranscriptPath;
pub use line::parse_line;
pub use markup::{extract_content, extract_fragment, validate_line};
pub use timestamp::{TimeToken, resolve_timestamp};
