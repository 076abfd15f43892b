//! File- and archive-level parsers.
//!
//! - [`TranscriptParser`] - one HTML transcript to messages
//! - [`ArchiveWalker`] - an owner folder to messages, with folder exclusions
//! - [`IcqParser`] - the [`Parser`](crate::parser::Parser) implementation for ICQ logs
//!
//! # Example
//!
//! ```rust,no_run
//! use pidginpack::parsers::ArchiveWalker;
//! use std::path::Path;
//!
//! let messages = ArchiveWalker::new().walk(Path::new(".purple/logs/icq/123456789"))?;
//! # Ok::<(), pidginpack::PidginError>(())
//! ```

mod archive;
mod icq;
mod transcript;

pub use archive::ArchiveWalker;
pub use icq::IcqParser;
pub use transcript::{TranscriptParser, read_transcript};
