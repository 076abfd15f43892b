//! # pidginpack
//!
//! Turns a Pidgin instant-messaging log archive into one flat, machine
//! readable list of messages.
//!
//! ## Overview
//!
//! Pidgin writes one HTML transcript per conversation session:
//!
//! ```text
//! .purple/logs/icq/<owner>/<partner>/2020-05-01.140510+0200CEST.html
//! ```
//!
//! Every message is a single line whose font color tells whether the owner
//! sent it. pidginpack walks an owner's folder, parses each transcript line by
//! line, skips what it cannot understand (logging why), and exports the rest
//! as CSV, JSON or JSON Lines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pidginpack::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let parser = create_parser(Service::Icq);
//!     let mut messages = parser.parse(Path::new(".purple/logs/icq/123456789"))?;
//!
//!     sort_chronologically(&mut messages);
//!     write_csv(&messages, Path::new("export"))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`Parser`](parser::Parser) trait, [`Service`](parser::Service), [`create_parser`](parser::create_parser)
//! - [`parsers`] - [`IcqParser`](parsers::IcqParser), [`ArchiveWalker`](parsers::ArchiveWalker), [`TranscriptParser`](parsers::TranscriptParser)
//! - [`parsing`] - line-level building blocks (markup fragments, timestamps, file names)
//! - [`config`] - [`ArchiveConfig`](config::ArchiveConfig)
//! - [`core`] - statistics, filtering and export sinks
//! - [`format`] - [`OutputFormat`](format::OutputFormat), [`write_to_format`](format::write_to_format)
//! - [`cli`] - clap argument types (feature `cli`)
//! - [`error`] - [`PidginError`], [`Result`], [`LineError`](error::LineError)
//! - [`prelude`] - Convenient re-exports
//!
//! ## Logging
//!
//! The library reports every skipped line and file through [`tracing`]; it
//! never installs a subscriber. The `pidginpack` binary does.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;

pub use error::{PidginError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use pidginpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{LineError, LineErrorKind, PidginError, Result};

    pub use crate::parser::{Parser, Service, create_parser};

    pub use crate::config::ArchiveConfig;

    pub use crate::core::filter::{FilterConfig, apply_filters};

    pub use crate::core::processor::{ParseStats, sort_chronologically};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, write_to_format};

    pub use crate::parsers::{ArchiveWalker, IcqParser, TranscriptParser};
}
