//! Everything that happens after transcripts are parsed.
//!
//! This module contains:
//! - [`processor`] - Run statistics and chronological ordering
//! - [`filter`] - Message filtering by date and partner
//! - [`output`] - Export sinks (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use pidginpack::core::{
//!     FilterConfig, ParseStats,
//!     apply_filters, sort_chronologically,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod output;
pub mod processor;

pub use filter::{FilterConfig, apply_filters};

pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

pub use processor::{ParseStats, sort_chronologically};
