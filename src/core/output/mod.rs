//! Export sinks for the aggregated message list.
//!
//! - [`write_csv`] / [`to_csv`] - semicolon CSV with a BOM header, the
//!   archive's canonical export - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires
//!   `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line - requires
//!   `json-output` feature
//!
//! File writers take an output *folder* and always write
//! `aggregated-messages.<ext>` inside it, creating the folder if needed.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> pidginpack::Result<()> {
//! use pidginpack::core::output::{to_csv, write_csv, write_jsonl};
//! use pidginpack::parsers::IcqParser;
//! use pidginpack::parser::Parser;
//! use std::path::Path;
//!
//! let messages = IcqParser::new().parse(Path::new("logs/icq/123456789"))?;
//!
//! let csv_path = write_csv(&messages, Path::new("out"))?;
//! write_jsonl(&messages, Path::new("out"))?;
//!
//! let csv_string = to_csv(&messages)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use std::path::{Path, PathBuf};

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// File stem shared by every sink.
pub const OUTPUT_FILE_STEM: &str = "aggregated-messages";

/// Path of the export file for `extension` inside `out_dir`.
///
/// ```rust
/// use pidginpack::core::output::output_path;
/// use std::path::Path;
///
/// let path = output_path(Path::new("out"), "csv");
/// assert_eq!(path, Path::new("out/aggregated-messages.csv"));
/// ```
pub fn output_path(out_dir: &Path, extension: &str) -> PathBuf {
    out_dir.join(format!("{OUTPUT_FILE_STEM}.{extension}"))
}

/// Creates `out_dir` if missing and writes `contents` to the export file.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
fn write_output(out_dir: &Path, extension: &str, contents: &str) -> crate::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    let path = output_path(out_dir, extension);
    std::fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote export");
    Ok(path)
}
