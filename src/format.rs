//! Export format selection, independent of the CLI.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> pidginpack::Result<()> {
//! use pidginpack::format::{OutputFormat, write_to_format};
//! use pidginpack::parser::Parser;
//! use pidginpack::parsers::IcqParser;
//! use std::path::Path;
//!
//! let messages = IcqParser::new().parse(Path::new("logs/icq/123456789"))?;
//!
//! let path = write_to_format(&messages, Path::new("out"), OutputFormat::Csv)?;
//! assert!(path.ends_with("aggregated-messages.csv"));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::PidginError;

/// Output format for the aggregated export.
///
/// ```rust
/// use pidginpack::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Semicolon CSV with BOM header (default)
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Feature flag that compiles this format's writer in.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PidginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(PidginError::invalid_format(
                "output",
                format!(
                    "unknown format '{}', expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Writes `aggregated-messages.<ext>` into `out_dir` in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or the file cannot
/// be written.
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[Message],
    out_dir: &Path,
    format: OutputFormat,
) -> Result<PathBuf, PidginError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, out_dir),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, out_dir),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, out_dir),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> PidginError {
    PidginError::invalid_format(
        "output",
        format!(
            "{} output requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        let err = OutputFormat::from_str("xml").unwrap_err();
        assert!(matches!(err, PidginError::InvalidFormat { .. }));
    }

    #[test]
    fn test_format_display_and_extension() {
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_write_to_format_names_file_by_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        for format in [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl] {
            let path = write_to_format(&[], dir.path(), format).unwrap();
            assert_eq!(
                path.file_name().unwrap().to_string_lossy(),
                format!("aggregated-messages.{}", format.extension())
            );
        }
    }
}
