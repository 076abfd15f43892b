//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`Source`] - Supported messaging services
//! - [`OutputFormat`] - Output format options
//!
//! Both enums convert into their library counterparts, so code that does not
//! link clap can use [`crate::parser::Service`] and
//! [`crate::format::OutputFormat`] directly.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ArchiveConfig;
use crate::core::FilterConfig;
use crate::error::PidginError;
use crate::parser::Service;

/// Aggregate a Pidgin log archive into one chronological export.
///
/// INPUT is the owner's account folder, e.g. `~/.purple/logs/icq/123456789`.
#[derive(Parser, Debug, Clone)]
#[command(name = "pidginpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    pidginpack ~/.purple/logs/icq/123456789
    pidginpack logs/icq/123456789 -o export --sort
    pidginpack logs/icq/123456789 --format jsonl --after 2019-01-01
    pidginpack logs/icq/123456789 --partner 987654321 --include-groups

LOGGING:
    RUST_LOG=pidginpack=trace pidginpack ...   # overrides -v / -q")]
pub struct Args {
    /// Owner account folder of the archive
    pub input: PathBuf,

    /// Messaging service the archive belongs to
    #[arg(short, long, value_enum, default_value = "icq")]
    pub service: Source,

    /// Folder to write aggregated-messages.<ext> into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Also parse group chat folders (names ending in .chat)
    #[arg(long)]
    pub include_groups: bool,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep only conversations with this account id
    #[arg(long, value_name = "ID")]
    pub partner: Option<String>,

    /// Sort the export by timestamp instead of archive order
    #[arg(long)]
    pub sort: bool,

    /// Log every skipped line and parsed file
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }

    /// Archive walk settings derived from the flags.
    pub fn archive_config(&self) -> ArchiveConfig {
        ArchiveConfig::new().with_exclude_groups(!self.include_groups)
    }

    /// Filter settings derived from the flags.
    ///
    /// # Errors
    ///
    /// Returns [`PidginError::InvalidDate`] if `--after` or `--before` is not
    /// `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig, PidginError> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref partner) = self.partner {
            config = config.with_partner(partner.clone());
        }
        Ok(config)
    }
}

/// Supported messaging services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// ICQ logs (`logs/icq/<account>`)
    Icq,
}

impl From<Source> for Service {
    fn from(source: Source) -> Service {
        match source {
            Source::Icq => Service::Icq,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Semicolon CSV with BOM header (default)
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
