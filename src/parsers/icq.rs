//! ICQ log parser.

use std::path::Path;

use crate::Message;
use crate::config::ArchiveConfig;
use crate::core::ParseStats;
use crate::error::PidginError;
use crate::parser::{Parser, Service};

use super::archive::ArchiveWalker;

/// Parser for Pidgin's ICQ HTML logs (`.purple/logs/icq/<account>`).
///
/// # Example
///
/// ```rust,no_run
/// use pidginpack::parser::Parser;
/// use pidginpack::parsers::IcqParser;
///
/// let parser = IcqParser::new();
/// let messages = parser.parse(".purple/logs/icq/123456789".as_ref())?;
/// # Ok::<(), pidginpack::PidginError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IcqParser {
    walker: ArchiveWalker,
}

impl IcqParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ArchiveConfig) -> Self {
        Self {
            walker: ArchiveWalker::with_config(config),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ArchiveConfig {
        self.walker.config()
    }

    /// Parses `root` and reports what was skipped along the way.
    pub fn parse_with_stats(&self, root: &Path) -> Result<(Vec<Message>, ParseStats), PidginError> {
        let mut stats = ParseStats::new();
        let messages = self.walker.walk_with_stats(root, &mut stats)?;
        Ok((messages, stats))
    }
}

impl Parser for IcqParser {
    fn name(&self) -> &'static str {
        "ICQ"
    }

    fn service(&self) -> Service {
        Service::Icq
    }

    fn parse(&self, root: &Path) -> Result<Vec<Message>, PidginError> {
        self.walker.walk(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_identity() {
        let parser = IcqParser::new();
        assert_eq!(parser.name(), "ICQ");
        assert_eq!(parser.service(), Service::Icq);
        assert!(parser.config().exclude_groups);
    }

    #[test]
    fn test_with_config() {
        let parser = IcqParser::with_config(ArchiveConfig::new().with_exclude_groups(false));
        assert!(!parser.config().exclude_groups);
    }
}
