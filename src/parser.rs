//! Unified parser trait for Pidgin log archives.
//!
//! Pidgin keeps one log tree per protocol (`.purple/logs/<protocol>/<account>`).
//! A [`Parser`] turns one account folder of that tree into a flat list of
//! [`Message`]s. Only ICQ logs are understood today; [`Service`] is the closed
//! set of protocols a [`Message`] can originate from.
//!
//! # Example
//!
//! ```rust,no_run
//! use pidginpack::parser::{Parser, Service, create_parser};
//! use std::path::Path;
//!
//! let parser = create_parser(Service::Icq);
//! let messages = parser.parse(Path::new(".purple/logs/icq/123456789"))?;
//! println!("{} messages", messages.len());
//! # Ok::<(), pidginpack::PidginError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::PidginError;

/// Instant messaging protocol a message was exchanged over.
///
/// # Example
///
/// ```rust
/// use pidginpack::parser::Service;
/// use std::str::FromStr;
///
/// assert_eq!(Service::from_str("icq").unwrap(), Service::Icq);
/// assert_eq!(Service::Icq.to_string(), "ICQ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Service {
    /// ICQ via Pidgin's `oscar` plugin
    Icq,
}

impl Service {
    /// Returns all service names.
    pub fn all_names() -> &'static [&'static str] {
        &["icq"]
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Service::Icq => write!(f, "ICQ"),
        }
    }
}

impl std::str::FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "icq" => Ok(Service::Icq),
            _ => Err(format!(
                "Unknown service: '{}'. Expected one of: {}",
                s,
                Service::all_names().join(", ")
            )),
        }
    }
}

/// Parses a Pidgin account folder into messages.
///
/// Implementations must recover from per-line and per-file problems (logging
/// them) and only fail when the folder itself cannot be enumerated.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Returns the service this parser handles.
    fn service(&self) -> Service;

    /// Parses every conversation below `root`, an owner account folder.
    ///
    /// # Errors
    ///
    /// Returns [`PidginError::FolderEnumeration`] if `root` or one of its
    /// partner folders cannot be listed.
    fn parse(&self, root: &Path) -> Result<Vec<Message>, PidginError>;
}

/// Creates a parser for the specified service with default configuration.
///
/// ```rust
/// use pidginpack::parser::{Parser, Service, create_parser};
///
/// let parser = create_parser(Service::Icq);
/// assert_eq!(parser.name(), "ICQ");
/// ```
pub fn create_parser(service: Service) -> Box<dyn Parser> {
    match service {
        Service::Icq => Box::new(crate::parsers::IcqParser::new()),
    }
}
