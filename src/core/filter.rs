//! Filter messages by date range and conversation partner.
//!
//! # Example
//!
//! ```
//! use pidginpack::core::filter::{FilterConfig, apply_filters};
//!
//! # fn main() -> pidginpack::Result<()> {
//! let config = FilterConfig::new()
//!     .with_date_from("2020-01-01")?
//!     .with_date_to("2020-12-31")?
//!     .with_partner("alice456");
//!
//! let filtered = apply_filters(Vec::new(), &config);
//! assert!(filtered.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive whole days
//! - The partner filter matches the counterpart account id, whichever side
//!   wrote the message
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use crate::Message;
use crate::error::PidginError;

/// Configuration for filtering messages by date and partner.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this day.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this day.
    pub before: Option<NaiveDate>,

    /// Include only conversations with this account id.
    pub partner: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive), format `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`PidginError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, PidginError> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive), format `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`PidginError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, PidginError> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the partner filter.
    #[must_use]
    pub fn with_partner(mut self, partner: impl Into<String>) -> Self {
        self.partner = Some(partner.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.partner.is_some()
    }

    /// Returns `true` if the message passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        let day = msg.timestamp.date();
        if self.after.is_some_and(|after| day < after) {
            return false;
        }
        if self.before.is_some_and(|before| day > before) {
            return false;
        }
        if let Some(ref partner) = self.partner {
            if msg.counterpart_id() != partner {
                return false;
            }
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, PidginError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| PidginError::invalid_date(date_str))
}

/// Filters a collection of messages based on the provided configuration.
///
/// If no filters are active, returns the original messages unchanged.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }
    messages.into_iter().filter(|m| config.matches(m)).collect()
}
