//! The normalized message record.
//!
//! Every line recovered from a Pidgin transcript becomes one [`Message`].
//! Identities are split in two on purpose:
//!
//! - `author` is the alias printed in the log when the message was sent. It
//!   can change over the lifetime of a conversation.
//! - `author_id` / `partner_id` are the account identifiers taken from the
//!   log folder names and never change.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pidginpack::Message;
//! use pidginpack::parser::Service;
//!
//! let sent = NaiveDate::from_ymd_opt(2020, 5, 1)
//!     .unwrap()
//!     .and_hms_opt(14, 5, 10)
//!     .unwrap();
//!
//! let msg = Message::new(Service::Icq, sent, "Alice", "me123", "alice456", "Hello there", true);
//! assert_eq!(msg.owner_id(), "me123");
//! assert_eq!(msg.counterpart_id(), "alice456");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parser::Service;

/// A single message recovered from a transcript.
///
/// | Field | Description |
/// |-------|-------------|
/// | `service` | Protocol the conversation ran over |
/// | `timestamp` | Local wall-clock time the message was sent |
/// | `author` | Display alias at send time |
/// | `author_id` | Sender's account identifier |
/// | `partner_id` | The other participant's account identifier |
/// | `content` | Body with markup removed, on a single line |
/// | `is_own` | `true` if the log owner wrote it |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub service: Service,

    /// Naive timestamp; Pidgin writes local time without an offset per line.
    pub timestamp: NaiveDateTime,

    pub author: String,

    /// Sender's account identifier, taken from the folder layout.
    pub author_id: String,

    /// Counterpart of `author_id`.
    pub partner_id: String,

    pub content: String,

    /// Derived from the line's font color only.
    pub is_own: bool,
}

impl Message {
    /// Creates a message with every field specified.
    pub fn new(
        service: Service,
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        author_id: impl Into<String>,
        partner_id: impl Into<String>,
        content: impl Into<String>,
        is_own: bool,
    ) -> Self {
        Self {
            service,
            timestamp,
            author: author.into(),
            author_id: author_id.into(),
            partner_id: partner_id.into(),
            content: content.into(),
            is_own,
        }
    }

    /// Returns the log owner's identifier, whichever side wrote the message.
    pub fn owner_id(&self) -> &str {
        if self.is_own {
            &self.author_id
        } else {
            &self.partner_id
        }
    }

    /// Returns the counterpart's identifier, whichever side wrote the message.
    pub fn counterpart_id(&self) -> &str {
        if self.is_own {
            &self.partner_id
        } else {
            &self.author_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(is_own: bool) -> Message {
        let ts = NaiveDate::from_ymd_opt(2020, 5, 1)
            .unwrap()
            .and_hms_opt(14, 5, 10)
            .unwrap();
        if is_own {
            Message::new(Service::Icq, ts, "Me", "me123", "alice456", "Hi", true)
        } else {
            Message::new(Service::Icq, ts, "Alice", "alice456", "me123", "Hi", false)
        }
    }

    #[test]
    fn test_owner_and_counterpart_are_stable() {
        for is_own in [true, false] {
            let msg = sample(is_own);
            assert_eq!(msg.owner_id(), "me123");
            assert_eq!(msg.counterpart_id(), "alice456");
        }
    }

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_string(&sample(true)).unwrap();
        assert!(json.contains("\"service\":\"ICQ\""));
        assert!(json.contains("\"authorId\":\"me123\""));
        assert!(json.contains("\"isOwn\":true"));
        assert!(json.contains("2020-05-01T14:05:10"));
    }

    #[test]
    fn test_message_roundtrip() {
        let msg = sample(false);
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, msg);
    }
}
