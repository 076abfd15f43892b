//! Timestamp tokens of Pidgin log lines.
//!
//! Pidgin writes two shapes inside `(...)`:
//!
//! - `HH:MM:SS` for messages sent on the day the log file was opened,
//! - `DD.MM.YYYY HH:MM:SS` once a conversation runs past midnight.
//!
//! Both are naive local wall-clock values. Anything else is rejected, a 12-hour
//! `02:05:10 PM` included.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// The closed set of timestamp shapes, tried in [`TimeToken::all`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeToken {
    /// `14:05:10`; the date comes from the file name.
    TimeOfDay,
    /// `01.02.2019 09:00:00`; carries its own date.
    DateTime,
}

static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}$").expect("valid time regex"));
static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4} \d{2}:\d{2}:\d{2}$").expect("valid date-time regex")
});

impl TimeToken {
    fn regex(self) -> &'static Regex {
        match self {
            TimeToken::TimeOfDay => &TIME_OF_DAY,
            TimeToken::DateTime => &DATE_TIME,
        }
    }

    /// Returns the chrono format string for this shape.
    pub fn chrono_format(self) -> &'static str {
        match self {
            TimeToken::TimeOfDay => "%H:%M:%S",
            TimeToken::DateTime => "%d.%m.%Y %H:%M:%S",
        }
    }

    /// Returns all shapes in matching order.
    pub fn all() -> &'static [TimeToken] {
        &[TimeToken::TimeOfDay, TimeToken::DateTime]
    }

    /// Detects the shape of a token, if it has one of the known shapes.
    pub fn detect(token: &str) -> Option<TimeToken> {
        TimeToken::all()
            .iter()
            .copied()
            .find(|shape| shape.regex().is_match(token))
    }

    /// Resolves a token of this shape; `file_date` is only used by
    /// [`TimeToken::TimeOfDay`].
    fn resolve(self, token: &str, file_date: NaiveDate) -> Option<NaiveDateTime> {
        match self {
            TimeToken::TimeOfDay => NaiveTime::parse_from_str(token, self.chrono_format())
                .ok()
                .map(|time| file_date.and_time(time)),
            TimeToken::DateTime => NaiveDateTime::parse_from_str(token, self.chrono_format()).ok(),
        }
    }
}

/// Resolves a time token (parentheses already removed) to a full timestamp.
///
/// Returns `None` if the token has neither shape or names an impossible
/// value such as `25:00:00`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use pidginpack::parsing::timestamp::resolve_timestamp;
///
/// let file_date = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
///
/// let ts = resolve_timestamp("14:05:10", file_date).unwrap();
/// assert_eq!(ts.to_string(), "2020-05-01 14:05:10");
///
/// let ts = resolve_timestamp("01.02.2019 09:00:00", file_date).unwrap();
/// assert_eq!(ts.to_string(), "2019-02-01 09:00:00");
///
/// assert!(resolve_timestamp("2:05:10 PM", file_date).is_none());
/// ```
pub fn resolve_timestamp(token: &str, file_date: NaiveDate) -> Option<NaiveDateTime> {
    TimeToken::detect(token)?.resolve(token, file_date)
}

/// Removes the parentheses wrapping a raw time fragment.
pub fn strip_parens(fragment: &str) -> String {
    fragment.replace(['(', ')'], "")
}
