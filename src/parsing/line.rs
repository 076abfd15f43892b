//! One log line to one [`Message`].

use chrono::NaiveDate;

use crate::Message;
use crate::error::{Field, LineError, LineErrorKind};
use crate::parser::Service;

use super::markup::{
    extract_content, extract_fragment, is_own_line, markers, validate_line,
};
use super::timestamp::{resolve_timestamp, strip_parens};

/// Parses a single transcript line.
///
/// `owner_id` and `partner_id` come from the transcript's folders; the one
/// that becomes `author_id` is picked by the line's font color.
///
/// # Errors
///
/// Returns a [`LineError`] carrying the raw line when the line fails the
/// structural gate, misses a fragment, or has an unknown timestamp shape.
///
/// ```rust
/// use chrono::NaiveDate;
/// use pidginpack::parsing::parse_line;
///
/// let line = r##"<font color="#A82F2F"><font size="2">(14:05:10)</font> <b>Alice:</b></font> Hello there<br/>"##;
/// let date = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
///
/// let msg = parse_line(line, date, "me123", "alice456").unwrap();
/// assert!(!msg.is_own);
/// assert_eq!(msg.author, "Alice");
/// assert_eq!(msg.author_id, "alice456");
/// assert_eq!(msg.partner_id, "me123");
/// ```
pub fn parse_line(
    line: &str,
    file_date: NaiveDate,
    owner_id: &str,
    partner_id: &str,
) -> Result<Message, LineError> {
    let fail = |kind| LineError::new(kind, line);

    if !validate_line(line) {
        return Err(fail(LineErrorKind::StructurallyInvalidLine));
    }

    let is_own = is_own_line(line);

    let time = extract_fragment(line, markers::SIZE_OPEN, markers::FONT_CLOSE)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| fail(LineErrorKind::MissingField(Field::Time)))?;
    let alias = extract_fragment(line, markers::BOLD_OPEN, markers::BOLD_CLOSE)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| fail(LineErrorKind::MissingField(Field::Alias)))?;
    let content = extract_content(line)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| fail(LineErrorKind::MissingField(Field::Content)))?;

    let timestamp = resolve_timestamp(&strip_parens(time), file_date)
        .ok_or_else(|| fail(LineErrorKind::UnrecognizedTimestampFormat))?;

    let author = alias.strip_suffix(':').unwrap_or(alias);
    let (author_id, partner_id) = if is_own {
        (owner_id, partner_id)
    } else {
        (partner_id, owner_id)
    };

    Ok(Message::new(
        Service::Icq,
        timestamp,
        author,
        author_id,
        partner_id,
        content,
        is_own,
    ))
}
