//! CSV output writer.

use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::Message;
use crate::error::Result;

/// Header row, prefixed with a UTF-8 byte order mark for spreadsheet tools.
pub const CSV_HEADER: [&str; 7] = [
    "\u{feff}service",
    "date",
    "author",
    "authorPrimary",
    "partner",
    "content",
    "isOwn",
];

/// Writes messages to `out_dir/aggregated-messages.csv`.
///
/// # Format
/// - Delimiter: `;`, lines end with `\n`
/// - Header: `service;date;author;authorPrimary;partner;content;isOwn`
/// - Record: `ICQ;2020-05-01T14:05:10;"Alice";alice456;me123;"Hello";false;`
/// - `author` and `content` are always wrapped in `"`; a `"` inside them
///   becomes `'`
/// - Records end with a trailing `;`
///
/// Returns the path of the written file.
pub fn write_csv(messages: &[Message], out_dir: &Path) -> Result<PathBuf> {
    let csv = to_csv(messages)?;
    super::write_output(out_dir, "csv", &csv)
}

/// Converts messages to the CSV text [`write_csv`] produces.
///
/// ```rust
/// use chrono::NaiveDate;
/// use pidginpack::Message;
/// use pidginpack::core::output::to_csv;
/// use pidginpack::parser::Service;
///
/// let ts = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap().and_hms_opt(14, 5, 10).unwrap();
/// let msg = Message::new(Service::Icq, ts, "Me", "me123", "alice456", "say \"hi\"", true);
///
/// let csv = to_csv(&[msg]).unwrap();
/// assert!(csv.ends_with("ICQ;2020-05-01T14:05:10;\"Me\";me123;alice456;\"say 'hi'\";true;\n"));
/// ```
pub fn to_csv(messages: &[Message]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for msg in messages {
        writer.write_record(build_record(msg))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// One record; the empty last field yields the trailing delimiter.
fn build_record(msg: &Message) -> [String; 8] {
    [
        msg.service.to_string(),
        msg.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
        quoted(&msg.author),
        msg.author_id.clone(),
        msg.partner_id.clone(),
        quoted(&msg.content),
        msg.is_own.to_string(),
        String::new(),
    ]
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "'"))
}
