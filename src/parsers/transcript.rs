//! Single transcript file parser.
//!
//! A Pidgin HTML transcript looks like this:
//!
//! ```text
//! <html><head>...<title>Conversation with 987654321 at ...</title></head><body><h3>...</h3>
//! <font color="#16569E"><font size="2">(14:05:10)</font> <b>Me:</b></font> Hi<br/>
//! <font color="#A82F2F"><font size="2">(14:05:31)</font> <b>Alice:</b></font> Hello<br/>
//! </body></html>
//! ```
//!
//! The first line (header) and the last line (footer) are always dropped;
//! every line in between is parsed on its own and failures only cost that
//! line.

use std::fs;
use std::path::Path;

use tracing::{debug, error, warn};

use crate::Message;
use crate::core::ParseStats;
use crate::error::{PidginError, Result};
use crate::parsing::{TranscriptPath, parse_line};

/// Reads every line of a transcript.
///
/// # Errors
///
/// Returns [`PidginError::UnreadableFile`] if the file is missing, unreadable
/// or not valid UTF-8.
pub fn read_transcript(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).map_err(|e| PidginError::unreadable_file(path, e))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Parses transcript files into messages.
///
/// # Example
///
/// ```rust,no_run
/// use pidginpack::parsers::TranscriptParser;
/// use std::path::Path;
///
/// let messages = TranscriptParser::new().parse_file(Path::new(
///     "logs/icq/me123/alice456/2020-05-01.140510+0200CEST.html",
/// ))?;
/// # Ok::<(), pidginpack::PidginError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses one transcript file.
    ///
    /// An unreadable file is logged and yields no messages.
    ///
    /// # Errors
    ///
    /// Returns [`PidginError::MalformedFilename`] or
    /// [`PidginError::MalformedPathHierarchy`] if the file cannot be attributed
    /// to an owner, a partner and a date.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Message>> {
        self.parse_file_with_stats(path, &mut ParseStats::default())
    }

    /// Like [`parse_file`](Self::parse_file), tallying into `stats`.
    pub fn parse_file_with_stats(
        &self,
        path: &Path,
        stats: &mut ParseStats,
    ) -> Result<Vec<Message>> {
        let context = match TranscriptPath::from_path(path) {
            Ok(context) => context,
            Err(e) => {
                stats.malformed_files += 1;
                return Err(e);
            }
        };

        let lines = match read_transcript(path) {
            Ok(lines) => lines,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read transcript");
                stats.unreadable_files += 1;
                return Ok(Vec::new());
            }
        };
        debug!(path = %path.display(), lines = lines.len(), "read transcript");

        stats.files += 1;
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        Ok(parse_lines(&refs, &context, path, stats))
    }

    /// Parses transcript text that is already in memory.
    ///
    /// The header and footer lines are skipped exactly as for files.
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use pidginpack::parsers::TranscriptParser;
    /// use pidginpack::parsing::TranscriptPath;
    ///
    /// let text = "<html>\n\
    ///     <font color=\"#16569E\"><font size=\"2\">(14:05:10)</font> <b>Me:</b></font> Hi<br/>\n\
    ///     </body></html>";
    /// let ctx = TranscriptPath::new("me123", "alice456", NaiveDate::from_ymd_opt(2020, 5, 1).unwrap());
    ///
    /// let messages = TranscriptParser::new().parse_str(text, &ctx);
    /// assert_eq!(messages.len(), 1);
    /// assert_eq!(messages[0].content, "Hi");
    /// ```
    pub fn parse_str(&self, content: &str, context: &TranscriptPath) -> Vec<Message> {
        let lines: Vec<&str> = content.lines().collect();
        parse_lines(&lines, context, Path::new("<memory>"), &mut ParseStats::default())
    }
}

fn parse_lines(
    lines: &[&str],
    context: &TranscriptPath,
    path: &Path,
    stats: &mut ParseStats,
) -> Vec<Message> {
    let mut messages = Vec::new();
    let interior = lines.len().saturating_sub(1);

    for (index, line) in lines.iter().enumerate().take(interior).skip(1) {
        stats.lines += 1;
        match parse_line(line, context.date, &context.owner_id, &context.partner_id) {
            Ok(msg) => messages.push(msg),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    index,
                    reason = %e.kind,
                    line = %e.line,
                    "skipping transcript line"
                );
                stats.record_line_error(e.kind);
            }
        }
    }

    stats.messages += messages.len();
    messages
}
