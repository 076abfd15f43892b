//! Positional markup extraction for Pidgin HTML log lines.
//!
//! Pidgin writes one message per line:
//!
//! ```text
//! <font color="#16569E"><font size="2">(14:05:10)</font> <b>Alice:</b> Hello there<br/>
//! ```
//!
//! The lines are not parsed as HTML. Fragments are cut out between fixed
//! markers, so every marker lives in [`markers`] and format drift only means
//! touching those constants.

use std::sync::LazyLock;

use regex::Regex;

/// Marker strings of the ICQ HTML log format.
pub mod markers {
    /// Any font color attribute; present on every message line.
    pub const COLOR_ATTR: &str = "<font color=";
    /// Color Pidgin uses for messages written by the log owner.
    pub const OWN_COLOR: &str = "#16569E";
    /// Color Pidgin uses for messages written by the partner.
    pub const PARTNER_COLOR: &str = "#A82F2F";
    /// Opens the timestamp region.
    pub const SIZE_OPEN: &str = "<font size=\"2\">";
    /// Closes a font region.
    pub const FONT_CLOSE: &str = "</font>";
    pub const BOLD_OPEN: &str = "<b>";
    pub const BOLD_CLOSE: &str = "</b>";
    /// Terminates every message line; also used inside multi-paragraph bodies.
    pub const LINE_BREAK: &str = "<br/>";
}

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Returns the trimmed text between the first `start` and the next `end` after it.
///
/// Returns `None` for blank lines and when either marker is missing; callers
/// run [`validate_line`] first, so the latter only happens on lines that
/// already passed the structural gate but are otherwise broken.
///
/// ```rust
/// use pidginpack::parsing::markup::extract_fragment;
///
/// let line = r#"<font size="2">(14:05:10)</font> <b>Alice:</b>"#;
/// assert_eq!(extract_fragment(line, "<b>", "</b>"), Some("Alice:"));
/// assert_eq!(extract_fragment(line, "<i>", "</i>"), None);
/// ```
pub fn extract_fragment<'a>(line: &'a str, start: &str, end: &str) -> Option<&'a str> {
    if line.trim().is_empty() {
        return None;
    }
    tracing::trace!(start, end, line, "extracting fragment");

    let from = line.find(start)? + start.len();
    let to = from + line[from..].find(end)?;
    Some(line[from..to].trim())
}

/// Returns `true` if the line looks like a message entry.
///
/// All four must hold: a color attribute, the size attribute that opens the
/// timestamp, a bold alias and the trailing `<br/>`.
pub fn validate_line(line: &str) -> bool {
    line.contains(markers::COLOR_ATTR)
        && line.contains(markers::SIZE_OPEN)
        && line.contains(markers::BOLD_OPEN)
        && line.ends_with(markers::LINE_BREAK)
}

/// Returns `true` if the line carries the owner's font color.
pub fn is_own_line(line: &str) -> bool {
    line.contains(markers::OWN_COLOR)
}

/// Extracts the message body, de-tagged, with line breaks collapsed to single
/// spaces.
///
/// The body starts after the last closing metadata marker: the last `</font>`
/// or the `</b>` closing the alias, whichever comes later. Pidgin normally
/// closes the color font right after the alias, but lines without that
/// `</font>` still lose their alias this way.
///
/// A body that itself contains `</font>` (a message with colored text) is cut
/// at its last closing tag, so leading words can be lost. Returns `None` for
/// blank lines and lines without any closing marker.
///
/// Entities are decoded after tags are stripped, so `&lt;3` or `&lt;b&gt;`
/// typed by a user come back as the literal text `<3` and `<b>`. The result
/// holds no markup Pidgin wrote, but it may contain `<` and `>`.
///
/// ```rust
/// use pidginpack::parsing::markup::extract_content;
///
/// let line = r##"<font color="#A82F2F"><font size="2">(10:00:00)</font> <b>Bob:</b></font> one<br/>two<br/>"##;
/// assert_eq!(extract_content(line).as_deref(), Some("one two"));
/// ```
pub fn extract_content(line: &str) -> Option<String> {
    if line.trim().is_empty() {
        return None;
    }
    let font_end = line
        .rfind(markers::FONT_CLOSE)
        .map(|i| i + markers::FONT_CLOSE.len());
    let alias_end = line
        .find(markers::BOLD_CLOSE)
        .map(|i| i + markers::BOLD_CLOSE.len());
    let start = font_end.max(alias_end)?;
    let body = line[start..].replace(markers::LINE_BREAK, " ");
    let body = TAG.replace_all(&body, "");
    let body = decode_entities(&body);
    Some(WHITESPACE.replace_all(body.trim(), " ").into_owned())
}

/// Decodes the handful of entities Pidgin escapes in message bodies.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWN_LINE: &str = r##"<font color="#16569E"><font size="2">(14:05:10)</font> <b>Alice:</b></font> Hello there<br/>"##;

    #[test]
    fn test_extract_fragment_basic() {
        assert_eq!(
            extract_fragment(OWN_LINE, markers::SIZE_OPEN, markers::FONT_CLOSE),
            Some("(14:05:10)")
        );
        assert_eq!(
            extract_fragment(OWN_LINE, markers::BOLD_OPEN, markers::BOLD_CLOSE),
            Some("Alice:")
        );
    }

    #[test]
    fn test_extract_fragment_uses_first_start_and_next_end() {
        let line = "[a] x [b] [c]";
        assert_eq!(extract_fragment(line, "[", "]"), Some("a"));
        assert_eq!(extract_fragment(line, "x", "]"), Some("[b"));
    }

    #[test]
    fn test_extract_fragment_blank_and_missing() {
        assert_eq!(extract_fragment("", "<b>", "</b>"), None);
        assert_eq!(extract_fragment("   ", "<b>", "</b>"), None);
        assert_eq!(extract_fragment("<b>open only", "<b>", "</b>"), None);
        assert_eq!(extract_fragment("no markers", "<b>", "</b>"), None);
    }

    #[test]
    fn test_validate_line_accepts_message() {
        assert!(validate_line(OWN_LINE));
    }

    #[test]
    fn test_validate_line_requires_each_marker() {
        let no_color = OWN_LINE.replace("<font color=", "<font face=");
        let no_size = OWN_LINE.replace("<font size=\"2\">", "<font size=\"3\">");
        let no_bold = OWN_LINE.replace("<b>", "<i>");
        let no_break = OWN_LINE.trim_end_matches("<br/>");
        assert!(!validate_line(&no_color));
        assert!(!validate_line(&no_size));
        assert!(!validate_line(&no_bold));
        assert!(!validate_line(no_break));
    }

    #[test]
    fn test_validate_line_break_must_be_last() {
        let trailing = format!("{OWN_LINE} ");
        assert!(!validate_line(&trailing));
    }

    #[test]
    fn test_is_own_line() {
        assert!(is_own_line(OWN_LINE));
        assert!(!is_own_line(&OWN_LINE.replace(markers::OWN_COLOR, markers::PARTNER_COLOR)));
    }

    #[test]
    fn test_extract_content_strips_markup() {
        let line = r#"<font size="2">(1)</font> <b>A</b> <span style="x">bold <i>and</i></span> <a href="u">link</a><br/>"#;
        assert_eq!(extract_content(line).as_deref(), Some("bold and link"));
    }

    #[test]
    fn test_extract_content_collapses_breaks() {
        let line = r#"<b>A</b></font> first<br/><br/>second<br/>third<br/>"#;
        assert_eq!(
            extract_content(line).as_deref(),
            Some("first second third")
        );
    }

    #[test]
    fn test_extract_content_decodes_entities() {
        let line = r#"</font> 1 &lt; 2 &amp;&amp; &quot;yes&quot;<br/>"#;
        assert_eq!(extract_content(line).as_deref(), Some("1 < 2 && \"yes\""));
    }

    #[test]
    fn test_escaped_markup_survives_as_text() {
        let line = r#"<b>A</b></font> &lt;3 and &lt;b&gt;not bold&lt;/b&gt;<br/>"#;
        assert_eq!(
            extract_content(line).as_deref(),
            Some("<3 and <b>not bold</b>")
        );
    }

    #[test]
    fn test_extract_content_takes_text_after_last_font_close() {
        let line = r#"<b>A</b></font> hi <font color="red">red</font> tail<br/>"#;
        assert_eq!(extract_content(line).as_deref(), Some("tail"));
    }

    #[test]
    fn test_extract_content_without_font_close_after_alias() {
        let line = r##"<font color="#16569E"><font size="2">(14:05:10)</font> <b>Alice:</b> Hello there<br/>"##;
        assert_eq!(extract_content(line).as_deref(), Some("Hello there"));
    }

    #[test]
    fn test_extract_content_keeps_bold_body_text() {
        let line = r#"<b>Alice:</b></font> a <b>bold</b> claim<br/>"#;
        assert_eq!(extract_content(line).as_deref(), Some("a bold claim"));
    }

    #[test]
    fn test_extract_content_empty_body() {
        let line = r#"<b>A</b></font> <br/>"#;
        assert_eq!(extract_content(line).as_deref(), Some(""));
        assert_eq!(extract_content("no close tag"), None);
        assert_eq!(extract_content(""), None);
    }
}
