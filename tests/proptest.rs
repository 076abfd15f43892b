//! Property-based tests for pidginpack.
//!
//! These tests generate random lines to find edge cases in line parsing.

use chrono::NaiveDate;
use proptest::prelude::*;

use pidginpack::core::{FilterConfig, apply_filters, sort_chronologically};
use pidginpack::error::LineErrorKind;
use pidginpack::parsing::markup::{extract_content, markers, validate_line};
use pidginpack::parsing::{TimeToken, parse_line};

fn file_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()
}

/// Alias without markup or a trailing colon.
fn arb_alias() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Me".to_string(),
        "Иван".to_string(),
        "user 42".to_string(),
        "O'Brien".to_string(),
    ])
}

/// Body that may carry markup, entities and line breaks.
fn arb_body() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "Hello <i>there</i>".to_string(),
        "a<br/>b".to_string(),
        "<a href=\"http://x\">link</a> text".to_string(),
        "fish &amp; chips &quot;to go&quot;".to_string(),
        "Привет мир".to_string(),
        "🎉 emoji".to_string(),
        "semi;colon \"quoted\"".to_string(),
    ])
}

fn arb_time() -> impl Strategy<Value = (u32, u32, u32)> {
    (0u32..24, 0u32..60, 0u32..60)
}

fn line(color: &str, time: &str, alias: &str, body: &str) -> String {
    format!(
        r#"<font color="{color}"><font size="2">({time})</font> <b>{alias}:</b></font> {body}<br/>"#
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // LINE PARSING PROPERTIES
    // ============================================

    /// Parsing the same line twice gives the same message
    #[test]
    fn parse_is_deterministic(alias in arb_alias(), body in arb_body(), (h, m, s) in arb_time()) {
        let l = line(markers::OWN_COLOR, &format!("{h:02}:{m:02}:{s:02}"), &alias, &body);
        let a = parse_line(&l, file_date(), "me", "you");
        let b = parse_line(&l, file_date(), "me", "you");
        prop_assert_eq!(a, b);
    }

    /// Time-of-day tokens land on the file date at exactly that time
    #[test]
    fn time_of_day_uses_file_date(alias in arb_alias(), body in arb_body(), (h, m, s) in arb_time()) {
        let l = line(markers::PARTNER_COLOR, &format!("{h:02}:{m:02}:{s:02}"), &alias, &body);
        let msg = parse_line(&l, file_date(), "me", "you").unwrap();
        prop_assert_eq!(msg.timestamp, file_date().and_hms_opt(h, m, s).unwrap());
    }

    /// Own color means the owner is the author; anything else means the partner
    #[test]
    fn attribution_follows_color(alias in arb_alias(), body in arb_body(), own in any::<bool>()) {
        let color = if own { markers::OWN_COLOR } else { markers::PARTNER_COLOR };
        let msg = parse_line(&line(color, "12:00:00", &alias, &body), file_date(), "me", "you").unwrap();
        prop_assert_eq!(msg.is_own, own);
        prop_assert_eq!(msg.owner_id(), "me");
        prop_assert_eq!(msg.counterpart_id(), "you");
        prop_assert_ne!(msg.author_id, msg.partner_id);
    }

    /// The alias loses exactly its trailing colon
    #[test]
    fn alias_is_preserved(alias in arb_alias(), body in arb_body()) {
        let msg = parse_line(&line(markers::OWN_COLOR, "12:00:00", &alias, &body), file_date(), "me", "you").unwrap();
        prop_assert_eq!(msg.author, alias);
    }

    /// Markup written by the client is stripped. Bodies here carry no
    /// escaped `&lt;`/`&gt;`, which would decode to literal brackets.
    #[test]
    fn content_has_no_tags(alias in arb_alias(), body in arb_body()) {
        let msg = parse_line(&line(markers::OWN_COLOR, "12:00:00", &alias, &body), file_date(), "me", "you").unwrap();
        prop_assert!(!msg.content.contains('<'));
        prop_assert!(!msg.content.contains('>'));
        prop_assert!(!msg.content.is_empty());
        prop_assert_eq!(msg.content.trim(), msg.content.as_str());
    }

    /// Dropping the trailing line break always fails the gate
    #[test]
    fn missing_break_is_rejected(alias in arb_alias(), body in arb_body()) {
        let l = line(markers::OWN_COLOR, "12:00:00", &alias, &body);
        let truncated = l.strip_suffix(markers::LINE_BREAK).unwrap();
        prop_assert!(!validate_line(truncated));
        let err = parse_line(truncated, file_date(), "me", "you").unwrap_err();
        prop_assert_eq!(err.kind, LineErrorKind::StructurallyInvalidLine);
    }

    /// Arbitrary text without the markers never parses
    #[test]
    fn plain_text_is_rejected(text in "[a-zA-Z0-9 .,:()]{0,80}") {
        prop_assert!(!validate_line(&text));
        prop_assert!(parse_line(&text, file_date(), "me", "you").is_err());
    }

    /// Tokens matching neither shape are reported, never guessed
    #[test]
    fn unknown_time_shape_is_rejected(h in 1u32..13, m in 0u32..60) {
        let token = format!("{h}:{m:02} PM");
        prop_assert!(TimeToken::detect(&token).is_none());
        let l = line(markers::OWN_COLOR, &token, "Me", "hi");
        let err = parse_line(&l, file_date(), "me", "you").unwrap_err();
        prop_assert_eq!(err.kind, LineErrorKind::UnrecognizedTimestampFormat);
    }

    /// Escaped brackets come back as text, never as stripped tags
    #[test]
    fn escaped_brackets_are_kept(word in "[a-z]{1,10}") {
        let body = format!("&lt;{word}&gt; ok");
        let l = line(markers::PARTNER_COLOR, "12:00:00", "A", &body);
        let msg = parse_line(&l, file_date(), "me", "you").unwrap();
        prop_assert_eq!(msg.content, format!("<{word}> ok"));
    }

    /// Content extraction is idempotent on already clean text
    #[test]
    fn clean_content_is_stable(body in "[a-zA-Z0-9]{1,20}( [a-zA-Z0-9]{1,20}){0,4}") {
        let l = line(markers::OWN_COLOR, "12:00:00", "Me", &body);
        prop_assert_eq!(extract_content(&l), Some(body));
    }

    // ============================================
    // POST-PROCESSING PROPERTIES
    // ============================================

    /// Sorting keeps every message and orders timestamps
    #[test]
    fn sort_orders_and_keeps_all(times in prop::collection::vec(arb_time(), 0..20)) {
        let mut messages: Vec<_> = times
            .iter()
            .map(|(h, m, s)| {
                let l = line(markers::OWN_COLOR, &format!("{h:02}:{m:02}:{s:02}"), "Me", "hi");
                parse_line(&l, file_date(), "me", "you").unwrap()
            })
            .collect();
        let len = messages.len();
        sort_chronologically(&mut messages);
        prop_assert_eq!(messages.len(), len);
        prop_assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    /// No filter means passthrough
    #[test]
    fn no_filter_is_passthrough(times in prop::collection::vec(arb_time(), 0..20)) {
        let messages: Vec<_> = times
            .iter()
            .map(|(h, m, s)| {
                let l = line(markers::PARTNER_COLOR, &format!("{h:02}:{m:02}:{s:02}"), "A", "hi");
                parse_line(&l, file_date(), "me", "you").unwrap()
            })
            .collect();
        let filtered = apply_filters(messages.clone(), &FilterConfig::new());
        prop_assert_eq!(filtered, messages);
    }
}
