//! Tests for `Source`: offset resolution, line access, and slicing.
//!
//! Columns are UTF-16 code units and both line and column are
//! 1-based, matching the positions host-language GraphQL tooling
//! reports for the same text.

use crate::Location;
use crate::Source;

// =============================================================================
// locate()
// =============================================================================

/// Verifies that offset zero of an empty source resolves to (1:1).
#[test]
fn locate_empty_source() {
    let source = Source::new("");
    assert_eq!(source.locate(0), (1, 1));
}

/// Verifies column progression across a single ASCII line, including
/// the one-past-the-end offset.
#[test]
fn locate_single_line() {
    let source = Source::new("query");
    assert_eq!(source.locate(0), (1, 1));
    assert_eq!(source.locate(3), (1, 4));
    assert_eq!(source.locate(5), (1, 6));
}

/// Verifies that offsets past the end of the text clamp to one past
/// the last character instead of panicking.
#[test]
fn locate_clamps_past_end() {
    let source = Source::new("ab");
    assert_eq!(source.locate(100), (1, 3));
}

/// Verifies line/column resolution across `\n` line breaks.
#[test]
fn locate_multiple_lines() {
    let source = Source::new("{\n  hero\n}");
    assert_eq!(source.locate(0), (1, 1));
    assert_eq!(source.locate(2), (2, 1));
    assert_eq!(source.locate(4), (2, 3));
    assert_eq!(source.locate(9), (3, 1));
}

/// Verifies that `\r\n` counts as a single line break.
#[test]
fn locate_crlf_is_one_break() {
    let source = Source::new("a\r\nb");
    assert_eq!(source.locate(0), (1, 1));
    assert_eq!(source.locate(3), (2, 1));
}

/// Verifies that a lone `\r` is a line break of its own.
#[test]
fn locate_lone_carriage_return() {
    let source = Source::new("a\rb");
    assert_eq!(source.locate(2), (2, 1));
}

/// Verifies mixed `\n`, `\r`, and `\r\n` breaks in one text.
#[test]
fn locate_mixed_line_breaks() {
    let source = Source::new("a\rb\nc\r\nd");
    assert_eq!(source.locate(0), (1, 1));
    assert_eq!(source.locate(2), (2, 1));
    assert_eq!(source.locate(4), (3, 1));
    assert_eq!(source.locate(7), (4, 1));
}

/// Verifies that U+2028 and U+2029 are ordinary characters, not line
/// breaks.
#[test]
fn locate_unicode_separators_are_not_breaks() {
    let source = Source::new("a\u{2028}b\u{2029}c");
    assert_eq!(source.line_count(), 1);
    // "c" sits at byte 8; each separator is one UTF-16 unit
    assert_eq!(source.locate(8), (1, 5));
}

/// Verifies that columns count UTF-16 code units: a two-byte BMP
/// character is one unit.
#[test]
fn locate_bmp_character_is_one_column() {
    let source = Source::new("\u{3c0} = x");
    assert_eq!(source.locate(3), (1, 3));
    assert_eq!(source.locate(5), (1, 5));
}

/// Verifies that an astral character counts as two UTF-16 units, the
/// way JavaScript string indexing sees it.
#[test]
fn locate_astral_character_is_two_columns() {
    let source = Source::new("\u{1F600}x");
    assert_eq!(source.locate(0), (1, 1));
    assert_eq!(source.locate(4), (1, 3));
}

// =============================================================================
// line_count() / line_text()
// =============================================================================

/// Verifies that an empty source still has one (empty) line.
#[test]
fn line_count_empty() {
    let source = Source::new("");
    assert_eq!(source.line_count(), 1);
    assert_eq!(source.line_text(1), Some(""));
}

/// Verifies that a trailing line break opens a final empty line.
#[test]
fn line_count_trailing_newline() {
    let source = Source::new("a\n");
    assert_eq!(source.line_count(), 2);
    assert_eq!(source.line_text(1), Some("a"));
    assert_eq!(source.line_text(2), Some(""));
}

/// Verifies that line text excludes every flavor of line terminator.
#[test]
fn line_text_strips_terminators() {
    let source = Source::new("one\r\ntwo\rthree\nfour");
    assert_eq!(source.line_text(1), Some("one"));
    assert_eq!(source.line_text(2), Some("two"));
    assert_eq!(source.line_text(3), Some("three"));
    assert_eq!(source.line_text(4), Some("four"));
}

/// Verifies that out-of-range line numbers (0, or past the last line)
/// return `None`.
#[test]
fn line_text_out_of_range() {
    let source = Source::new("only");
    assert_eq!(source.line_text(0), None);
    assert_eq!(source.line_text(2), None);
}

// =============================================================================
// text() / slice()
// =============================================================================

/// Verifies that `text` hands back the exact wrapped input and that
/// `new` accepts both `&str` and `&String`.
#[test]
fn text_round_trip() {
    let body = String::from("{ hero }");
    assert_eq!(Source::new(&body).text(), "{ hero }");
    assert_eq!(Source::new("{ hero }").text(), "{ hero }");
}

/// Verifies that slicing by a `Location` returns the covered text.
#[test]
fn slice_by_location() {
    let source = Source::new("{ hero }");
    assert_eq!(source.slice(Location::new(2, 6)), "hero");
    assert_eq!(source.slice(Location::new(0, 8)), "{ hero }");
    assert_eq!(source.slice(Location::new(3, 3)), "");
}

/// Verifies `Location` accessors used throughout the crate.
#[test]
fn location_accessors() {
    let location = Location::new(2, 6);
    assert_eq!(location.len(), 4);
    assert!(!location.is_empty());
    assert!(Location::new(5, 5).is_empty());
}
