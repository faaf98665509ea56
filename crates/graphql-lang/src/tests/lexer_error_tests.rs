//! Tests for lexer errors: exact descriptions, positions, and the
//! character renderings embedded in them.
//!
//! The wording and (line:column) of every message here is a
//! compatibility surface shared with the reference GraphQL
//! implementations; none of it may drift.

use crate::next_token;
use crate::tests::utils::assert_syntax_error;
use crate::Source;

// =============================================================================
// Unexpected characters
// =============================================================================

/// Verifies that printable ASCII appears raw in the message.
#[test]
fn unexpected_character_printable() {
    assert_syntax_error("+", 1, 1, "Unexpected character \"+\"");
    assert_syntax_error("?", 1, 1, "Unexpected character \"?\"");
    assert_syntax_error("~", 1, 1, "Unexpected character \"~\"");
}

/// Verifies that a lone or doubled dot fails at the first dot; only
/// `...` is a token.
#[test]
fn unexpected_character_dots() {
    assert_syntax_error(".", 1, 1, "Unexpected character \".\"");
    assert_syntax_error("..", 1, 1, "Unexpected character \".\"");
    assert_syntax_error(".123", 1, 1, "Unexpected character \".\"");
}

/// Verifies that control characters render as uppercase `\uXXXX`.
#[test]
fn unexpected_character_control() {
    assert_syntax_error("\u{0007}", 1, 1, "Unexpected character \"\\u0007\"");
}

/// Verifies that non-ASCII BMP characters render as one `\uXXXX`
/// unit, uppercase hex.
#[test]
fn unexpected_character_bmp() {
    assert_syntax_error("\u{203B}", 1, 1, "Unexpected character \"\\u203B\"");
    assert_syntax_error("\u{200B}", 1, 1, "Unexpected character \"\\u200B\"");
}

/// Verifies that astral characters render as a UTF-16 surrogate pair.
#[test]
fn unexpected_character_astral() {
    assert_syntax_error("\u{1F600}", 1, 1, "Unexpected character \"\\uD83D\\uDE00\"");
}

/// Verifies that literal `\uXXXX` text in the source echoes its six
/// raw characters with case preserved, not a re-rendering of the
/// escaped code point.
#[test]
fn unexpected_character_raw_escape_echo() {
    assert_syntax_error("\\u200b", 1, 1, "Unexpected character \"\\u200b\"");
    assert_syntax_error("\\u203B", 1, 1, "Unexpected character \"\\u203B\"");
}

/// Verifies that a backslash without four hex digits after `\u` is
/// just an unexpected backslash.
#[test]
fn unexpected_character_backslash() {
    assert_syntax_error("\\", 1, 1, "Unexpected character \"\\\"");
    assert_syntax_error("\\uXYZA", 1, 1, "Unexpected character \"\\\"");
}

/// Verifies that the error position accounts for ignored text and
/// earlier lines.
#[test]
fn unexpected_character_position() {
    assert_syntax_error("  ~", 1, 3, "Unexpected character \"~\"");
    assert_syntax_error("{\n  bad~\n}", 2, 6, "Unexpected character \"~\"");
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies the leading-zero error, reported at the second digit.
#[test]
fn invalid_number_leading_zero() {
    assert_syntax_error("00", 1, 2, "Invalid number, unexpected digit after 0: \"0\"");
    assert_syntax_error("01", 1, 2, "Invalid number, unexpected digit after 0: \"1\"");
    assert_syntax_error("-01", 1, 3, "Invalid number, unexpected digit after 0: \"1\"");
}

/// Verifies the missing-digit error at end of input, with the
/// unquoted `<EOF>` marker.
#[test]
fn invalid_number_eof() {
    assert_syntax_error("1.", 1, 3, "Invalid number, expected digit but got: <EOF>");
    assert_syntax_error("1.0e", 1, 5, "Invalid number, expected digit but got: <EOF>");
    assert_syntax_error("-", 1, 2, "Invalid number, expected digit but got: <EOF>");
}

/// Verifies the missing-digit error against the offending character.
#[test]
fn invalid_number_bad_digit() {
    assert_syntax_error("1.A", 1, 3, "Invalid number, expected digit but got: \"A\"");
    assert_syntax_error("-A", 1, 2, "Invalid number, expected digit but got: \"A\"");
    assert_syntax_error("1.0eA", 1, 5, "Invalid number, expected digit but got: \"A\"");
    assert_syntax_error("1.e1", 1, 3, "Invalid number, expected digit but got: \"e\"");
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies the unterminated-string error at end of input, pointing
/// one past the last character.
#[test]
fn unterminated_string_at_eof() {
    assert_syntax_error("\"", 1, 2, "Unterminated string.");
    assert_syntax_error("\"no end quote", 1, 14, "Unterminated string.");
}

/// Verifies that a line break inside a string terminates it at the
/// break.
#[test]
fn unterminated_string_at_line_break() {
    assert_syntax_error("\"multi\nline\"", 1, 7, "Unterminated string.");
    assert_syntax_error("\"multi\rline\"", 1, 7, "Unterminated string.");
}

/// Verifies that a trailing backslash reads as an unterminated string,
/// not a malformed escape.
#[test]
fn unterminated_string_trailing_backslash() {
    assert_syntax_error("\"esc\\", 1, 6, "Unterminated string.");
}

/// Verifies the control-character-in-string error: unquoted `\uXXXX`
/// rendering, trailing period, at the character.
#[test]
fn invalid_character_within_string() {
    assert_syntax_error(
        "\"a\u{0007}b\"",
        1,
        3,
        "Invalid character within String: \\u0007.",
    );
}

/// Verifies the bad-escape error: reported at the character after the
/// backslash, rendering unquoted, trailing period.
#[test]
fn invalid_character_escape() {
    assert_syntax_error(
        "\"bad \\z esc\"",
        1,
        7,
        "Invalid character escape sequence: \\z.",
    );
    assert_syntax_error(
        "\"bad \\x esc\"",
        1,
        7,
        "Invalid character escape sequence: \\x.",
    );
}

/// Verifies that a malformed `\u` escape echoes the next four
/// characters as written, whatever they are.
#[test]
fn invalid_unicode_escape_echo() {
    assert_syntax_error(
        "\"bad \\u1 esc\"",
        1,
        7,
        "Invalid character escape sequence: \\u1 es.",
    );
    assert_syntax_error(
        "\"bad \\u0XX1 esc\"",
        1,
        7,
        "Invalid character escape sequence: \\u0XX1.",
    );
    assert_syntax_error(
        "\"bad \\uXXXX esc\"",
        1,
        7,
        "Invalid character escape sequence: \\uXXXX.",
    );
    assert_syntax_error(
        "\"bad \\uFXXX esc\"",
        1,
        7,
        "Invalid character escape sequence: \\uFXXX.",
    );
    assert_syntax_error(
        "\"bad \\uXXXF esc\"",
        1,
        7,
        "Invalid character escape sequence: \\uXXXF.",
    );
    assert_syntax_error("\"\\u12\"", 1, 3, "Invalid character escape sequence: \\u12\".");
}

/// Verifies that `\u` escapes naming surrogate code points fail like
/// malformed escapes; no host string type here can hold them.
#[test]
fn invalid_unicode_escape_surrogate() {
    assert_syntax_error(
        "\"\\uDEAD\"",
        1,
        3,
        "Invalid character escape sequence: \\uDEAD.",
    );
}

// =============================================================================
// Block strings
// =============================================================================

/// Verifies unterminated block strings, including a partial closer.
#[test]
fn unterminated_block_string() {
    assert_syntax_error("\"\"\"abc", 1, 7, "Unterminated string.");
    assert_syntax_error("\"\"\"abc\"\"", 1, 9, "Unterminated string.");
}

/// Verifies that control characters other than whitespace are
/// rejected inside block strings too.
#[test]
fn invalid_character_within_block_string() {
    assert_syntax_error(
        "\"\"\"a\u{0007}b\"\"\"",
        1,
        5,
        "Invalid character within String: \\u0007.",
    );
}

// =============================================================================
// Resumed scans
// =============================================================================

/// Verifies that a clean token followed by bad text fails only when
/// the scan resumes past it: `a-b` lexes `a`, then errors at the
/// absolute position of `b`.
#[test]
fn resumed_scan_reports_absolute_position() {
    let source = Source::new("a-b");
    let first = next_token(&source, 0).unwrap();
    assert_eq!((first.start, first.end), (0, 1));

    let error = next_token(&source, first.end).unwrap_err();
    assert_eq!(error.position(), 2);
    assert_eq!((error.line(), error.column()), (1, 3));
    assert_eq!(
        error.description(),
        "Invalid number, expected digit but got: \"b\"",
    );
}
