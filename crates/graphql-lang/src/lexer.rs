//! Tokenization of GraphQL source text.
//!
//! The lexer is a pure function from `(source, byte offset)` to the
//! next token at or after that offset. It keeps no state of its own:
//! the parser owns the only cursor, and diagnostic tooling can resume
//! a scan from any previous token boundary (a token's `end` is the
//! natural resume point).
//!
//! Ignored between tokens: spaces, tabs, line breaks (`\n`, `\r\n`,
//! lone `\r`), commas, the byte-order mark, and `#` comments through
//! the end of the line. A comment is never itself a token.

use crate::Source;
use crate::SyntaxError;
use crate::Token;
use crate::TokenKind;
use std::borrow::Cow;

/// Scans the next token of `source` at or after byte offset
/// `position`.
///
/// `position` must lie on a `char` boundary (any prior token's `end`
/// qualifies; this is asserted in debug builds). Offsets at or past
/// the end of input produce an [`Eof`](TokenKind::Eof) token whose
/// `start` and `end` both equal the text length.
///
/// Fails with a [`SyntaxError`] on any text that cannot form a token;
/// the error's offset and message are part of the crate's
/// compatibility surface (see [`SyntaxError`]).
pub fn next_token<'src>(
    source: &Source<'src>,
    position: usize,
) -> Result<Token<'src>, SyntaxError> {
    let text = source.text();
    debug_assert!(
        text.is_char_boundary(position.min(text.len())),
        "next_token: position {position} is not a char boundary",
    );
    let scanner = Scanner {
        source,
        text,
        pos: position.min(text.len()),
    };
    scanner.scan()
}

// =============================================================================
// Scanner
// =============================================================================

/// Cursor over the source bytes for a single `next_token` call.
struct Scanner<'a, 'src> {
    source: &'a Source<'src>,
    text: &'src str,
    pos: usize,
}

impl<'src> Scanner<'_, 'src> {
    fn scan(mut self) -> Result<Token<'src>, SyntaxError> {
        self.skip_ignored();
        let start = self.pos;
        let Some(byte) = self.byte_at(start) else {
            return Ok(Token::eof(self.text.len()));
        };
        match byte {
            b'!' => Ok(self.punctuator(TokenKind::Bang)),
            b'$' => Ok(self.punctuator(TokenKind::Dollar)),
            b'(' => Ok(self.punctuator(TokenKind::ParenL)),
            b')' => Ok(self.punctuator(TokenKind::ParenR)),
            b':' => Ok(self.punctuator(TokenKind::Colon)),
            b'=' => Ok(self.punctuator(TokenKind::Equals)),
            b'@' => Ok(self.punctuator(TokenKind::At)),
            b'[' => Ok(self.punctuator(TokenKind::BracketL)),
            b']' => Ok(self.punctuator(TokenKind::BracketR)),
            b'{' => Ok(self.punctuator(TokenKind::BraceL)),
            b'|' => Ok(self.punctuator(TokenKind::Pipe)),
            b'}' => Ok(self.punctuator(TokenKind::BraceR)),
            b'.' => {
                if self.bytes()[start..].starts_with(b"...") {
                    self.pos += 3;
                    Ok(Token::punctuator(TokenKind::Spread, start, self.pos))
                } else {
                    // a lone or doubled dot is reported at the first dot
                    Err(self.lex_invalid_character())
                }
            },
            b'_' | b'A'..=b'Z' | b'a'..=b'z' => Ok(self.lex_name()),
            b'-' | b'0'..=b'9' => self.lex_number(),
            b'"' => {
                if self.bytes()[start..].starts_with(b"\"\"\"") {
                    self.lex_block_string()
                } else {
                    self.lex_string()
                }
            },
            _ => Err(self.lex_invalid_character()),
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Advances past whitespace, line breaks, commas, the BOM, and
    /// comments.
    fn skip_ignored(&mut self) {
        let bytes = self.bytes();
        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b' ' | b'\t' | b'\n' | b'\r' | b',' => self.pos += 1,
                b'#' => {
                    // comment runs to the end of the line, exclusive
                    self.pos = match memchr::memchr2(b'\n', b'\r', &bytes[self.pos..]) {
                        Some(found) => self.pos + found,
                        None => bytes.len(),
                    };
                },
                0xEF if bytes[self.pos..].starts_with(b"\xEF\xBB\xBF") => {
                    // byte-order mark, ignored wherever it appears
                    self.pos += 3;
                },
                _ => break,
            }
        }
    }

    // =========================================================================
    // Names and numbers
    // =========================================================================

    fn lex_name(&mut self) -> Token<'src> {
        let start = self.pos;
        let bytes = self.bytes();
        self.pos += 1;
        while self.pos < bytes.len() && is_name_continue(bytes[self.pos]) {
            self.pos += 1;
        }
        self.value_token(TokenKind::Name, start)
    }

    /// Scans an `IntValue` or `FloatValue`: optional minus, integer
    /// part without leading zeros, optional fraction and exponent,
    /// each with at least one digit. No trailing-letter check: the
    /// text `123abc` is the token `Int "123"` followed by `Name
    /// "abc"`.
    fn lex_number(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.pos;
        let mut is_float = false;
        if self.byte_at(self.pos) == Some(b'-') {
            self.pos += 1;
        }
        if self.byte_at(self.pos) == Some(b'0') {
            self.pos += 1;
            if let Some(digit @ b'0'..=b'9') = self.byte_at(self.pos) {
                return Err(self.error(
                    self.pos,
                    format!(
                        "Invalid number, unexpected digit after 0: \"{}\"",
                        digit as char,
                    ),
                ));
            }
        } else {
            self.read_digits()?;
        }
        if self.byte_at(self.pos) == Some(b'.') {
            is_float = true;
            self.pos += 1;
            self.read_digits()?;
        }
        if matches!(self.byte_at(self.pos), Some(b'e' | b'E')) {
            is_float = true;
            self.pos += 1;
            if matches!(self.byte_at(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            self.read_digits()?;
        }
        let kind = if is_float { TokenKind::Float } else { TokenKind::Int };
        Ok(self.value_token(kind, start))
    }

    /// Consumes one or more ASCII digits, failing at the current
    /// offset when none are present.
    fn read_digits(&mut self) -> Result<(), SyntaxError> {
        if !matches!(self.byte_at(self.pos), Some(b'0'..=b'9')) {
            let got = match self.char_at(self.pos) {
                Some(c) => format!("\"{}\"", describe_character(c)),
                None => "<EOF>".to_string(),
            };
            return Err(self.error(
                self.pos,
                format!("Invalid number, expected digit but got: {got}"),
            ));
        }
        while matches!(self.byte_at(self.pos), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        Ok(())
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Scans a quoted string, decoding escapes as it goes. The token
    /// value borrows from the source unless an escape forced an owned
    /// copy.
    fn lex_string(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.pos;
        self.pos += 1;
        let mut chunk_start = self.pos;
        let mut decoded: Option<String> = None;
        loop {
            let Some(c) = self.char_at(self.pos) else {
                return Err(self.error(self.text.len(), "Unterminated string."));
            };
            match c {
                '\n' | '\r' => {
                    return Err(self.error(self.pos, "Unterminated string."));
                },
                '"' => {
                    let value = match decoded {
                        None => Cow::Borrowed(&self.text[chunk_start..self.pos]),
                        Some(mut s) => {
                            s.push_str(&self.text[chunk_start..self.pos]);
                            Cow::Owned(s)
                        },
                    };
                    self.pos += 1;
                    return Ok(Token {
                        kind: TokenKind::String,
                        start,
                        end: self.pos,
                        value: Some(value),
                    });
                },
                '\\' => {
                    let mut s = decoded.take().unwrap_or_default();
                    s.push_str(&self.text[chunk_start..self.pos]);
                    self.pos += 1;
                    self.read_escape(&mut s)?;
                    chunk_start = self.pos;
                    decoded = Some(s);
                },
                c if (c as u32) < 0x20 && c != '\t' => {
                    return Err(self.error(
                        self.pos,
                        format!(
                            "Invalid character within String: {}.",
                            unicode_escape(c),
                        ),
                    ));
                },
                c => self.pos += c.len_utf8(),
            }
        }
    }

    /// Decodes one escape sequence onto `out`. On entry `pos` is at
    /// the character after the backslash, which is also where any
    /// escape error is reported.
    fn read_escape(&mut self, out: &mut String) -> Result<(), SyntaxError> {
        let at = self.pos;
        let Some(c) = self.char_at(at) else {
            // backslash at end of input: the string never closes
            return Err(self.error(self.text.len(), "Unterminated string."));
        };
        let simple = match c {
            '"' => Some('"'),
            '\\' => Some('\\'),
            '/' => Some('/'),
            'b' => Some('\u{0008}'),
            'f' => Some('\u{000C}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            _ => None,
        };
        if let Some(decoded) = simple {
            out.push(decoded);
            self.pos += 1;
            return Ok(());
        }
        if c == 'u' {
            // exactly four hex digits; surrogate code points cannot
            // be represented and fail like malformed escapes
            if let Some(decoded) = self.read_hex4(at + 1).and_then(char::from_u32) {
                out.push(decoded);
                self.pos = at + 5;
                return Ok(());
            }
            let echoed: String = match self.text.get(at + 1..) {
                Some(rest) => rest.chars().take(4).collect(),
                None => String::new(),
            };
            return Err(self.error(
                at,
                format!("Invalid character escape sequence: \\u{echoed}."),
            ));
        }
        Err(self.error(
            at,
            format!(
                "Invalid character escape sequence: \\{}.",
                describe_character(c),
            ),
        ))
    }

    fn read_hex4(&self, start: usize) -> Option<u32> {
        let bytes = self.bytes();
        let mut code: u32 = 0;
        for i in 0..4 {
            let digit = (*bytes.get(start + i)? as char).to_digit(16)?;
            code = code * 16 + digit;
        }
        Some(code)
    }

    /// Scans a triple-quoted block string. Tabs and line breaks are
    /// allowed raw; `\"""` contributes a literal `"""`; the token
    /// value is the contents run through [`block_string_value`].
    fn lex_block_string(&mut self) -> Result<Token<'src>, SyntaxError> {
        let start = self.pos;
        self.pos += 3;
        let mut chunk_start = self.pos;
        let mut raw: Option<String> = None;
        loop {
            let Some(c) = self.char_at(self.pos) else {
                return Err(self.error(self.text.len(), "Unterminated string."));
            };
            if c == '"' && self.bytes()[self.pos..].starts_with(b"\"\"\"") {
                let contents = match raw {
                    None => Cow::Borrowed(&self.text[chunk_start..self.pos]),
                    Some(mut s) => {
                        s.push_str(&self.text[chunk_start..self.pos]);
                        Cow::Owned(s)
                    },
                };
                self.pos += 3;
                return Ok(Token {
                    kind: TokenKind::BlockString,
                    start,
                    end: self.pos,
                    value: Some(Cow::Owned(block_string_value(&contents))),
                });
            }
            if c == '\\' && self.bytes()[self.pos + 1..].starts_with(b"\"\"\"") {
                let mut s = raw.take().unwrap_or_default();
                s.push_str(&self.text[chunk_start..self.pos]);
                s.push_str("\"\"\"");
                self.pos += 4;
                chunk_start = self.pos;
                raw = Some(s);
                continue;
            }
            if (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r') {
                return Err(self.error(
                    self.pos,
                    format!("Invalid character within String: {}.", unicode_escape(c)),
                ));
            }
            self.pos += c.len_utf8();
        }
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Builds the error for a character that cannot begin any token.
    fn lex_invalid_character(&self) -> SyntaxError {
        let at = self.pos;
        // A literal `\uXXXX` in the source (outside any string)
        // echoes its six raw characters, case preserved.
        if let Some(echo) = self.raw_escape_echo(at) {
            return self.error(at, format!("Unexpected character \"{echo}\""));
        }
        let rendered = self
            .char_at(at)
            .map(describe_character)
            .unwrap_or_default();
        self.error(at, format!("Unexpected character \"{rendered}\""))
    }

    fn raw_escape_echo(&self, at: usize) -> Option<&'src str> {
        let bytes = self.bytes();
        if bytes.get(at) != Some(&b'\\') || bytes.get(at + 1) != Some(&b'u') {
            return None;
        }
        let hex = bytes.get(at + 2..at + 6)?;
        if hex.iter().all(u8::is_ascii_hexdigit) {
            Some(&self.text[at..at + 6])
        } else {
            None
        }
    }

    fn error<D: Into<String>>(&self, at: usize, description: D) -> SyntaxError {
        SyntaxError::new(self.source, at, description)
    }

    // =========================================================================
    // Cursor primitives
    // =========================================================================

    fn bytes(&self) -> &'src [u8] {
        self.text.as_bytes()
    }

    fn byte_at(&self, at: usize) -> Option<u8> {
        self.bytes().get(at).copied()
    }

    fn char_at(&self, at: usize) -> Option<char> {
        self.text.get(at..)?.chars().next()
    }

    fn punctuator(&mut self, kind: TokenKind) -> Token<'src> {
        let start = self.pos;
        self.pos += 1;
        Token::punctuator(kind, start, self.pos)
    }

    fn value_token(&self, kind: TokenKind, start: usize) -> Token<'src> {
        Token {
            kind,
            start,
            end: self.pos,
            value: Some(Cow::Borrowed(&self.text[start..self.pos])),
        }
    }
}

// =============================================================================
// Character classes and rendering
// =============================================================================

fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

/// Renders a character for an error message: printable ASCII as
/// itself, anything else as `\uXXXX` with uppercase hex (astral code
/// points as a UTF-16 surrogate pair).
fn describe_character(c: char) -> String {
    if matches!(c, ' '..='~') {
        c.to_string()
    } else {
        unicode_escape(c)
    }
}

fn unicode_escape(c: char) -> String {
    let mut units = [0u16; 2];
    c.encode_utf16(&mut units)
        .iter()
        .map(|unit| format!("\\u{unit:04X}"))
        .collect()
}

/// Produces the semantic value of a block string: strips the common
/// indentation of every line after the first, then drops leading and
/// trailing blank lines, joining what remains with `\n`.
pub(crate) fn block_string_value(raw: &str) -> String {
    let lines = split_block_lines(raw);
    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = leading_whitespace(line);
        if indent < line.len() && common_indent.is_none_or(|c| indent < c) {
            common_indent = Some(indent);
        }
    }
    let mut kept: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                *line
            } else {
                &line[common_indent.unwrap_or(0).min(line.len())..]
            }
        })
        .collect();
    while kept.first().is_some_and(|line| is_blank(line)) {
        kept.remove(0);
    }
    while kept.last().is_some_and(|line| is_blank(line)) {
        kept.pop();
    }
    kept.join("\n")
}

fn split_block_lines(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while let Some(found) = memchr::memchr2(b'\n', b'\r', &bytes[pos..]) {
        let at = pos + found;
        lines.push(&raw[start..at]);
        start = if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
            at + 2
        } else {
            at + 1
        };
        pos = start;
    }
    lines.push(&raw[start..]);
    lines
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| matches!(b, b' ' | b'\t'))
}
