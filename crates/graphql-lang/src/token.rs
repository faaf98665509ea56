use std::borrow::Cow;
use std::fmt;

/// Kind tag of a [`Token`].
///
/// Punctuators and `Eof` carry no value; `Name`, `Int`, `Float`,
/// `String`, and `BlockString` tokens carry one in
/// [`Token::value`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Eof,
    Bang,
    Dollar,
    ParenL,
    ParenR,
    Spread,
    Colon,
    Equals,
    At,
    BracketL,
    BracketR,
    BraceL,
    Pipe,
    BraceR,
    Name,
    Int,
    Float,
    String,
    BlockString,
}

impl TokenKind {
    /// Human-readable description used verbatim in error messages:
    /// punctuators render as their literal text, the rest as a word.
    pub fn description(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Bang => "!",
            TokenKind::Dollar => "$",
            TokenKind::ParenL => "(",
            TokenKind::ParenR => ")",
            TokenKind::Spread => "...",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::At => "@",
            TokenKind::BracketL => "[",
            TokenKind::BracketR => "]",
            TokenKind::BraceL => "{",
            TokenKind::Pipe => "|",
            TokenKind::BraceR => "}",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A single lexical token.
///
/// `start..end` is the half-open byte range of the token in the source
/// text. `value` is the raw slice for names and numbers and the
/// *decoded* contents for strings (escape sequences processed, block
/// quotes and indentation stripped); it borrows from the source unless
/// decoding had to change the text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub value: Option<Cow<'src, str>>,
}

impl<'src> Token<'src> {
    pub(crate) fn punctuator(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            value: None,
        }
    }

    pub(crate) fn eof(at: usize) -> Self {
        Self::punctuator(TokenKind::Eof, at, at)
    }

    /// Byte length of the token text.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for zero-length tokens (only `Eof`).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Tokens display as their kind description, followed by the value in
/// double quotes when one is present: `Name "hero"`, `Int "42"`, `}`.
/// Error messages embed this rendering verbatim.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} \"{value}\"", self.kind),
            None => f.write_str(self.kind.description()),
        }
    }
}
