use crate::Location;
use crate::Source;
use smallvec::SmallVec;

/// Error produced when a document fails to lex or parse.
///
/// Lexing and parsing stop at the first error; there is exactly one
/// error kind and one of these per failed parse. The formatted
/// [`message`](SyntaxError::message) (also the `Display` output) is a
/// compatibility surface shared with the reference GraphQL
/// implementations:
///
/// ```text
/// Syntax Error GraphQL (1:2) Unterminated string.
/// 0:
/// 1: "
///    ^
/// 2:
/// ```
///
/// The header carries the 1-based line and UTF-16 column; the context
/// block renders the error line with its neighbors and a caret (see
/// [`highlight_source_at`]). Reason strings carry their own terminal
/// punctuation; nothing may re-add or strip it.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    location: Location,
    line: usize,
    column: usize,
    description: String,
    message: String,
}

impl SyntaxError {
    /// Creates an error pointing at a single byte offset of `source`.
    pub fn new<D: Into<String>>(source: &Source<'_>, position: usize, description: D) -> Self {
        Self::spanned(source, Location::new(position, position), description)
    }

    /// Creates an error covering `location`, reported (and caret-ed)
    /// at its start offset. Downstream diagnostics over multi-token
    /// constructs can use this to keep the same rendering as the
    /// parser's own errors.
    pub fn spanned<D: Into<String>>(
        source: &Source<'_>,
        location: Location,
        description: D,
    ) -> Self {
        let description = description.into();
        let (line, column) = source.locate(location.start);
        let message = format!(
            "Syntax Error GraphQL ({line}:{column}) {description}\n{}",
            highlight_source_at(source, location.start),
        );
        Self {
            location,
            line,
            column,
            description,
            message,
        }
    }

    /// 0-based byte offset the error points at.
    pub fn position(&self) -> usize {
        self.location.start
    }

    /// The `[start, end)` byte span of the error. Lexer and parser
    /// errors are single points (`start == end`).
    pub fn location(&self) -> Location {
        self.location
    }

    /// 1-based line of [`position`](SyntaxError::position).
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based UTF-16 column of [`position`](SyntaxError::position).
    pub fn column(&self) -> usize {
        self.column
    }

    /// The bare reason, without header or context block.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The full formatted message: header line plus context block.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Renders the numbered-line context block for a byte offset.
///
/// The block shows the line containing `position` between its two
/// neighbors, each prefixed with `"{n}: "` (no padding), and a caret
/// row directly under the error line:
///
/// ```text
/// 1: query {
/// 2:   hero(
///      ^
/// 3: }
/// ```
///
/// Neighbor rows outside the text (line 0, or one past the last line)
/// keep their numbered prefix with empty text. The caret is indented
/// by the prefix width of the error line plus `column - 1` spaces;
/// rows are joined with `\n` and there is no trailing newline.
pub fn highlight_source_at(source: &Source<'_>, position: usize) -> String {
    let (line, column) = source.locate(position);
    let mut rows: SmallVec<[String; 4]> = SmallVec::new();
    rows.push(context_row(source, line - 1));
    rows.push(context_row(source, line));
    let indent = decimal_width(line) + 2 + (column - 1);
    rows.push(format!("{}^", " ".repeat(indent)));
    rows.push(context_row(source, line + 1));
    rows.join("\n")
}

fn context_row(source: &Source<'_>, line: usize) -> String {
    format!("{line}: {}", source.line_text(line).unwrap_or_default())
}

fn decimal_width(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
