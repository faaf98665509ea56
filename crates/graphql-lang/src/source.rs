use crate::Location;
use std::sync::OnceLock;

/// A GraphQL source text with lazy line/column lookup.
///
/// Wraps a borrowed `&str` and builds a newline index the first time a
/// byte offset needs to be resolved to a `(line, column)` pair. Lexing
/// and parsing a well-formed document never touches the index; only
/// diagnostics (and callers mapping node [`Location`]s back to the
/// text) pay for it.
///
/// Columns are counted in UTF-16 code units, matching the host-string
/// semantics of the reference GraphQL implementations, so a `(line,
/// column)` pair reported here lines up with what JavaScript- and
/// C#-based tooling reports for the same text. Offsets, in contrast,
/// are always UTF-8 byte offsets.
///
/// Line breaks are `\n`, `\r\n` (a single break), and lone `\r`.
/// U+2028 and U+2029 are ordinary characters, not line breaks.
#[derive(Clone, Debug)]
pub struct Source<'src> {
    text: &'src str,
    line_starts: OnceLock<Vec<usize>>,
}

impl<'src> Source<'src> {
    /// Creates a new `Source` over `text`. No scanning happens until
    /// the first lookup.
    pub fn new<S: AsRef<str> + ?Sized>(text: &'src S) -> Self {
        Self {
            text: text.as_ref(),
            line_starts: OnceLock::new(),
        }
    }

    /// The wrapped source text.
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Resolves a byte offset to a 1-based `(line, column)` pair. The
    /// column is counted in UTF-16 code units from the start of the
    /// line, plus one.
    ///
    /// `offset` may be anywhere in `0..=text.len()`; `text.len()`
    /// resolves to one past the last character of the last line.
    pub fn locate(&self, offset: usize) -> (usize, usize) {
        let starts = self.line_starts();
        let line_index = match starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let prefix = &self.text.as_bytes()[starts[line_index]..offset.min(self.text.len())];
        (line_index + 1, utf16_len(prefix) + 1)
    }

    /// Number of lines in the text. An empty source has one (empty)
    /// line.
    pub fn line_count(&self) -> usize {
        self.line_starts().len()
    }

    /// Text of the 1-based line `line`, without its terminating line
    /// break, or `None` if the text has no such line.
    pub fn line_text(&self, line: usize) -> Option<&'src str> {
        let starts = self.line_starts();
        if line == 0 || line > starts.len() {
            return None;
        }
        let start = starts[line - 1];
        let end = match starts.get(line) {
            Some(&next) => {
                let bytes = self.text.as_bytes();
                if next >= 2 && bytes[next - 1] == b'\n' && bytes[next - 2] == b'\r' {
                    next - 2
                } else {
                    next - 1
                }
            },
            None => self.text.len(),
        };
        Some(&self.text[start..end])
    }

    /// The text covered by `location`. The span must have been
    /// produced against this source (offsets on `char` boundaries).
    pub fn slice(&self, location: Location) -> &'src str {
        &self.text[location.start..location.end]
    }

    fn line_starts(&self) -> &[usize] {
        self.line_starts
            .get_or_init(|| build_line_starts(self.text.as_bytes()))
    }
}

/// Byte offsets at which each line begins. Always starts with 0; a
/// `\r\n` pair counts as one break.
fn build_line_starts(bytes: &[u8]) -> Vec<usize> {
    let mut starts = vec![0];
    let mut pos = 0;
    while let Some(found) = memchr::memchr2(b'\n', b'\r', &bytes[pos..]) {
        let at = pos + found;
        let next = if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
            at + 2
        } else {
            at + 1
        };
        starts.push(next);
        pos = next;
    }
    starts
}

/// UTF-16 length of a UTF-8 byte slice, computed from leading bytes
/// alone so the slice may end mid-character without panicking.
fn utf16_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .map(|&b| match b {
            0x00..=0x7F => 1,
            0x80..=0xBF => 0,
            0xC0..=0xEF => 1,
            // 4-byte sequence lead: astral code point, two UTF-16 units
            _ => 2,
        })
        .sum()
}
