use serde::Serialize;

/// Byte-offset span of an AST node or diagnostic.
///
/// Represents a half-open interval `[start, end)` of byte offsets into
/// the source text. Both offsets are 0-based and always lie on `char`
/// boundaries of the source, so the covered text can be recovered later
/// with [`Source::slice`](crate::Source::slice) for error reporting by
/// downstream validators and executors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Location {
    /// Byte offset of the first byte of the node (0-based, inclusive).
    pub start: usize,
    /// Byte offset one past the last byte of the node (0-based,
    /// exclusive).
    pub end: usize,
}

impl Location {
    /// Creates a new `Location` from start (inclusive) and end
    /// (exclusive) byte offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
