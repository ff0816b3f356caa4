//! Read position over the decoded input.

/// An immutable character buffer plus a read position.
///
/// Grammar rules receive a `Cursor` by value and hand the advanced copy back
/// through their `Ok` result; a failing rule reports only the failure
/// offset, never a moved cursor. Invariant: `pos <= buf.len()`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    buf: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [char]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The current character offset.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// The character at the read position, without advancing.
    pub(crate) fn peek(&self) -> Option<char> {
        self.buf.get(self.pos).copied()
    }

    /// The character `n` places past the read position.
    pub(crate) fn peek_at(&self, n: usize) -> Option<char> {
        self.buf.get(self.pos + n).copied()
    }

    /// Consumes and returns the character at the read position.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Whether the input at the read position starts with `literal`.
    ///
    /// This is the fixed-width lookahead used for keyword matching; it does
    /// not advance the cursor.
    pub(crate) fn matches(&self, literal: &str) -> bool {
        let mut i = self.pos;
        for c in literal.chars() {
            if self.buf.get(i) != Some(&c) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Advances past `n` characters, clamped to the end of the buffer.
    pub(crate) fn advance_by(&mut self, n: usize) {
        self.pos = usize::min(self.pos + n, self.buf.len());
    }

    /// Skips the JSON whitespace characters: space, tab, line feed, and
    /// carriage return. No other characters count as whitespace.
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.pos += 1;
        }
    }
}
