//! Scanner: the byte-level stepping shared by every operation.
//!
//! What it does
//! - Walks a borrowed byte slice forwards with `peek()`/`bump()` and the
//!   `consume_while*` loops, or measures runs from either end with the
//!   `*_run` helpers.
//! - Tracks only the current offset. Nothing is copied and the input is never
//!   indexed at or past its end; every read goes through `get`.
//!
//! Scope
//! - The scanner knows nothing about separators, brackets or output layouts.
//!   Callers decide what a byte means and record the offsets they need.
//!
//! Invariants
//! - `0 <= pos <= bytes.len()` at all times.

use bstr::ByteSlice;

/// The bytes [`trim`](crate::trim) treats as whitespace.
///
/// These are the six C-locale blanks: space, horizontal tab, line feed,
/// vertical tab, form feed and carriage return. Unicode whitespace is left
/// alone.
pub const BLANKS: &[u8; 6] = b" \t\n\x0B\x0C\r";

/// Returns `true` if `b` is one of the [`BLANKS`].
#[inline]
#[must_use]
pub const fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Number of leading blanks in `bytes`.
#[inline]
pub(crate) fn leading_blank_run(bytes: &[u8]) -> usize {
    bytes.find_not_byteset(BLANKS).unwrap_or(bytes.len())
}

/// Number of trailing blanks in `bytes`.
#[inline]
pub(crate) fn trailing_blank_run(bytes: &[u8]) -> usize {
    bytes
        .rfind_not_byteset(BLANKS)
        .map_or(bytes.len(), |last| bytes.len() - last - 1)
}

/// A forward cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'src> {
    bytes: &'src [u8],
    pos: usize,
}

impl<'src> Scanner<'src> {
    #[inline]
    pub(crate) fn new(bytes: &'src [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// The next byte, without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consumes and returns the next byte.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consumes bytes while `pred` holds and returns how many were consumed.
    #[inline]
    pub(crate) fn consume_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consumes bytes up to (not including) the first one matching `pred`.
    ///
    /// Returns the offset of that byte, or `None` with the cursor at end of
    /// input when no byte matches.
    #[inline]
    pub(crate) fn consume_until(&mut self, pred: impl Fn(u8) -> bool) -> Option<usize> {
        self.consume_while(|b| !pred(b));
        if self.is_eof() { None } else { Some(self.pos) }
    }
}
