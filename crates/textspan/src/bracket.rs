use core::fmt;

use crate::{BracketOptions, ScanError, View, scanner::Scanner};

/// A recognized bracket pair.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    /// `(` `)`
    Paren,
    /// `[` `]`
    Square,
    /// `{` `}`
    Curly,
}

impl BracketKind {
    /// The opening byte.
    #[must_use]
    pub const fn open(self) -> u8 {
        match self {
            BracketKind::Paren => b'(',
            BracketKind::Square => b'[',
            BracketKind::Curly => b'{',
        }
    }

    /// The closing byte.
    #[must_use]
    pub const fn close(self) -> u8 {
        match self {
            BracketKind::Paren => b')',
            BracketKind::Square => b']',
            BracketKind::Curly => b'}',
        }
    }

    /// The kind `b` opens, if `options` enables it.
    #[must_use]
    pub const fn opened_by(b: u8, options: BracketOptions) -> Option<Self> {
        match b {
            b'(' if options.parens => Some(BracketKind::Paren),
            b'[' if options.squares => Some(BracketKind::Square),
            b'{' if options.braces => Some(BracketKind::Curly),
            _ => None,
        }
    }
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.open() as char, self.close() as char)
    }
}

/// Well-formedness of a bracket expression.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Balance {
    /// No opening bracket was found.
    #[default]
    Absent,
    /// The outermost bracket was closed.
    Balanced,
    /// Input ended with `depth` brackets still open.
    Unclosed {
        /// Open brackets left at end of input, at least 1.
        depth: usize,
    },
}

impl Balance {
    /// Returns `true` for [`Balance::Balanced`].
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self, Balance::Balanced)
    }
}

/// Boundaries found by [`split_bracket`].
///
/// The view is laid out as `head`, `open`, `body`, `close`, `remainder`:
///
/// ```text
///  "f(a,(b,c))!"
///   h(bbbbbbb)r
/// ```
///
/// - No opening bracket: `head` is the whole view, the bracket fields are
///   `None`, `remainder` is 0 and `balance` is [`Balance::Absent`].
/// - Unclosed: `open` is `Some(1)`, `body` runs to end of input, `close` is
///   `None`, `remainder` is 0 and `balance` is [`Balance::Unclosed`]. No
///   closing bracket is guessed; check `balance` before trusting `body`.
///
/// In every case the present lengths add up to the view's length.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BracketSpan {
    /// Length before the opening bracket.
    pub head: usize,
    /// Length of the opening bracket.
    pub open: Option<usize>,
    /// Length strictly between the matched brackets, nested pairs included.
    pub body: Option<usize>,
    /// Length of the closing bracket.
    pub close: Option<usize>,
    /// Length after the closing bracket.
    pub remainder: usize,
    /// Whether the expression was closed.
    pub balance: Balance,
    /// The pair that was matched.
    pub kind: Option<BracketKind>,
}

impl BracketSpan {
    const fn absent(len: usize) -> Self {
        Self {
            head: len,
            open: None,
            body: None,
            close: None,
            remainder: 0,
            balance: Balance::Absent,
            kind: None,
        }
    }

    /// Offset of the opening bracket, if any.
    #[inline]
    #[must_use]
    pub const fn open_at(&self) -> Option<usize> {
        match self.open {
            Some(_) => Some(self.head),
            None => None,
        }
    }

    /// Offset of the first body byte, if any.
    #[inline]
    #[must_use]
    pub const fn body_start(&self) -> Option<usize> {
        match self.open {
            Some(n) => Some(self.head + n),
            None => None,
        }
    }

    /// Offset of the first remainder byte.
    #[inline]
    #[must_use]
    pub const fn remainder_start(&self) -> usize {
        let mut at = self.head;
        if let Some(n) = self.open {
            at += n;
        }
        if let Some(n) = self.body {
            at += n;
        }
        if let Some(n) = self.close {
            at += n;
        }
        at
    }

    /// The part before the opening bracket.
    #[inline]
    pub fn head_view<'a, V: View + ?Sized>(&self, view: &'a V) -> &'a V {
        view.cut(0..self.head)
    }

    /// The bracket body, without the brackets themselves.
    #[inline]
    pub fn body_view<'a, V: View + ?Sized>(&self, view: &'a V) -> Option<&'a V> {
        let start = self.body_start()?;
        self.body.map(|n| view.cut(start..start + n))
    }

    /// The part after the closing bracket.
    #[inline]
    pub fn remainder_view<'a, V: View + ?Sized>(&self, view: &'a V) -> &'a V {
        let start = self.remainder_start();
        view.cut(start..start + self.remainder)
    }

    /// Returns the span if the expression is closed or absent.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::UnclosedBracket`] when input ended inside the
    /// bracket expression.
    pub fn check(self) -> Result<Self, ScanError> {
        match (self.balance, self.kind) {
            (Balance::Unclosed { depth }, Some(kind)) => Err(ScanError::UnclosedBracket {
                kind,
                open_at: self.head,
                depth,
            }),
            _ => Ok(self),
        }
    }

    /// The span as the positional layout `[head, open, body, close,
    /// remainder, validity]`.
    ///
    /// Validity is `None` when no bracket was found, `Some(0)` when the
    /// expression is unclosed and `Some(1)` when it is balanced.
    #[must_use]
    pub const fn to_lengths(&self) -> [Option<usize>; 6] {
        let validity = match self.balance {
            Balance::Absent => None,
            Balance::Balanced => Some(1),
            Balance::Unclosed { .. } => Some(0),
        };
        [
            Some(self.head),
            self.open,
            self.body,
            self.close,
            Some(self.remainder),
            validity,
        ]
    }

    /// Checks that this span exactly tiles a view of `total` bytes and that
    /// its fields agree with `balance`.
    ///
    /// # Panics
    ///
    /// Panics on any inconsistency.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn assert_invariants(&self, total: usize) {
        assert_eq!(
            self.remainder_start() + self.remainder,
            total,
            "parts of {self:?} do not tile {total} bytes"
        );
        match self.balance {
            Balance::Absent => {
                assert_eq!(*self, Self::absent(total), "absent bracket with fields set");
            }
            Balance::Balanced => {
                assert_eq!(self.open, Some(1));
                assert_eq!(self.close, Some(1));
                assert!(self.body.is_some() && self.kind.is_some());
            }
            Balance::Unclosed { depth } => {
                assert!(depth >= 1, "unclosed with depth 0");
                assert_eq!(self.open, Some(1));
                assert_eq!(self.close, None);
                assert_eq!(self.remainder, 0);
                assert!(self.body.is_some() && self.kind.is_some());
            }
        }
    }
}

/// Splits `view` around its first bracket expression, recognizing all
/// bracket pairs.
///
/// Returns the head (everything before the opening bracket) and the full
/// [`BracketSpan`]. Nested brackets of the same kind are skipped over by
/// depth counting; other kinds inside the body are plain bytes.
///
/// ```rust
/// use textspan::{Balance, split_bracket};
///
/// let input = "f((a,b),c) rest";
/// let (head, span) = split_bracket(input);
/// assert_eq!(head, "f");
/// assert_eq!(span.body_view(input), Some("(a,b),c"));
/// assert_eq!(span.remainder_view(input), " rest");
///
/// let (head, span) = split_bracket("f(a,b");
/// assert_eq!(head, "f");
/// assert_eq!(span.balance, Balance::Unclosed { depth: 1 });
/// assert!(span.check().is_err());
/// ```
pub fn split_bracket<V: View + ?Sized>(view: &V) -> (&V, BracketSpan) {
    split_bracket_with(view, BracketOptions::default())
}

/// Splits `view` around its first bracket expression, recognizing only the
/// pairs enabled in `options`.
pub fn split_bracket_with<V: View + ?Sized>(view: &V, options: BracketOptions) -> (&V, BracketSpan) {
    let span = bracket_span(view.raw_bytes(), options);
    trace!(?span, "split_bracket");
    (span.head_view(view), span)
}

fn bracket_span(bytes: &[u8], options: BracketOptions) -> BracketSpan {
    let mut s = Scanner::new(bytes);
    let Some(head) = s.consume_until(|b| BracketKind::opened_by(b, options).is_some()) else {
        return BracketSpan::absent(bytes.len());
    };
    let Some(kind) = s.bump().and_then(|b| BracketKind::opened_by(b, options)) else {
        return BracketSpan::absent(bytes.len());
    };

    let body_start = s.pos();
    let mut depth = 1usize;
    while let Some(b) = s.peek() {
        if b == kind.open() {
            depth += 1;
        } else if b == kind.close() {
            depth -= 1;
            if depth == 0 {
                let body = s.pos() - body_start;
                s.bump();
                return BracketSpan {
                    head,
                    open: Some(1),
                    body: Some(body),
                    close: Some(1),
                    remainder: s.len() - s.pos(),
                    balance: Balance::Balanced,
                    kind: Some(kind),
                };
            }
        }
        s.bump();
    }

    BracketSpan {
        head,
        open: Some(1),
        body: Some(s.len() - body_start),
        close: None,
        remainder: 0,
        balance: Balance::Unclosed { depth },
        kind: Some(kind),
    }
}
