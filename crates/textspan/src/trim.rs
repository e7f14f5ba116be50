use core::ops::Range;

use crate::{
    View,
    scanner::{leading_blank_run, trailing_blank_run},
};

/// Where the non-blank core of a view sits.
///
/// `lead` is the number of leading blanks skipped, `len` the length of what is
/// left once trailing blanks are dropped too. The trimmed view is
/// `view[lead..lead + len]`.
///
/// An all-blank view has nothing to keep: `lead` is the full length and `len`
/// is zero, so the trimmed view is the empty tail of the input.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TrimSpan {
    /// Leading blanks skipped.
    pub lead: usize,
    /// Length of the trimmed core.
    pub len: usize,
}

impl TrimSpan {
    /// Byte range of the trimmed core.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.lead..self.lead + self.len
    }

    /// Trailing blanks dropped from a view of `total` bytes.
    #[inline]
    #[must_use]
    pub const fn trail(&self, total: usize) -> usize {
        total.saturating_sub(self.lead + self.len)
    }

    /// Returns `true` if nothing is left after trimming.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cuts the trimmed core out of the view this span was computed from.
    ///
    /// # Panics
    ///
    /// Panics if `view` is shorter than `lead + len`.
    #[inline]
    pub fn apply<'a, V: View + ?Sized>(&self, view: &'a V) -> &'a V {
        view.cut(self.range())
    }

    /// The span as a positional `[lead, len]` pair.
    #[inline]
    #[must_use]
    pub const fn to_lengths(&self) -> [usize; 2] {
        [self.lead, self.len]
    }

    /// Checks that this span fits a view of `total` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the span reaches past `total`.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn assert_invariants(&self, total: usize) {
        assert!(self.lead <= total, "lead {} past end {total}", self.lead);
        assert!(
            self.lead + self.len <= total,
            "core {:?} past end {total}",
            self.range()
        );
    }
}

/// Strips leading and trailing [`BLANKS`](crate::BLANKS).
///
/// Returns the trimmed view and its [`TrimSpan`]. Trimming is total: empty
/// input gives `lead == len == 0` and returns the input itself.
///
/// ```rust
/// use textspan::{TrimSpan, trim};
///
/// assert_eq!(trim(" \tcmd\r\n"), ("cmd", TrimSpan { lead: 2, len: 3 }));
/// assert_eq!(trim("   "), ("", TrimSpan { lead: 3, len: 0 }));
/// assert_eq!(trim(b"".as_slice()).1, TrimSpan::default());
/// ```
pub fn trim<V: View + ?Sized>(view: &V) -> (&V, TrimSpan) {
    let span = trim_span(view.raw_bytes());
    trace!(?span, "trim");
    (span.apply(view), span)
}

pub(crate) fn trim_span(bytes: &[u8]) -> TrimSpan {
    let lead = leading_blank_run(bytes);
    let rest = &bytes[lead..];
    TrimSpan {
        lead,
        len: rest.len() - trailing_blank_run(rest),
    }
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", 0, 0)]
    #[case("abc", 0, 3)]
    #[case("  abc", 2, 3)]
    #[case("abc  ", 0, 3)]
    #[case("\t a b \n", 2, 3)]
    #[case(" ", 1, 0)]
    #[case("\x0B\x0C\r\n", 4, 0)]
    #[case("x", 0, 1)]
    fn trim_cases(#[case] input: &str, #[case] lead: usize, #[case] len: usize) {
        let (view, span) = trim(input);
        assert_eq!(span, TrimSpan { lead, len });
        assert_eq!(view, &input[lead..lead + len]);
        assert_eq!(span.trail(input.len()), input.len() - lead - len);
        span.assert_invariants(input.len());
    }

    #[test]
    fn trimmed_view_is_a_subslice_of_the_input() {
        let input = String::from("  keep me  ");
        let (view, _) = trim(input.as_str());
        let base = input.as_ptr() as usize;
        assert_eq!(view.as_ptr() as usize - base, 2);
    }

    #[test]
    fn multibyte_content_is_untouched() {
        assert_eq!(trim(" \u{a0}é \u{3000} ").0, "\u{a0}é \u{3000}");
    }

    #[test]
    fn to_lengths_is_lead_then_len() {
        assert_eq!(trim(" ab ").1.to_lengths(), [1, 2]);
    }
}
