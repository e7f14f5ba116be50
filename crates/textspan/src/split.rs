use core::iter::FusedIterator;

use crate::{
    SeparatorSet, SplitOptions, TrimSpan, View,
    scanner::Scanner,
    trim::trim_span,
};

/// Boundaries found by [`split`].
///
/// The view is laid out as `left`, then the separator match, then `right`:
///
/// ```text
///  "  key  =  value "
///   |--left--|=|--right---|
/// ```
///
/// `left_trim` and `right_trim` locate the blank-trimmed core of each part,
/// relative to that part's own start. When no separator is found,
/// `separator` is `None`, `left` covers the whole view and `right` is empty.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SplitSpan {
    /// Length of the part before the separator.
    pub left: usize,
    /// Length of the separator match, or `None` if no separator was found.
    pub separator: Option<usize>,
    /// Length of the part after the separator.
    pub right: usize,
    /// Trimmed core of the left part, relative to offset 0.
    pub left_trim: TrimSpan,
    /// Trimmed core of the right part, relative to [`Self::right_start`].
    pub right_trim: TrimSpan,
}

impl SplitSpan {
    /// Returns `true` if a separator was found.
    #[inline]
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.separator.is_some()
    }

    /// Length of the separator match, zero when absent.
    #[inline]
    #[must_use]
    pub const fn separator_len(&self) -> usize {
        match self.separator {
            Some(n) => n,
            None => 0,
        }
    }

    /// Offset where the right part starts.
    #[inline]
    #[must_use]
    pub const fn right_start(&self) -> usize {
        self.left + self.separator_len()
    }

    /// The part before the separator.
    #[inline]
    pub fn left_view<'a, V: View + ?Sized>(&self, view: &'a V) -> &'a V {
        view.cut(0..self.left)
    }

    /// The separator match itself.
    #[inline]
    pub fn separator_view<'a, V: View + ?Sized>(&self, view: &'a V) -> Option<&'a V> {
        self.separator.map(|n| view.cut(self.left..self.left + n))
    }

    /// The part after the separator.
    #[inline]
    pub fn right_view<'a, V: View + ?Sized>(&self, view: &'a V) -> &'a V {
        let start = self.right_start();
        view.cut(start..start + self.right)
    }

    /// The left part with surrounding blanks removed.
    #[inline]
    pub fn left_trimmed<'a, V: View + ?Sized>(&self, view: &'a V) -> &'a V {
        self.left_trim.apply(view)
    }

    /// The right part with surrounding blanks removed.
    #[inline]
    pub fn right_trimmed<'a, V: View + ?Sized>(&self, view: &'a V) -> &'a V {
        let start = self.right_start() + self.right_trim.lead;
        view.cut(start..start + self.right_trim.len)
    }

    /// The span as the positional layout `[left, separator, right,
    /// left_trimmed, right_trimmed]`, with an absent separator as `0`.
    #[inline]
    #[must_use]
    pub const fn to_lengths(&self) -> [usize; 5] {
        [
            self.left,
            self.separator_len(),
            self.right,
            self.left_trim.len,
            self.right_trim.len,
        ]
    }

    /// Checks that this span exactly tiles a view of `total` bytes.
    ///
    /// # Panics
    ///
    /// Panics if the parts do not add up to `total` or a trimmed core falls
    /// outside its part.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn assert_invariants(&self, total: usize) {
        assert_eq!(
            self.left + self.separator_len() + self.right,
            total,
            "parts of {self:?} do not tile {total} bytes"
        );
        assert_ne!(self.separator, Some(0), "present separator is empty");
        if self.separator.is_none() {
            assert_eq!(self.right, 0, "right part without a separator");
        }
        self.left_trim.assert_invariants(self.left);
        self.right_trim.assert_invariants(self.right);
    }
}

/// Splits `view` at the first separator with default [`SplitOptions`].
///
/// Returns the left part and the full [`SplitSpan`]; the right part is
/// [`SplitSpan::right_view`]. A run of adjacent separators counts as one
/// delimiter.
///
/// ```rust
/// use textspan::{SeparatorSet, split};
///
/// let set = SeparatorSet::from_static(b",");
/// let (left, span) = split("a,,b", &set);
/// assert_eq!(left, "a");
/// assert_eq!(span.separator, Some(2));
/// assert_eq!(span.right_view("a,,b"), "b");
///
/// let (left, span) = split("no separator", &set);
/// assert_eq!(left, "no separator");
/// assert_eq!(span.to_lengths()[1], 0);
/// ```
pub fn split<'a, V: View + ?Sized>(view: &'a V, set: &SeparatorSet) -> (&'a V, SplitSpan) {
    split_with(view, set, SplitOptions::default())
}

/// Splits `view` at the first separator, as configured by `options`.
pub fn split_with<'a, V: View + ?Sized>(
    view: &'a V,
    set: &SeparatorSet,
    options: SplitOptions,
) -> (&'a V, SplitSpan) {
    let span = split_span(view.raw_bytes(), set, options);
    trace!(?span, ?set, "split");
    (span.left_view(view), span)
}

fn split_span(bytes: &[u8], set: &SeparatorSet, options: SplitOptions) -> SplitSpan {
    let mut s = Scanner::new(bytes);
    let Some(at) = s.consume_until(|b| set.contains(b)) else {
        return SplitSpan {
            left: bytes.len(),
            separator: None,
            right: 0,
            left_trim: trim_span(bytes),
            right_trim: TrimSpan::default(),
        };
    };

    let run = if options.keep_empty_segments {
        s.bump();
        1
    } else {
        s.consume_while(|b| set.contains(b))
    };
    let right_start = s.pos();

    SplitSpan {
        left: at,
        separator: Some(run),
        right: s.len() - right_start,
        left_trim: trim_span(&bytes[..at]),
        right_trim: trim_span(&bytes[right_start..]),
    }
}

/// Iterates over every segment of `view` between separators.
///
/// Each step is one [`split_with`] of what the previous step left over, so
/// the whole walk is a single pass. The part after the last separator is
/// always yielded, even when empty; empty input yields one empty segment.
///
/// ```rust
/// use textspan::{SeparatorSet, SplitOptions, segments};
///
/// let set = SeparatorSet::from_static(b",");
/// let parts: Vec<_> = segments("a,,b,", &set, SplitOptions::default()).collect();
/// assert_eq!(parts, ["a", "b", ""]);
///
/// let keep = SplitOptions { keep_empty_segments: true, ..Default::default() };
/// let parts: Vec<_> = segments("a,,b", &set, keep).collect();
/// assert_eq!(parts, ["a", "", "b"]);
///
/// let trimmed = SplitOptions { trim_segments: true, ..Default::default() };
/// let parts: Vec<_> = segments(" x , y ", &set, trimmed).collect();
/// assert_eq!(parts, ["x", "y"]);
/// ```
pub fn segments<'a, V: View + ?Sized>(
    view: &'a V,
    set: &SeparatorSet,
    options: SplitOptions,
) -> Segments<'a, V> {
    Segments {
        rest: Some(view),
        set: *set,
        options,
    }
}

/// Iterator returned by [`segments`].
#[derive(Debug)]
pub struct Segments<'a, V: ?Sized> {
    rest: Option<&'a V>,
    set: SeparatorSet,
    options: SplitOptions,
}

impl<'a, V: View + ?Sized> Segments<'a, V> {
    /// The part of the input not yet yielded.
    #[must_use]
    pub fn remainder(&self) -> Option<&'a V> {
        self.rest
    }
}

impl<V: ?Sized> Clone for Segments<'_, V> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest,
            set: self.set,
            options: self.options,
        }
    }
}

impl<'a, V: View + ?Sized> Iterator for Segments<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        let rest = self.rest?;
        let span = split_span(rest.raw_bytes(), &self.set, self.options);
        self.rest = span.is_split().then(|| span.right_view(rest));
        Some(if self.options.trim_segments {
            span.left_trimmed(rest)
        } else {
            span.left_view(rest)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.rest {
            Some(rest) => (1, Some(rest.byte_len() + 1)),
            None => (0, Some(0)),
        }
    }
}

impl<V: View + ?Sized> FusedIterator for Segments<'_, V> {}
