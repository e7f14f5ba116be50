use core::ops::Range;

use bstr::BStr;

mod sealed {
    pub trait Sealed {}

    impl Sealed for [u8] {}
    impl Sealed for str {}
    impl Sealed for bstr::BStr {}
}

/// A borrowed, contiguous run of bytes that can be cut into sub-views of the
/// same type.
///
/// Implemented for `[u8]`, `str` and [`BStr`]. Every boundary produced by this
/// crate sits next to an ASCII byte, which never occurs inside a multi-byte
/// UTF-8 sequence, so cutting a `str` at those boundaries always lands on a
/// char boundary.
pub trait View: sealed::Sealed {
    /// The raw bytes of the view.
    fn raw_bytes(&self) -> &[u8];

    /// Returns the sub-view covering `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds, or (for `str`) if it does not fall
    /// on char boundaries. Ranges computed by this crate never do either.
    fn cut(&self, range: Range<usize>) -> &Self;

    /// Length of the view in bytes.
    #[inline]
    fn byte_len(&self) -> usize {
        self.raw_bytes().len()
    }
}

impl View for [u8] {
    #[inline]
    fn raw_bytes(&self) -> &[u8] {
        self
    }

    #[inline]
    fn cut(&self, range: Range<usize>) -> &Self {
        &self[range]
    }
}

impl View for str {
    #[inline]
    fn raw_bytes(&self) -> &[u8] {
        self.as_bytes()
    }

    #[inline]
    fn cut(&self, range: Range<usize>) -> &Self {
        &self[range]
    }
}

impl View for BStr {
    #[inline]
    fn raw_bytes(&self) -> &[u8] {
        self
    }

    #[inline]
    fn cut(&self, range: Range<usize>) -> &Self {
        &self[range]
    }
}
