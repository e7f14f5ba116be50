use core::fmt;

use crate::ScanError;

/// A set of ASCII separator bytes.
///
/// Membership is a single bit test, so splitting costs the same no matter how
/// many separators the set holds. Only ASCII bytes are accepted: a cut next to
/// an ASCII byte is always a char boundary, which keeps `str` views sliceable.
///
/// An empty set is valid and never matches.
///
/// ```rust
/// use textspan::{ScanError, SeparatorSet};
///
/// let set = SeparatorSet::new(b",;")?;
/// assert!(set.contains(b';'));
/// assert!(!set.contains(b' '));
/// assert_eq!(SeparatorSet::new(&[0xC3]), Err(ScanError::NonAsciiSeparator(0xC3)));
/// # Ok::<(), ScanError>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SeparatorSet {
    bits: u128,
}

impl SeparatorSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Builds a set from a list of bytes. Duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NonAsciiSeparator`] for the first byte above
    /// `0x7F`.
    pub fn new(bytes: &[u8]) -> Result<Self, ScanError> {
        let mut bits = 0u128;
        for &b in bytes {
            if !b.is_ascii() {
                return Err(ScanError::NonAsciiSeparator(b));
            }
            bits |= 1u128 << b;
        }
        Ok(Self { bits })
    }

    /// Builds a set in a `const` context.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if any byte is not
    /// ASCII.
    #[must_use]
    pub const fn from_static(bytes: &[u8]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            assert!(b.is_ascii(), "separator bytes must be ASCII");
            bits |= 1u128 << b;
            i += 1;
        }
        Self { bits }
    }

    /// Returns `true` if `b` is in the set.
    #[inline]
    #[must_use]
    pub const fn contains(&self, b: u8) -> bool {
        b.is_ascii() && (self.bits >> b) & 1 == 1
    }

    /// Returns `true` if the set holds no bytes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of distinct bytes in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// The member bytes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..0x80).filter(|&b| self.contains(b))
    }
}

impl fmt::Debug for SeparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Escaped(u8);

        impl fmt::Debug for Escaped {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.escape_ascii(), f)
            }
        }

        f.debug_set().entries(self.iter().map(Escaped)).finish()
    }
}
