//! Zero-copy scanning primitives for short text fragments.
//!
//! Three independent, stateless operations compute boundaries inside a
//! caller-owned buffer and hand back sub-views of it:
//!
//! - [`trim`] strips surrounding whitespace,
//! - [`split`] cuts a view at the first run of separator bytes,
//! - [`split_bracket`] cuts `head(body)rest` style expressions apart while
//!   tracking nesting depth.
//!
//! Nothing here allocates and nothing is copied. Each operation returns the
//! primary (left-most) sub-view together with a small span record describing
//! every boundary it found, so callers can keep splitting without rescanning.
//!
//! ```rust
//! use textspan::{Balance, SeparatorSet, split, split_bracket, trim};
//!
//! let (core, span) = trim("  key = value \n");
//! assert_eq!(core, "key = value");
//! assert_eq!(span.lead, 2);
//!
//! let eq = SeparatorSet::from_static(b"=");
//! let (_, span) = split(core, &eq);
//! assert_eq!(span.left_trimmed(core), "key");
//! assert_eq!(span.right_trimmed(core), "value");
//!
//! let (head, span) = split_bracket("f(a,(b,c))");
//! assert_eq!(head, "f");
//! assert_eq!(span.body_view("f(a,(b,c))"), Some("a,(b,c)"));
//! assert_eq!(span.balance, Balance::Balanced);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

/// Emits a `tracing` event when the `tracing` feature is enabled and expands to
/// nothing otherwise.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

mod bracket;
mod error;
mod options;
mod scanner;
mod separator;
mod split;
mod trim;
mod view;

#[cfg(test)]
mod tests;

pub use bracket::{Balance, BracketKind, BracketSpan, split_bracket, split_bracket_with};
pub use error::ScanError;
pub use options::{BracketOptions, SplitOptions};
pub use scanner::{BLANKS, is_blank};
pub use separator::SeparatorSet;
pub use split::{Segments, SplitSpan, segments, split, split_with};
pub use trim::{TrimSpan, trim};
pub use view::View;
