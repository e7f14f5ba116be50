use thiserror::Error;

use crate::BracketKind;

/// Errors reported by the fallible corners of the crate.
///
/// The scanning operations themselves are total; these only come from
/// building a [`SeparatorSet`](crate::SeparatorSet) or from
/// [`BracketSpan::check`](crate::BracketSpan::check).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A separator byte outside the ASCII range was supplied.
    #[error("separator byte {0:#04x} is not ASCII")]
    NonAsciiSeparator(u8),
    /// A bracket expression reached end of input before it was closed.
    #[error("unclosed '{kind}' opened at byte {open_at} ({depth} level(s) still open)")]
    UnclosedBracket {
        /// The kind of the outermost bracket.
        kind: BracketKind,
        /// Offset of the outermost opening bracket.
        open_at: usize,
        /// Nesting depth still open at end of input.
        depth: usize,
    },
}
