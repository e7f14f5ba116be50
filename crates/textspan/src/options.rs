/// Options for [`split_with`](crate::split_with) and
/// [`segments`](crate::segments).
///
/// # Default
///
/// All options default to `false`.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Whether each separator byte is a delimiter of its own.
    ///
    /// By default a run of consecutive separator bytes (any members of the
    /// set, not only identical ones) is one delimiter, so `"a,,b"` split on
    /// `,` gives `"a"` and `"b"`. When `true`, the separator match is always a
    /// single byte and `"a,,b"` gives `"a"` and `",b"`, leaving an empty
    /// segment between the two commas.
    ///
    /// Blanks between separators are never part of the run: `"a, ,b"` has two
    /// delimiters either way.
    ///
    /// # Default
    ///
    /// `false`
    pub keep_empty_segments: bool,

    /// Whether [`Segments`](crate::Segments) yields each segment with its
    /// surrounding blanks trimmed.
    ///
    /// Has no effect on [`split_with`](crate::split_with), which always
    /// reports both the raw and the trimmed lengths.
    ///
    /// # Default
    ///
    /// `false`
    pub trim_segments: bool,
}

/// Options for [`split_bracket_with`](crate::split_bracket_with): which
/// bracket pairs open a bracket expression.
///
/// The first enabled opening bracket in the input decides the pair; only that
/// pair's open and close bytes change the nesting depth afterwards.
///
/// # Default
///
/// Unlike [`SplitOptions`], every pair is enabled by default. Use
/// [`BracketOptions::parens_only`] to recognize `(` `)` alone.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketOptions {
    /// Recognize `(` `)`.
    pub parens: bool,
    /// Recognize `[` `]`.
    pub squares: bool,
    /// Recognize `{` `}`.
    pub braces: bool,
}

impl Default for BracketOptions {
    fn default() -> Self {
        Self {
            parens: true,
            squares: true,
            braces: true,
        }
    }
}

impl BracketOptions {
    /// Only parentheses open a bracket expression.
    #[must_use]
    pub const fn parens_only() -> Self {
        Self {
            parens: true,
            squares: false,
            braces: false,
        }
    }

    /// Returns `true` if no pair is enabled.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.parens || self.squares || self.braces)
    }
}
