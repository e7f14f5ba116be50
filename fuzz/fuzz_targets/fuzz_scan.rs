#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textspan::{
    BracketOptions, SeparatorSet, SplitOptions, View, segments, split_bracket_with, split_with,
    trim,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    separators: Vec<u8>,
    keep_empty_segments: bool,
    trim_segments: bool,
    parens: bool,
    squares: bool,
    braces: bool,
    data: &'a [u8],
}

/// Runs every operation over `view` and checks the spans it reports.
fn scan<V: View + ?Sized>(view: &V, set: &SeparatorSet, split: SplitOptions, brackets: BracketOptions) {
    let total = view.byte_len();

    let (core, span) = trim(view);
    span.assert_invariants(total);
    assert_eq!(core.byte_len(), span.len);

    let (left, span) = split_with(view, set, split);
    span.assert_invariants(total);
    assert_eq!(left.byte_len(), span.left);

    let mut covered = 0usize;
    let mut parts = 0usize;
    for part in segments(view, set, split) {
        covered += part.byte_len();
        parts += 1;
    }
    assert!(covered <= total);
    assert!(parts >= 1 && parts <= total + 1);

    let (head, span) = split_bracket_with(view, brackets);
    span.assert_invariants(total);
    assert_eq!(head.byte_len(), span.head);
}

fuzz_target!(|input: Input<'_>| {
    let ascii: Vec<u8> = input.separators.iter().map(|b| b & 0x7F).collect();
    let set = SeparatorSet::new(&ascii).expect("masked separators are ASCII");
    let split = SplitOptions {
        keep_empty_segments: input.keep_empty_segments,
        trim_segments: input.trim_segments,
    };
    let brackets = BracketOptions {
        parens: input.parens,
        squares: input.squares,
        braces: input.braces,
    };

    scan(input.data, &set, split, brackets);
    if let Ok(text) = std::str::from_utf8(input.data) {
        scan(text, &set, split, brackets);
    }
});
