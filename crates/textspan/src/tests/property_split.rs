use quickcheck::QuickCheck;

use super::{arbitrary::Fragment, test_count};
use crate::{SeparatorSet, SplitOptions, segments, split, split_with, trim};

/// Property: the parts tile the input, the left part holds no separator and
/// the reported trims match trimming each part directly.
#[test]
fn split_tiles_input() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(f: Fragment, set: SeparatorSet, options: SplitOptions) -> bool {
        let input = f.0.as_str();
        let (left, span) = split_with(input, &set, options);
        span.assert_invariants(input.len());

        let clean_left = !left.bytes().any(|b| set.contains(b));
        let separator_ok = match span.separator_view(input) {
            Some(sep) => {
                let coalesced = !span
                    .right_view(input)
                    .bytes()
                    .next()
                    .is_some_and(|b| set.contains(b));
                sep.bytes().all(|b| set.contains(b))
                    && if options.keep_empty_segments {
                        sep.len() == 1
                    } else {
                        coalesced
                    }
            }
            None => left == input && span.right == 0,
        };
        let trims_agree = span.left_trimmed(input) == trim(left).0
            && span.right_trimmed(input) == trim(span.right_view(input)).0;

        clean_left && separator_ok && trims_agree
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Fragment, SeparatorSet, SplitOptions) -> bool);
}

/// Property: segments appear in order, never contain a separator, and the
/// gaps between them are non-empty separator runs (single bytes when empty
/// segments are kept).
#[test]
fn segments_partition_input() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(f: Fragment, set: SeparatorSet, keep_empty_segments: bool) -> bool {
        let input = f.0.as_str();
        let options = SplitOptions {
            keep_empty_segments,
            trim_segments: false,
        };
        let base = input.as_ptr() as usize;
        let mut cursor = 0;
        let mut count = 0;
        for seg in segments(input, &set, options) {
            let start = seg.as_ptr() as usize - base;
            let gap = &input.as_bytes()[cursor..start];
            let gap_ok = if count == 0 {
                gap.is_empty()
            } else {
                !gap.is_empty()
                    && gap.iter().all(|&b| set.contains(b))
                    && (!keep_empty_segments || gap.len() == 1)
            };
            if !gap_ok || seg.bytes().any(|b| set.contains(b)) {
                return false;
            }
            cursor = start + seg.len();
            count += 1;
        }
        count >= 1 && cursor == input.len()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Fragment, SeparatorSet, bool) -> bool);
}

#[test]
fn consecutive_separators_leave_no_empty_middle() {
    let set = SeparatorSet::from_static(b",");
    let (left, span) = split("a,,b", &set);
    assert_eq!(left, "a");
    assert_eq!(span.right_view("a,,b"), "b");
    assert_eq!(span.to_lengths(), [1, 2, 1, 1, 1]);
}

#[test]
fn empty_input_gives_all_zero_fields() {
    let set = SeparatorSet::from_static(b",;");
    let (left, span) = split("", &set);
    assert_eq!(left, "");
    assert_eq!(span.to_lengths(), [0; 5]);
    assert!(!span.is_split());
}
