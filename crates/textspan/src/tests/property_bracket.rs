use quickcheck::QuickCheck;

use super::{arbitrary::Fragment, test_count};
use crate::{Balance, BracketKind, BracketOptions, split_bracket, split_bracket_with};

/// Property: the parts tile the input, the head holds no enabled opening
/// bracket, and the body never closes the outer bracket early.
#[test]
fn bracket_split_is_consistent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(f: Fragment, options: BracketOptions) -> bool {
        let input = f.0.as_str();
        let (head, span) = split_bracket_with(input, options);
        span.assert_invariants(input.len());

        if head.bytes().any(|b| BracketKind::opened_by(b, options).is_some()) {
            return false;
        }

        match (span.kind, span.body_view(input)) {
            (Some(kind), Some(body)) => {
                let mut depth = 1usize;
                for b in body.bytes() {
                    if b == kind.open() {
                        depth += 1;
                    } else if b == kind.close() {
                        depth -= 1;
                        if depth == 0 {
                            return false;
                        }
                    }
                }
                match span.balance {
                    Balance::Balanced => depth == 1,
                    Balance::Unclosed { depth: open } => open == depth,
                    Balance::Absent => false,
                }
            }
            (None, None) => span.balance == Balance::Absent && head == input,
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Fragment, BracketOptions) -> bool);
}

/// Property: for balanced input the five lengths sum to the input length and
/// the bytes at the bracket offsets are the matched pair.
#[test]
fn balanced_lengths_sum_to_input() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(f: Fragment) -> bool {
        let input = f.0.as_bytes();
        let (_, span) = split_bracket(input);
        let (Balance::Balanced, Some(kind)) = (span.balance, span.kind) else {
            return true;
        };
        let [head, open, body, close, remainder, _] =
            span.to_lengths().map(Option::unwrap_or_default);
        head + open + body + close + remainder == input.len()
            && input[head] == kind.open()
            && input[head + open + body] == kind.close()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Fragment) -> bool);
}

#[test]
fn empty_input_has_no_bracket_fields() {
    let (head, span) = split_bracket("");
    assert_eq!(head, "");
    assert_eq!(span.to_lengths(), [Some(0), None, None, None, Some(0), None]);
    assert_eq!(span.balance, Balance::Absent);
}

#[test]
fn unclosed_input_never_reads_past_the_end() {
    let input = "f(a,b";
    let (head, span) = split_bracket(input);
    assert_eq!(head, "f");
    assert_eq!(span.balance, Balance::Unclosed { depth: 1 });
    assert_eq!(span.body_view(input), Some("a,b"));
    assert_eq!(span.close, None);
    assert_eq!(span.remainder_view(input), "");
}

#[test]
fn deep_nesting_is_tracked() {
    let input = "g((((x))))y";
    let (_, span) = split_bracket_with(input, BracketOptions::parens_only());
    assert_eq!(span.body_view(input), Some("(((x)))"));
    assert_eq!(span.remainder_view(input), "y");
}
