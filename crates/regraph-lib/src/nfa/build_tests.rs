use indoc::indoc;

use super::*;
use crate::syntax::{insert_concat, lex, to_postfix};
use crate::test_utils::span;
use crate::trace::NoopTracer;
use crate::{Error, Malformed, SyntaxKind};

fn build(source: &str) -> Result<Nfa, Error> {
    let postfix = to_postfix(&insert_concat(&lex(source)))?;
    build_nfa(source, &postfix, &mut NoopTracer)
}

#[test]
fn literal_leaves_one_dangling_exit() {
    let mut builder = NfaBuilder::new();
    let f = builder.literal('a', span(0, 1));

    assert_eq!(f.start, 0);
    assert_eq!(f.exits, vec![Slot::out(0)]);
    insta::assert_snapshot!(builder.dump(), @"S0: 'a' → ∅");
}

#[test]
fn concat_patches_left_exits_into_right_start() {
    let mut builder = NfaBuilder::new();
    let a = builder.literal('a', span(0, 1));
    let b = builder.literal('b', span(1, 2));
    let f = builder.concat(a, b);

    assert_eq!(f.start, 0);
    assert_eq!(f.exits, vec![Slot::out(1)]);
    assert_eq!(f.range, span(0, 2));
    insta::assert_snapshot!(builder.dump(), @r"
    S0: 'a' → S1
    S1: 'b' → ∅
    ");
}

#[test]
fn alternation_joins_both_exit_lists() {
    let mut builder = NfaBuilder::new();
    let a = builder.literal('a', span(0, 1));
    let b = builder.literal('b', span(2, 3));
    let f = builder.alternation(a, b);

    assert_eq!(f.start, 2);
    assert_eq!(f.exits, vec![Slot::out(0), Slot::out(1)]);
    insta::assert_snapshot!(builder.dump(), @r"
    S0: 'a' → ∅
    S1: 'b' → ∅
    S2: ε → S0, S1
    ");
}

#[test]
fn zero_or_more_enters_at_split() {
    let mut builder = NfaBuilder::new();
    let a = builder.literal('a', span(0, 1));
    let f = builder.zero_or_more(a, span(1, 2));

    assert_eq!(f.start, 1);
    assert_eq!(f.exits, vec![Slot::out1(1)]);
    assert_eq!(f.range, span(0, 2));
    insta::assert_snapshot!(builder.dump(), @r"
    S0: 'a' → S1
    S1: ε → S0, ∅
    ");
}

#[test]
fn one_or_more_enters_at_operand() {
    let mut builder = NfaBuilder::new();
    let a = builder.literal('a', span(0, 1));
    let f = builder.one_or_more(a, span(1, 2));

    assert_eq!(f.start, 0);
    assert_eq!(f.exits, vec![Slot::out1(1)]);
    insta::assert_snapshot!(builder.dump(), @r"
    S0: 'a' → S1
    S1: ε → S0, ∅
    ");
}

#[test]
fn optional_keeps_operand_exits() {
    let mut builder = NfaBuilder::new();
    let a = builder.literal('a', span(0, 1));
    let f = builder.optional(a, span(1, 2));

    assert_eq!(f.start, 1);
    assert_eq!(f.exits, vec![Slot::out(0), Slot::out1(1)]);
    insta::assert_snapshot!(builder.dump(), @r"
    S0: 'a' → ∅
    S1: ε → S0, ∅
    ");
}

#[test]
fn finish_adds_match_state_last() {
    let mut builder = NfaBuilder::new();
    let a = builder.literal('a', span(0, 1));
    let f = builder.optional(a, span(1, 2));
    let nfa = builder.finish(f);

    insta::assert_snapshot!(nfa.dump(), @r"
    start = S1

    S0: 'a' → S2
    S1: ε → S0, S2
    S2: ✓
    ");
}

#[test]
fn textbook_pattern() {
    let nfa = build("(a|b)*abb").unwrap();

    insta::assert_snapshot!(nfa.dump(), @r"
    start = S3

    S0: 'a' → S3
    S1: 'b' → S3
    S2: ε → S0, S1
    S3: ε → S2, S4
    S4: 'a' → S5
    S5: 'b' → S6
    S6: 'b' → S7
    S7: ✓
    ");
}

#[test]
fn plus_loops_through_operand() {
    let nfa = build("a+").unwrap();

    insta::assert_snapshot!(nfa.dump(), @r"
    start = S0

    S0: 'a' → S1
    S1: ε → S0, S2
    S2: ✓
    ");
}

#[test]
fn one_state_per_literal_and_operator() {
    let nfa = build("ab|c*").unwrap();

    // a, b, c, `|`, `*` and the match state; concatenation adds none.
    assert_eq!(nfa.len(), 6);
    assert!(nfa.state(nfa.match_state()).is_match());
    assert_eq!(nfa.iter().filter(|(_, s)| s.is_match()).count(), 1);
}

#[test]
fn leading_pipe_lacks_operand() {
    assert_eq!(
        build("|a"),
        Err(Error::MalformedExpression {
            span: span(0, 1),
            reason: Malformed::MissingOperand(SyntaxKind::Pipe),
        })
    );
}

#[test]
fn lone_quantifier_lacks_operand() {
    assert_eq!(
        build("*"),
        Err(Error::MalformedExpression {
            span: span(0, 1),
            reason: Malformed::MissingOperand(SyntaxKind::Star),
        })
    );
}

#[test]
fn empty_group_after_literal() {
    // `a.()` reduces to `a.`; the marker sits right before `(`.
    assert_eq!(
        build("a()"),
        Err(Error::MalformedExpression {
            span: span(1, 1),
            reason: Malformed::MissingOperand(SyntaxKind::Concat),
        })
    );
}

#[test]
fn empty_group_leaves_nothing() {
    assert_eq!(
        build("()"),
        Err(Error::MalformedExpression {
            span: span(0, 2),
            reason: Malformed::Leftover(0),
        })
    );
}

#[test]
fn unreduced_stream_points_at_second_fragment() {
    // Without explicit concatenation two operands stay on the stack.
    let source = "ab";
    let tokens = lex(source);

    assert_eq!(
        build_nfa(source, &tokens, &mut NoopTracer),
        Err(Error::MalformedExpression {
            span: span(1, 2),
            reason: Malformed::Leftover(2),
        })
    );
}

#[test]
fn parenthesis_in_postfix_is_rejected() {
    let source = "(";
    let tokens = lex(source);

    assert_eq!(
        build_nfa(source, &tokens, &mut NoopTracer),
        Err(Error::MalformedExpression {
            span: span(0, 1),
            reason: Malformed::Unexpected(SyntaxKind::ParenOpen),
        })
    );
}

#[test]
fn dump_snapshot_with_indoc() {
    let nfa = build("a|b").unwrap();

    assert_eq!(
        nfa.dump(),
        indoc! {"
            start = S2

            S0: 'a' → S3
            S1: 'b' → S3
            S2: ε → S0, S1
            S3: ✓
        "}
    );
}
