use super::*;
use crate::compile;

fn nfa(pattern: &str) -> Nfa {
    compile(pattern).unwrap().nfa().clone()
}

#[test]
fn edges_are_breadth_first_from_start() {
    let nfa = nfa("a|b");

    assert_eq!(
        nfa.edges(),
        vec![
            Edge { from: 2, label: Label::Epsilon, to: 0 },
            Edge { from: 2, label: Label::Epsilon, to: 1 },
            Edge { from: 0, label: Label::Char('a'), to: 3 },
            Edge { from: 1, label: Label::Char('b'), to: 3 },
        ]
    );
}

#[test]
fn edges_visit_loops_once() {
    let nfa = nfa("a*");

    assert_eq!(
        nfa.edges(),
        vec![
            Edge { from: 1, label: Label::Epsilon, to: 0 },
            Edge { from: 1, label: Label::Epsilon, to: 2 },
            Edge { from: 0, label: Label::Char('a'), to: 1 },
        ]
    );
}

#[test]
fn sealed_states_are_fully_patched() {
    let nfa = nfa("(a|b)*a?b+");

    for (_, state) in nfa.iter() {
        assert!(state.slots().all(|slot| slot.is_some()));
    }
    assert_eq!(nfa.match_state() as usize, nfa.len() - 1);
}

#[test]
fn state_accessors() {
    let literal = State::Literal { symbol: 'x', out: Some(1) };
    let split = State::split();

    assert_eq!(literal.symbol(), Some('x'));
    assert_eq!(literal.label(), Some(Label::Char('x')));
    assert_eq!(literal.successors().collect::<Vec<_>>(), vec![1]);
    assert!(split.is_split());
    assert_eq!(split.slots().collect::<Vec<_>>(), vec![None, None]);
    assert_eq!(State::Match.label(), None);
    assert_eq!(State::Match.successors().count(), 0);
}

#[test]
fn label_display() {
    assert_eq!(Label::Char('a').to_string(), "'a'");
    assert_eq!(Label::Char('\n').to_string(), "'\\n'");
    assert_eq!(Label::Epsilon.to_string(), "ε");
    assert!(Label::Epsilon.is_epsilon());
}

#[test]
fn serializes_with_state_kinds() {
    let value = serde_json::to_value(nfa("a")).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "states": [
                { "kind": "literal", "symbol": "a", "out": 1 },
                { "kind": "match" },
            ],
            "start": 0,
            "match": 1,
        })
    );
}
