use super::*;
use crate::compile;
use crate::nfa::Nfa;

fn textbook() -> Nfa {
    compile("(a|b)*abb").unwrap().nfa().clone()
}

fn ids(subset: &Subset) -> Vec<u32> {
    subset.iter().collect()
}

#[test]
fn closure_follows_nested_splits() {
    let nfa = textbook();
    let closure = epsilon_closure(&nfa, [nfa.start()]);

    assert_eq!(ids(&closure), vec![0, 1, 2, 3, 4]);
}

#[test]
fn closure_of_literal_is_itself() {
    let nfa = textbook();

    assert_eq!(ids(&epsilon_closure(&nfa, [5])), vec![5]);
}

#[test]
fn closure_is_order_independent() {
    let nfa = textbook();

    assert_eq!(
        epsilon_closure(&nfa, [5, 3]),
        epsilon_closure(&nfa, [3, 5, 5])
    );
}

#[test]
fn closure_is_idempotent() {
    let nfa = textbook();

    for (id, _) in nfa.iter() {
        let once = epsilon_closure(&nfa, [id]);
        let twice = epsilon_closure(&nfa, once.iter());
        assert_eq!(once, twice, "closure of S{id}");
        assert!(once.contains(id));
    }
}

#[test]
fn empty_seed_set() {
    let nfa = textbook();

    assert!(epsilon_closure(&nfa, []).is_empty());
}

#[test]
fn move_collects_literal_targets() {
    let nfa = textbook();
    let start = epsilon_closure(&nfa, [nfa.start()]);

    let mut on_a = move_on(&nfa, &start, 'a');
    on_a.sort_unstable();
    assert_eq!(on_a, vec![3, 5]);
    assert_eq!(move_on(&nfa, &start, 'b'), vec![3]);
    assert!(move_on(&nfa, &start, 'c').is_empty());
}

#[test]
fn symbols_are_ascending_and_distinct() {
    let nfa = compile("b|a|b").unwrap().nfa().clone();
    let start = epsilon_closure(&nfa, [nfa.start()]);

    assert_eq!(symbols(&nfa, &start).into_iter().collect::<Vec<_>>(), vec!['a', 'b']);
}

#[test]
fn subset_is_canonical() {
    let subset = Subset::from_unsorted(vec![4, 1, 4, 0]);

    assert_eq!(subset.as_slice(), &[0, 1, 4]);
    assert_eq!(subset, [0, 4, 1].into_iter().collect::<Subset>());
    assert!(subset.contains(4));
    assert!(!subset.contains(2));
    assert_eq!(subset.len(), 3);
}
