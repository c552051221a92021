//! Epsilon-closure and symbol moves over a sealed NFA.

use std::collections::BTreeSet;

use super::Subset;
use crate::nfa::{Nfa, State, StateId};

/// All states reachable from `seeds` through split branches alone.
///
/// The seeds are members of the result. The result does not depend on seed
/// order, and closing an already closed set returns it unchanged.
pub fn epsilon_closure(nfa: &Nfa, seeds: impl IntoIterator<Item = StateId>) -> Subset {
    let mut seen = vec![false; nfa.len()];
    let mut members = Vec::new();
    let mut worklist = Vec::new();

    for id in seeds {
        if !seen[id as usize] {
            seen[id as usize] = true;
            members.push(id);
            worklist.push(id);
        }
    }

    while let Some(id) = worklist.pop() {
        let State::Split { out, out1 } = nfa.state(id) else {
            continue;
        };
        for next in [*out, *out1].into_iter().flatten() {
            if !seen[next as usize] {
                seen[next as usize] = true;
                members.push(next);
                worklist.push(next);
            }
        }
    }

    Subset::from_unsorted(members)
}

/// States reached from `subset` by consuming `symbol`, before closure.
pub fn move_on(nfa: &Nfa, subset: &Subset, symbol: char) -> Vec<StateId> {
    subset
        .iter()
        .filter_map(|id| match nfa.state(id) {
            State::Literal { symbol: c, out } if *c == symbol => *out,
            _ => None,
        })
        .collect()
}

/// Distinct symbols on the outgoing transitions of `subset`, ascending.
pub fn symbols(nfa: &Nfa, subset: &Subset) -> BTreeSet<char> {
    subset
        .iter()
        .filter_map(|id| nfa.state(id).symbol())
        .collect()
}
