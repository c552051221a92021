//! Deterministic automaton produced by subset construction.
//!
//! Each DFA state stands for a [`Subset`] of NFA states: the epsilon-closure
//! of some reachable configuration. State IDs are assigned in breadth-first
//! discovery order, starting with the closure of the NFA start state at 0.

mod closure;
mod subset;

#[cfg(test)]
mod closure_tests;

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::Serialize;

use crate::nfa::StateId;

pub use closure::{epsilon_closure, move_on, symbols};
pub use subset::build_dfa;

/// Index into `Dfa::states`.
pub type DStateId = u32;

/// A canonical set of NFA states: sorted, without duplicates.
///
/// Equal sets compare and hash equal, which is what subset deduplication keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Subset(Box<[StateId]>);

impl Subset {
    pub fn from_unsorted(mut ids: Vec<StateId>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        Self(ids.into_boxed_slice())
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[StateId] {
        &self.0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<StateId> for Subset {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

/// A DFA state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DState {
    pub subset: Subset,
    /// Whether `subset` holds the NFA match state. Fixed at creation.
    pub accepting: bool,
    /// At most one target per symbol, in ascending symbol order.
    pub transitions: IndexMap<char, DStateId>,
}

/// A labeled DFA transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: DStateId,
    pub symbol: char,
    pub to: DStateId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dfa {
    states: Vec<DState>,
    start: DStateId,
}

impl Dfa {
    pub(crate) fn from_parts(states: Vec<DState>, start: DStateId) -> Self {
        Self { states, start }
    }

    pub fn start(&self) -> DStateId {
        self.start
    }

    /// Get state by ID.
    pub fn state(&self, id: DStateId) -> &DState {
        &self.states[id as usize]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (DStateId, &DState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (i as DStateId, s))
    }

    /// Target of the transition on `symbol`, if there is one.
    pub fn next(&self, state: DStateId, symbol: char) -> Option<DStateId> {
        self.state(state).transitions.get(&symbol).copied()
    }

    pub fn is_accepting(&self, state: DStateId) -> bool {
        self.state(state).accepting
    }

    pub fn accepting_states(&self) -> impl Iterator<Item = DStateId> + '_ {
        self.iter().filter(|(_, s)| s.accepting).map(|(id, _)| id)
    }

    /// Transitions reachable from the start state, in breadth-first order.
    pub fn transitions(&self) -> Vec<Transition> {
        let mut out = Vec::new();
        let mut visited = vec![false; self.states.len()];
        let mut queue = VecDeque::from([self.start]);
        visited[self.start as usize] = true;

        while let Some(from) = queue.pop_front() {
            for (&symbol, &to) in &self.state(from).transitions {
                out.push(Transition { from, symbol, to });
                if !visited[to as usize] {
                    visited[to as usize] = true;
                    queue.push_back(to);
                }
            }
        }

        out
    }
}
