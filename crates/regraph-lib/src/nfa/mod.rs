//! Nondeterministic automaton produced by Thompson construction.
//!
//! States live in a flat arena addressed by [`StateId`]. The graph is cyclic
//! (`*` and `+` loop back), so transitions are stored as indices rather than
//! owned pointers. Once sealed, an [`Nfa`] is immutable.

mod build;

#[cfg(test)]
mod build_tests;
#[cfg(test)]
mod nfa_tests;

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

pub use build::{Branch, Fragment, NfaBuilder, Slot, build_nfa};

/// Index into `Nfa::states`.
pub type StateId = u32;

/// A state of the NFA.
///
/// Transition slots are `None` only while the owning fragment is under
/// construction. Every slot of a sealed [`Nfa`] is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum State {
    /// Consumes `symbol`, then continues at `out`.
    Literal {
        symbol: char,
        out: Option<StateId>,
    },

    /// Epsilon branch point with two successors.
    Split {
        out: Option<StateId>,
        out1: Option<StateId>,
    },

    /// Accepting sink.
    Match,
}

impl State {
    pub fn literal(symbol: char) -> Self {
        State::Literal { symbol, out: None }
    }

    pub fn split() -> Self {
        State::Split {
            out: None,
            out1: None,
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, State::Split { .. })
    }

    pub fn is_match(&self) -> bool {
        matches!(self, State::Match)
    }

    /// Symbol consumed by a literal state.
    pub fn symbol(&self) -> Option<char> {
        match self {
            State::Literal { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }

    /// Label carried by every outgoing edge of this state.
    pub fn label(&self) -> Option<Label> {
        match self {
            State::Literal { symbol, .. } => Some(Label::Char(*symbol)),
            State::Split { .. } => Some(Label::Epsilon),
            State::Match => None,
        }
    }

    /// Outgoing transition slots in branch order, patched or not.
    pub fn slots(&self) -> impl Iterator<Item = Option<StateId>> {
        let (first, second) = match self {
            State::Literal { out, .. } => (Some(*out), None),
            State::Split { out, out1 } => (Some(*out), Some(*out1)),
            State::Match => (None, None),
        };
        first.into_iter().chain(second)
    }

    /// Targets of the patched outgoing transitions.
    pub fn successors(&self) -> impl Iterator<Item = StateId> {
        self.slots().flatten()
    }
}

/// Transition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Label {
    Char(char),
    Epsilon,
}

impl Label {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Char(c) => write!(f, "{c:?}"),
            Label::Epsilon => f.write_str("ε"),
        }
    }
}

/// A labeled transition between two NFA states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: StateId,
    pub label: Label,
    pub to: StateId,
}

/// A sealed Thompson NFA.
///
/// Exactly one state is the match state; every other state has all of its
/// transition slots patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
    #[serde(rename = "match")]
    matched: StateId,
}

impl Nfa {
    pub(crate) fn from_parts(states: Vec<State>, start: StateId, matched: StateId) -> Self {
        Self {
            states,
            start,
            matched,
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn match_state(&self) -> StateId {
        self.matched
    }

    /// Get state by ID.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false for a sealed NFA; it has at least a match state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over all states with their IDs, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (i as StateId, s))
    }

    /// Edges reachable from the start state, in breadth-first order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        let mut visited = vec![false; self.states.len()];
        let mut queue = VecDeque::from([self.start]);
        visited[self.start as usize] = true;

        while let Some(from) = queue.pop_front() {
            let state = self.state(from);
            let Some(label) = state.label() else {
                continue;
            };
            for to in state.successors() {
                edges.push(Edge { from, label, to });
                if !visited[to as usize] {
                    visited[to as usize] = true;
                    queue.push_back(to);
                }
            }
        }

        edges
    }
}
