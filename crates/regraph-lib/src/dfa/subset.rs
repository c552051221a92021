//! Subset (powerset) construction.

use indexmap::{IndexMap, IndexSet};

use super::closure::{epsilon_closure, move_on, symbols};
use super::{DState, DStateId, Dfa, Subset};
use crate::compiler::Limits;
use crate::nfa::Nfa;
use crate::trace::Tracer;
use crate::{Error, Result};

/// Build the DFA equivalent to `nfa`.
///
/// # Errors
///
/// [`Error::DfaStateLimitExceeded`] when `limits.max_dfa_states` is set and
/// construction would create more states than that.
pub fn build_dfa<T: Tracer>(nfa: &Nfa, limits: Limits, tracer: &mut T) -> Result<Dfa> {
    let mut construction = Construction {
        nfa,
        limits,
        tracer,
        registry: IndexSet::new(),
        accepting: Vec::new(),
        transitions: Vec::new(),
    };

    let start = epsilon_closure(nfa, [nfa.start()]);
    let (start, _) = construction.intern(start)?;

    // The registry doubles as the FIFO worklist: IDs are handed out in
    // insertion order, so everything past `cursor` is still unprocessed.
    let mut cursor = 0;
    while cursor < construction.registry.len() {
        construction.expand(cursor as DStateId)?;
        cursor += 1;
    }

    Ok(construction.finish(start))
}

struct Construction<'a, T> {
    nfa: &'a Nfa,
    limits: Limits,
    tracer: &'a mut T,
    /// Canonical subsets keyed to their DFA state ID (the insertion index).
    registry: IndexSet<Subset>,
    accepting: Vec<bool>,
    transitions: Vec<IndexMap<char, DStateId>>,
}

impl<T: Tracer> Construction<'_, T> {
    /// Look up `subset`, creating a new DFA state when it was never seen.
    ///
    /// Returns the state ID and whether it was created.
    fn intern(&mut self, subset: Subset) -> Result<(DStateId, bool)> {
        if let Some(index) = self.registry.get_index_of(&subset) {
            return Ok((index as DStateId, false));
        }

        if let Some(limit) = self.limits.max_dfa_states {
            if self.registry.len() >= limit {
                return Err(Error::DfaStateLimitExceeded { limit });
            }
        }

        let accepting = subset.contains(self.nfa.match_state());
        let (index, _) = self.registry.insert_full(subset);
        self.accepting.push(accepting);
        self.transitions.push(IndexMap::new());

        let id = index as DStateId;
        self.tracer
            .trace_dfa_state(id, &self.registry[index], accepting);
        Ok((id, true))
    }

    /// Compute every outgoing transition of `from`.
    fn expand(&mut self, from: DStateId) -> Result<()> {
        let current = self.registry[from as usize].clone();

        for symbol in symbols(self.nfa, &current) {
            let target = epsilon_closure(self.nfa, move_on(self.nfa, &current, symbol));
            let (to, created) = self.intern(target)?;
            self.transitions[from as usize].insert(symbol, to);
            self.tracer.trace_dfa_transition(from, symbol, to, !created);
        }

        Ok(())
    }

    fn finish(self, start: DStateId) -> Dfa {
        let states = self
            .registry
            .into_iter()
            .zip(self.accepting)
            .zip(self.transitions)
            .map(|((subset, accepting), transitions)| DState {
                subset,
                accepting,
                transitions,
            })
            .collect();
        Dfa::from_parts(states, start)
    }
}
