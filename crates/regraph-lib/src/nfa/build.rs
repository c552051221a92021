//! Thompson construction over a postfix token stream.
//!
//! Each token is evaluated on a stack of [`Fragment`]s. A fragment is a
//! partially built sub-automaton: one start state plus the transition slots
//! that still need a target. Combinators connect fragments by patching those
//! slots, and sealing patches the last fragment's exits to a new match state.

use rowan::{TextRange, TextSize};

use super::{Nfa, State, StateId};
use crate::syntax::{SyntaxKind, Token, literal_symbol};
use crate::trace::Tracer;
use crate::{Error, Malformed, Result};

/// Which transition of a state a slot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// The only transition of a literal, or the first branch of a split.
    Out,
    /// The second branch of a split.
    Out1,
}

/// A transition slot that has not been pointed at a successor yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub state: StateId,
    pub branch: Branch,
}

impl Slot {
    pub fn out(state: StateId) -> Self {
        Self {
            state,
            branch: Branch::Out,
        }
    }

    pub fn out1(state: StateId) -> Self {
        Self {
            state,
            branch: Branch::Out1,
        }
    }
}

/// A sub-automaton with one entry and a list of dangling exits.
///
/// `range` is the part of the pattern the fragment was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub exits: Vec<Slot>,
    pub range: TextRange,
}

/// Arena of states under construction.
///
/// The arena length doubles as the per-compilation state counter, so IDs are
/// assigned in creation order and never reused.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Number of states created so far.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get state by ID.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    fn add_state(&mut self, state: State) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(state);
        id
    }

    fn slot_mut(&mut self, slot: Slot) -> Option<&mut Option<StateId>> {
        match (&mut self.states[slot.state as usize], slot.branch) {
            (State::Literal { out, .. }, Branch::Out) | (State::Split { out, .. }, Branch::Out) => {
                Some(out)
            }
            (State::Split { out1, .. }, Branch::Out1) => Some(out1),
            _ => None,
        }
    }

    /// Point every slot in `exits` at `target`.
    pub fn patch(&mut self, exits: &[Slot], target: StateId) {
        for &slot in exits {
            let entry = self.slot_mut(slot);
            debug_assert!(
                matches!(entry, Some(None)),
                "slot {slot:?} is missing or already patched"
            );
            if let Some(entry) = entry {
                *entry = Some(target);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// Single literal state with one dangling exit.
    pub fn literal(&mut self, symbol: char, range: TextRange) -> Fragment {
        let state = self.add_state(State::literal(symbol));
        Fragment {
            start: state,
            exits: vec![Slot::out(state)],
            range,
        }
    }

    /// `ab`: a's exits lead into b.
    pub fn concat(&mut self, a: Fragment, b: Fragment) -> Fragment {
        self.patch(&a.exits, b.start);
        Fragment {
            start: a.start,
            exits: b.exits,
            range: a.range.cover(b.range),
        }
    }

    /// `a|b`
    ///
    /// ```text
    /// split ─→ a ─→ …
    ///   └────→ b ─→ …
    /// ```
    pub fn alternation(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let split = self.add_state(State::Split {
            out: Some(a.start),
            out1: Some(b.start),
        });
        let mut exits = a.exits;
        exits.extend(b.exits);
        Fragment {
            start: split,
            exits,
            range: a.range.cover(b.range),
        }
    }

    /// `f*`: zero or more.
    ///
    /// ```text
    ///   ┌──────────┐
    ///   ↓          │
    /// split ─→ f ──┘
    ///   └─→ …
    /// ```
    pub fn zero_or_more(&mut self, f: Fragment, op: TextRange) -> Fragment {
        let split = self.loop_back(&f);
        Fragment {
            start: split,
            exits: vec![Slot::out1(split)],
            range: f.range.cover(op),
        }
    }

    /// `f+`: one or more. Same loop as `*`, entered through `f`.
    ///
    /// ```text
    ///   ┌──────────┐
    ///   ↓          │
    ///   f ─→ split ┘
    ///          └─→ …
    /// ```
    pub fn one_or_more(&mut self, f: Fragment, op: TextRange) -> Fragment {
        let split = self.loop_back(&f);
        Fragment {
            start: f.start,
            exits: vec![Slot::out1(split)],
            range: f.range.cover(op),
        }
    }

    /// `f?`: zero or one.
    ///
    /// ```text
    /// split ─→ f ─→ …
    ///   └─→ …
    /// ```
    pub fn optional(&mut self, f: Fragment, op: TextRange) -> Fragment {
        let split = self.add_state(State::Split {
            out: Some(f.start),
            out1: None,
        });
        let mut exits = f.exits;
        exits.push(Slot::out1(split));
        Fragment {
            start: split,
            exits,
            range: f.range.cover(op),
        }
    }

    /// Split whose first branch re-enters `f`, with `f`'s exits patched to it.
    fn loop_back(&mut self, f: &Fragment) -> StateId {
        let split = self.add_state(State::Split {
            out: Some(f.start),
            out1: None,
        });
        self.patch(&f.exits, split);
        split
    }

    /// Patch the fragment's exits to a new match state and freeze the arena.
    pub fn finish(mut self, fragment: Fragment) -> Nfa {
        let matched = self.add_state(State::Match);
        self.patch(&fragment.exits, matched);
        debug_assert!(
            self.states.iter().all(|s| s.slots().all(|slot| slot.is_some())),
            "sealed NFA has an unpatched slot"
        );
        Nfa::from_parts(self.states, fragment.start, matched)
    }
}

/// Evaluate a postfix token stream into a sealed NFA.
///
/// # Errors
///
/// [`Error::MalformedExpression`] when an operator lacks operands or the
/// stream does not reduce to exactly one fragment.
pub fn build_nfa<T: Tracer>(source: &str, postfix: &[Token], tracer: &mut T) -> Result<Nfa> {
    let mut builder = NfaBuilder::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for token in postfix {
        let fragment = match token.kind {
            SyntaxKind::Literal => {
                let symbol =
                    literal_symbol(source, token).ok_or_else(|| unexpected(token))?;
                builder.literal(symbol, token.span)
            }
            SyntaxKind::Concat => {
                let (a, b) = pop_pair(&mut stack, token)?;
                builder.concat(a, b)
            }
            SyntaxKind::Pipe => {
                let (a, b) = pop_pair(&mut stack, token)?;
                builder.alternation(a, b)
            }
            SyntaxKind::Star => {
                let f = pop_one(&mut stack, token)?;
                builder.zero_or_more(f, token.span)
            }
            SyntaxKind::Plus => {
                let f = pop_one(&mut stack, token)?;
                builder.one_or_more(f, token.span)
            }
            SyntaxKind::Question => {
                let f = pop_one(&mut stack, token)?;
                builder.optional(f, token.span)
            }
            SyntaxKind::ParenOpen | SyntaxKind::ParenClose => return Err(unexpected(token)),
        };

        stack.push(fragment);
        if let Some(top) = stack.last() {
            tracer.trace_fragment(source, token, top, stack.len());
        }
    }

    if stack.len() != 1 {
        let span = match stack.get(1) {
            Some(extra) => extra.range,
            None => TextRange::up_to(TextSize::of(source)),
        };
        return Err(Error::MalformedExpression {
            span,
            reason: Malformed::Leftover(stack.len()),
        });
    }

    let fragment = stack.swap_remove(0);
    let nfa = builder.finish(fragment);
    tracer.trace_nfa(&nfa);
    Ok(nfa)
}

fn pop_one(stack: &mut Vec<Fragment>, op: &Token) -> Result<Fragment> {
    stack.pop().ok_or_else(|| missing_operand(op))
}

/// Pops `b` then `a`, returning them in source order.
fn pop_pair(stack: &mut Vec<Fragment>, op: &Token) -> Result<(Fragment, Fragment)> {
    let b = pop_one(stack, op)?;
    let a = pop_one(stack, op)?;
    Ok((a, b))
}

fn missing_operand(op: &Token) -> Error {
    Error::MalformedExpression {
        span: op.span,
        reason: Malformed::MissingOperand(op.kind),
    }
}

fn unexpected(token: &Token) -> Error {
    Error::MalformedExpression {
        span: token.span,
        reason: Malformed::Unexpected(token.kind),
    }
}
