//! Text dumps of automata for inspection and snapshot testing.
//!
//! ```text
//! start = S2
//!
//! S0: 'a' → S3
//! S1: 'b' → S3
//! S2: ε → S0, S1
//! S3: ✓
//! ```

use std::fmt::Write;

use crate::Colors;
use crate::dfa::Dfa;
use crate::nfa::{Nfa, NfaBuilder, State, StateId};
use crate::trace::format_subset;

/// Printer for [`Nfa`] with optional colors.
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
    colors: Colors,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            colors: Colors::OFF,
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;
        writeln!(w, "start = {}S{}{}", c.blue, self.nfa.start(), c.reset)?;
        writeln!(w)?;
        format_states(w, self.nfa.iter(), c)
    }
}

fn format_states<'s>(
    w: &mut String,
    states: impl Iterator<Item = (StateId, &'s State)>,
    c: Colors,
) -> std::fmt::Result {
    for (id, state) in states {
        write!(w, "{}S{}{}: ", c.blue, id, c.reset)?;
        match state {
            State::Literal { symbol, .. } => write!(w, "{}{:?}{}", c.green, symbol, c.reset)?,
            State::Split { .. } => write!(w, "ε")?,
            State::Match => {
                writeln!(w, "{}✓{}", c.green, c.reset)?;
                continue;
            }
        }
        write!(w, " {}→{} ", c.dim, c.reset)?;
        for (i, slot) in state.slots().enumerate() {
            if i > 0 {
                w.push_str(", ");
            }
            match slot {
                Some(target) => write!(w, "{}S{}{}", c.blue, target, c.reset)?,
                None => w.push('∅'),
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Printer for [`Dfa`] with optional colors.
///
/// ```text
/// start = D0
///
/// D0 {S0 S1 S2}: 'a' → D1, 'b' → D1
/// D1 ✓ {S3}: ∅
/// ```
pub struct DfaPrinter<'a> {
    dfa: &'a Dfa,
    colors: Colors,
}

impl<'a> DfaPrinter<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            colors: Colors::OFF,
        }
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;
        writeln!(w, "start = {}D{}{}", c.blue, self.dfa.start(), c.reset)?;
        writeln!(w)?;

        for (id, state) in self.dfa.iter() {
            write!(w, "{}D{}{}", c.blue, id, c.reset)?;
            if state.accepting {
                write!(w, " {}✓{}", c.green, c.reset)?;
            }
            write!(w, " {}{}{}: ", c.dim, format_subset(&state.subset), c.reset)?;

            if state.transitions.is_empty() {
                w.push('∅');
            }
            for (i, (symbol, target)) in state.transitions.iter().enumerate() {
                if i > 0 {
                    w.push_str(", ");
                }
                write!(
                    w,
                    "{}{:?}{} {}→{} {}D{}{}",
                    c.green, symbol, c.reset, c.dim, c.reset, c.blue, target, c.reset
                )?;
            }
            writeln!(w)?;
        }

        Ok(())
    }
}

impl Nfa {
    pub fn printer(&self) -> NfaPrinter<'_> {
        NfaPrinter::new(self)
    }

    /// Uncolored text dump.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}

impl Dfa {
    pub fn printer(&self) -> DfaPrinter<'_> {
        DfaPrinter::new(self)
    }

    /// Uncolored text dump.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}

impl NfaBuilder {
    /// States created so far, without a start header.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let states = (0..self.len() as StateId).map(|id| (id, self.state(id)));
        format_states(&mut out, states, Colors::OFF).expect("String write never fails");
        out
    }
}
