//! Compilation facade: pattern in, NFA and DFA out.
//!
//! ```text
//! &str → Parsed (formatted + postfix tokens) → Nfa → Dfa
//! ```
//!
//! Each stage is a pure function of its input; a [`Tracer`] can observe them.

use crate::dfa::{Dfa, build_dfa};
use crate::nfa::{Nfa, build_nfa};
use crate::syntax::{Token, insert_concat, lex, render, to_postfix};
use crate::trace::{NoopTracer, Tracer};
use crate::{Error, Result};

/// Resource limits for a compilation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of DFA states; `None` means unlimited.
    pub max_dfa_states: Option<usize>,
}

/// Compiles patterns with a fixed set of [`Limits`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Compiler {
    limits: Limits,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn max_dfa_states(mut self, limit: usize) -> Self {
        self.limits.max_dfa_states = Some(limit);
        self
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Run the whole pipeline.
    pub fn compile(&self, pattern: &str) -> Result<Compiled> {
        self.compile_traced(pattern, &mut NoopTracer)
    }

    pub fn compile_traced<T: Tracer>(&self, pattern: &str, tracer: &mut T) -> Result<Compiled> {
        let parsed = self.parse(pattern, tracer)?;
        let nfa = self.build_nfa(&parsed, tracer)?;
        let dfa = self.build_dfa(&nfa, tracer)?;
        Ok(Compiled { parsed, nfa, dfa })
    }

    /// Lex, insert explicit concatenation, and convert to postfix.
    pub fn parse<T: Tracer>(&self, pattern: &str, tracer: &mut T) -> Result<Parsed> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let tokens = lex(pattern);
        let formatted = insert_concat(&tokens);
        tracer.trace_formatted(pattern, &formatted);

        let postfix = to_postfix(&formatted)?;
        tracer.trace_postfix(pattern, &postfix);

        Ok(Parsed {
            pattern: pattern.to_string(),
            formatted,
            postfix,
        })
    }

    /// Thompson construction over the parsed postfix stream.
    pub fn build_nfa<T: Tracer>(&self, parsed: &Parsed, tracer: &mut T) -> Result<Nfa> {
        build_nfa(&parsed.pattern, &parsed.postfix, tracer)
    }

    /// Subset construction, bounded by `limits.max_dfa_states`.
    pub fn build_dfa<T: Tracer>(&self, nfa: &Nfa, tracer: &mut T) -> Result<Dfa> {
        build_dfa(nfa, self.limits, tracer)
    }
}

/// Compile `pattern` with default limits.
pub fn compile(pattern: &str) -> Result<Compiled> {
    Compiler::new().compile(pattern)
}

/// Front-end output: the pattern with its formatted and postfix token streams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed {
    pattern: String,
    formatted: Vec<Token>,
    postfix: Vec<Token>,
}

impl Parsed {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn formatted_tokens(&self) -> &[Token] {
        &self.formatted
    }

    pub fn postfix_tokens(&self) -> &[Token] {
        &self.postfix
    }

    /// Infix form with explicit `.` concatenation, e.g. `a.(b|c)*`.
    pub fn formatted(&self) -> String {
        render(&self.pattern, &self.formatted)
    }

    /// Postfix form, e.g. `abc|*.`.
    pub fn postfix(&self) -> String {
        render(&self.pattern, &self.postfix)
    }
}

/// A fully compiled pattern.
///
/// DFA subsets hold NFA state IDs, so both automata are kept together.
#[derive(Clone, Debug)]
pub struct Compiled {
    parsed: Parsed,
    nfa: Nfa,
    dfa: Dfa,
}

impl Compiled {
    pub fn pattern(&self) -> &str {
        self.parsed.pattern()
    }

    pub fn parsed(&self) -> &Parsed {
        &self.parsed
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn stats(&self) -> Stats {
        Stats {
            nfa_states: self.nfa.len(),
            dfa_states: self.dfa.len(),
            accepting_states: self.dfa.accepting_states().count(),
        }
    }
}

/// State counts of a compiled pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub nfa_states: usize,
    pub dfa_states: usize,
    pub accepting_states: usize,
}
