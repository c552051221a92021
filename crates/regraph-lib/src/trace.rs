//! Tracing hooks for the compilation pipeline.
//!
//! # Design: Zero-Cost Abstraction
//!
//! [`NoopTracer`] methods are `#[inline(always)]` empty functions, so the
//! compiler removes every hook call when tracing is off. [`PrintTracer`]
//! collects readable lines in memory; printing them is the caller's job.

use std::fmt::Write;

use crate::Colors;
use crate::dfa::{DStateId, Subset};
use crate::nfa::{Fragment, Nfa};
use crate::syntax::{Token, render, token_text};

/// Instrumentation points of the pipeline, in the order they fire.
pub trait Tracer {
    /// After explicit concatenation was inserted.
    fn trace_formatted(&mut self, source: &str, tokens: &[Token]);

    /// After conversion to postfix.
    fn trace_postfix(&mut self, source: &str, tokens: &[Token]);

    /// After a postfix token was evaluated; `fragment` is the new stack top.
    fn trace_fragment(&mut self, source: &str, token: &Token, fragment: &Fragment, depth: usize);

    /// After the NFA was sealed.
    fn trace_nfa(&mut self, nfa: &Nfa);

    /// When a DFA state is created for a new subset.
    fn trace_dfa_state(&mut self, id: DStateId, subset: &Subset, accepting: bool);

    /// When a DFA transition is added; `reused` if the target already existed.
    fn trace_dfa_transition(&mut self, from: DStateId, symbol: char, to: DStateId, reused: bool);
}

/// Tracer that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_formatted(&mut self, _source: &str, _tokens: &[Token]) {}

    #[inline(always)]
    fn trace_postfix(&mut self, _source: &str, _tokens: &[Token]) {}

    #[inline(always)]
    fn trace_fragment(&mut self, _source: &str, _token: &Token, _fragment: &Fragment, _depth: usize) {}

    #[inline(always)]
    fn trace_nfa(&mut self, _nfa: &Nfa) {}

    #[inline(always)]
    fn trace_dfa_state(&mut self, _id: DStateId, _subset: &Subset, _accepting: bool) {}

    #[inline(always)]
    fn trace_dfa_transition(&mut self, _from: DStateId, _symbol: char, _to: DStateId, _reused: bool) {}
}

/// Tracer that records one line per event.
#[derive(Clone, Debug, Default)]
pub struct PrintTracer {
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(colors: Colors) -> Self {
        Self {
            lines: Vec::new(),
            colors,
        }
    }

    /// Collected trace lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, each terminated by a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn push(&mut self, stage: &str, detail: String) {
        let c = self.colors;
        self.lines
            .push(format!("{}{:<8}{} {}", c.dim, stage, c.reset, detail));
    }
}

impl Tracer for PrintTracer {
    fn trace_formatted(&mut self, source: &str, tokens: &[Token]) {
        self.push("format", render(source, tokens));
    }

    fn trace_postfix(&mut self, source: &str, tokens: &[Token]) {
        self.push("postfix", render(source, tokens));
    }

    fn trace_fragment(&mut self, source: &str, token: &Token, fragment: &Fragment, depth: usize) {
        let c = self.colors;
        let text = match token.kind.symbol() {
            Some(op) => op.to_string(),
            None => token_text(source, token).to_string(),
        };
        let mut detail = format!(
            "{}{}{} start={}S{}{} exits=[",
            c.green, text, c.reset, c.blue, fragment.start, c.reset
        );
        for (i, slot) in fragment.exits.iter().enumerate() {
            if i > 0 {
                detail.push_str(", ");
            }
            let _ = write!(detail, "S{}.{:?}", slot.state, slot.branch);
        }
        let _ = write!(detail, "] depth={depth}");
        self.push("fragment", detail);
    }

    fn trace_nfa(&mut self, nfa: &Nfa) {
        let c = self.colors;
        self.push(
            "nfa",
            format!(
                "{} states, start {}S{}{}, match {}S{}{}",
                nfa.len(),
                c.blue,
                nfa.start(),
                c.reset,
                c.blue,
                nfa.match_state(),
                c.reset
            ),
        );
    }

    fn trace_dfa_state(&mut self, id: DStateId, subset: &Subset, accepting: bool) {
        let c = self.colors;
        let mut detail = format!("{}D{}{}", c.blue, id, c.reset);
        if accepting {
            let _ = write!(detail, " {}✓{}", c.green, c.reset);
        }
        let _ = write!(detail, " {}{}{}", c.dim, format_subset(subset), c.reset);
        self.push("state", detail);
    }

    fn trace_dfa_transition(&mut self, from: DStateId, symbol: char, to: DStateId, reused: bool) {
        let c = self.colors;
        let mut detail = format!(
            "{}D{}{} {}{:?}{} {}→{} {}D{}{}",
            c.blue, from, c.reset, c.green, symbol, c.reset, c.dim, c.reset, c.blue, to, c.reset
        );
        if reused {
            let _ = write!(detail, " {}(existing){}", c.dim, c.reset);
        }
        self.push("edge", detail);
    }
}

/// `{S0 S1 S4}`
pub(crate) fn format_subset(subset: &Subset) -> String {
    let mut out = String::from("{");
    for (i, id) in subset.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "S{id}");
    }
    out.push('}');
    out
}
