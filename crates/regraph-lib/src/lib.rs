//! Regraph: compile regular expressions into finite automata.
//!
//! The pipeline formats the pattern with explicit concatenation, converts it
//! to postfix, builds a Thompson NFA and finally a DFA by subset construction.
//!
//! # Example
//!
//! ```
//! use regraph_lib::compile;
//!
//! let compiled = compile("(a|b)*abb").expect("valid pattern");
//! let dfa = compiled.dfa();
//!
//! let mut state = dfa.start();
//! for c in "babb".chars() {
//!     state = dfa.next(state, c).expect("transition exists");
//! }
//! assert!(dfa.is_accepting(state));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod compiler;
pub mod dfa;
pub mod diagnostics;
pub mod dot;
pub mod dump;
pub mod nfa;
pub mod syntax;
pub mod trace;

#[cfg(test)]
mod test_utils;


use rowan::TextRange;

pub use colors::Colors;
pub use compiler::{Compiled, Compiler, Limits, Parsed, Stats, compile};
pub use dfa::{DState, DStateId, Dfa, Subset};
pub use diagnostics::ErrorPrinter;
pub use nfa::{Edge, Label, Nfa, State, StateId};
pub use syntax::SyntaxKind;
pub use trace::{NoopTracer, PrintTracer, Tracer};

/// Errors that can occur while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The pattern has no characters at all.
    #[error("pattern is empty")]
    EmptyPattern,

    /// A `)` with no open group to close.
    #[error("unmatched closing parenthesis")]
    UnmatchedClosingParenthesis { span: TextRange },

    /// A `(` that is never closed.
    #[error("unmatched opening parenthesis")]
    UnmatchedOpeningParenthesis { span: TextRange },

    /// The postfix stream does not reduce to exactly one fragment.
    #[error("malformed expression: {reason}")]
    MalformedExpression { span: TextRange, reason: Malformed },

    /// Subset construction produced more DFA states than allowed.
    #[error("DFA state limit of {limit} exceeded")]
    DfaStateLimitExceeded { limit: usize },
}

impl Error {
    /// Location of the error in the pattern, if it has one.
    pub fn span(&self) -> Option<TextRange> {
        match self {
            Error::UnmatchedClosingParenthesis { span }
            | Error::UnmatchedOpeningParenthesis { span }
            | Error::MalformedExpression { span, .. } => Some(*span),
            Error::EmptyPattern | Error::DfaStateLimitExceeded { .. } => None,
        }
    }

    pub fn printer<'s>(&self, source: &'s str) -> ErrorPrinter<'_, 's> {
        ErrorPrinter::new(self, source)
    }
}

/// Why a postfix stream failed to reduce to one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// An operator found fewer fragments on the stack than it consumes.
    #[error("{} is missing an operand", .0.describe())]
    MissingOperand(SyntaxKind),

    /// Construction ended with a fragment count other than one.
    #[error("expected a single expression, found {0}")]
    Leftover(usize),

    /// A token that cannot appear in a postfix stream (a parenthesis).
    #[error("unexpected {} in postfix expression", .0.describe())]
    Unexpected(SyntaxKind),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
