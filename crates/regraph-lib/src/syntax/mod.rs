//! Pattern syntax: lexing, explicit concatenation, and postfix conversion.
//!
//! # Architecture
//!
//! ```text
//! &str → lex → [Token] → insert_concat → [Token] → to_postfix → [Token] (postfix)
//! ```
//!
//! Tokens carry byte spans into the pattern, so every later stage can point
//! diagnostics back at the source.

mod format;
mod kind;
mod lexer;
mod postfix;


pub use format::{insert_concat, render};
pub use kind::SyntaxKind;
pub use lexer::{Token, lex, literal_symbol, token_text};
pub use postfix::to_postfix;
