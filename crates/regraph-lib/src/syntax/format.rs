//! Explicit concatenation.
//!
//! Adjacent sub-expressions concatenate implicitly (`ab`, `a(b)`, `a*b`).
//! The formatter makes this explicit by inserting a `Concat` token so the
//! postfix converter only has to deal with binary operators.

use super::kind::SyntaxKind;
use super::lexer::{Token, token_text};

/// Inserts a `Concat` token between every pair of tokens that concatenate implicitly.
///
/// A marker goes before token `c` when `c` opens a group or is a literal, and
/// the preceding token is neither `|` nor `(`. The first token is treated as
/// if it followed a `(`.
pub fn insert_concat(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len() * 2);
    let mut before = SyntaxKind::ParenOpen;

    for token in tokens {
        let starts_operand = matches!(token.kind, SyntaxKind::ParenOpen | SyntaxKind::Literal);
        let after_boundary = matches!(before, SyntaxKind::Pipe | SyntaxKind::ParenOpen);

        if starts_operand && !after_boundary {
            out.push(Token::concat_before(token));
        }

        out.push(*token);
        before = token.kind;
    }

    out
}

/// Renders a token stream back to text, showing `Concat` as `.`.
pub fn render(source: &str, tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.len());
    for token in tokens {
        match token.kind.symbol() {
            Some(c) => out.push(c),
            None => out.push_str(token_text(source, token)),
        }
    }
    out
}
