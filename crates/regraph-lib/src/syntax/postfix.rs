//! Infix to postfix conversion (shunting-yard).

use super::kind::SyntaxKind;
use super::lexer::Token;
use crate::{Error, Result};

/// Converts a formatted infix token stream to postfix order.
///
/// Operators are left-associative; parentheses only group and never reach the output.
///
/// # Errors
///
/// - [`Error::UnmatchedClosingParenthesis`] when a `)` finds no `(` on the stack.
/// - [`Error::UnmatchedOpeningParenthesis`] when a `(` is still open at the end.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            SyntaxKind::ParenOpen => stack.push(*token),
            SyntaxKind::ParenClose => loop {
                match stack.pop() {
                    Some(top) if top.kind == SyntaxKind::ParenOpen => break,
                    Some(top) => output.push(top),
                    None => {
                        return Err(Error::UnmatchedClosingParenthesis { span: token.span });
                    }
                }
            },
            kind if kind.is_operator() => {
                let current = precedence(kind);
                while let Some(top) = stack.last() {
                    if precedence(top.kind) < current {
                        break;
                    }
                    output.push(*top);
                    stack.pop();
                }
                stack.push(*token);
            }
            _ => output.push(*token),
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind == SyntaxKind::ParenOpen {
            return Err(Error::UnmatchedOpeningParenthesis { span: top.span });
        }
        output.push(top);
    }

    Ok(output)
}

fn precedence(kind: SyntaxKind) -> u8 {
    kind.precedence().unwrap_or(0)
}
