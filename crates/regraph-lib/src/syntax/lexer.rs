//! Lexer for patterns.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::kind::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    /// Synthetic concatenation marker with an empty span right before `next`.
    pub fn concat_before(next: &Token) -> Self {
        Self::new(SyntaxKind::Concat, TextRange::empty(next.span.start()))
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes a pattern into a vector of span-based tokens.
///
/// Every character becomes exactly one token. Characters logos rejects are
/// kept as literals, so lexing never fails.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut lexer = SyntaxKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token::new(kind, range_to_text_range(span))),
            Err(()) => {
                // One literal per character, even if logos grouped several.
                let text = &source[span.clone()];
                for (offset, c) in text.char_indices() {
                    let start = span.start + offset;
                    tokens.push(Token::new(
                        SyntaxKind::Literal,
                        range_to_text_range(start..start + c.len_utf8()),
                    ));
                }
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}

/// The symbol a literal token stands for.
///
/// Returns `None` for operators and for an empty slice.
pub fn literal_symbol(source: &str, token: &Token) -> Option<char> {
    if token.kind != SyntaxKind::Literal {
        return None;
    }
    token_text(source, token).chars().next()
}
