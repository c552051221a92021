//! Token kinds for the pattern language.
//!
//! Logos is derived directly on this enum. `Concat` carries no token attribute:
//! the lexer never produces it, only the formatter inserts it.

use logos::Logos;

/// All kinds of tokens in a pattern.
///
/// Any character that is not one of the six metacharacters `( ) * + ? |`
/// is a `Literal`, including whitespace and non-ASCII characters.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token("|")]
    Pipe,

    #[regex(r"[^()*+?|]")]
    Literal,

    /// Explicit concatenation marker.
    Concat,
}

impl SyntaxKind {
    /// Binding strength used by the postfix converter.
    ///
    /// `ParenOpen` only ever sits on the operator stack as a sentinel.
    /// Operands have no precedence.
    pub fn precedence(self) -> Option<u8> {
        match self {
            SyntaxKind::Star | SyntaxKind::Plus | SyntaxKind::Question => Some(4),
            SyntaxKind::Concat => Some(3),
            SyntaxKind::Pipe => Some(2),
            SyntaxKind::ParenOpen => Some(1),
            SyntaxKind::ParenClose | SyntaxKind::Literal => None,
        }
    }

    /// Postfix quantifiers: `*`, `+`, `?`.
    pub fn is_quantifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::Star | SyntaxKind::Plus | SyntaxKind::Question
        )
    }

    /// Operators that consume fragments during NFA construction.
    pub fn is_operator(self) -> bool {
        self.is_quantifier() || matches!(self, SyntaxKind::Concat | SyntaxKind::Pipe)
    }

    /// Number of fragments the operator pops.
    pub fn arity(self) -> usize {
        match self {
            SyntaxKind::Concat | SyntaxKind::Pipe => 2,
            SyntaxKind::Star | SyntaxKind::Plus | SyntaxKind::Question => 1,
            _ => 0,
        }
    }

    /// Text used when a token stream is rendered back to a string.
    ///
    /// Returns `None` for literals, whose text comes from the source.
    pub fn symbol(self) -> Option<char> {
        match self {
            SyntaxKind::ParenOpen => Some('('),
            SyntaxKind::ParenClose => Some(')'),
            SyntaxKind::Star => Some('*'),
            SyntaxKind::Plus => Some('+'),
            SyntaxKind::Question => Some('?'),
            SyntaxKind::Pipe => Some('|'),
            SyntaxKind::Concat => Some('.'),
            SyntaxKind::Literal => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            SyntaxKind::ParenOpen => "`(`",
            SyntaxKind::ParenClose => "`)`",
            SyntaxKind::Star => "`*`",
            SyntaxKind::Plus => "`+`",
            SyntaxKind::Question => "`?`",
            SyntaxKind::Pipe => "`|`",
            SyntaxKind::Literal => "literal",
            SyntaxKind::Concat => "concatenation",
        }
    }
}
