//! Token types for the Lisp scanner.

mod kind;

pub use kind::TokenKind;

use std::fmt;

/// Literal payload carried by number and string tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenLiteral {
    Number(f64),
    Str(String),
}

/// A lexical token: kind, source text, optional literal payload and line.
///
/// Tokens are immutable once the scanner hands them out; the parser clones
/// them into the AST for error locations.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<TokenLiteral>,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<TokenLiteral>,
        line: u32,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// A token without a literal payload (delimiters, operators, keywords).
    pub fn simple(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Token::new(kind, lexeme, None, line)
    }

    pub fn number(value: f64, lexeme: impl Into<String>, line: u32) -> Self {
        Token::new(
            TokenKind::Number,
            lexeme,
            Some(TokenLiteral::Number(value)),
            line,
        )
    }

    pub fn symbol(name: impl Into<String>, line: u32) -> Self {
        Token::simple(TokenKind::Symbol, name, line)
    }

    pub fn eof(line: u32) -> Self {
        Token::simple(TokenKind::Eof, "", line)
    }

    /// Location phrase used in diagnostics: `at 'lexeme'` or `at end`.
    pub fn location(&self) -> String {
        if self.kind == TokenKind::Eof {
            "at end".to_string()
        } else {
            format!("at '{}'", self.lexeme)
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ line {}", self.kind, self.lexeme, self.line)?;
        if let Some(literal) = &self.literal {
            write!(f, " = {literal:?}")?;
        }
        Ok(())
    }
}
