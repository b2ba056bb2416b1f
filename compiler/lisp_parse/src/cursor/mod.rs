//! Token cursor for navigating the token stream.
//!
//! Provides one-token lookahead and the `check` / `advance` / `consume`
//! primitives the grammar is written in terms of.

use lisp_ir::{Token, TokenKind};
use tracing::trace;

use crate::ParseError;

/// Stand-in returned when a caller hands over a slice without a trailing
/// `Eof` token, so the cursor never indexes past the end.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    literal: None,
    line: 0,
};

/// Cursor over a borrowed token slice.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// The token under the cursor (the lookahead).
    #[inline]
    pub fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// The most recently consumed token.
    ///
    /// Returns the `Eof` stand-in before anything has been consumed.
    #[inline]
    pub fn previous(&self) -> &'a Token {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&EOF)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume and return the current token. Never moves past `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        trace!(pos = self.pos, kind = %token.kind, line = token.line, "advance");
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has `kind`.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or fail with `message` at the current token.
    pub fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(self.error_at_current(message))
        }
    }

    #[cold]
    #[inline(never)]
    pub fn error_at_current(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.peek().clone(), message)
    }
}
