//! Parse error type.

use lisp_ir::{Token, TokenKind};
use thiserror::Error;

/// A malformed token sequence.
///
/// Carries the token where parsing stopped, so callers can report
/// `[line N] Error at 'x': ...`.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("[line {}] Error {}: {}", .token.line, .token.location(), .message)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        ParseError {
            token,
            message: message.into(),
        }
    }

    /// True when parsing ran out of input rather than hitting a bad token.
    ///
    /// A REPL uses this to keep reading lines for an unfinished form.
    pub fn is_incomplete(&self) -> bool {
        self.token.kind == TokenKind::Eof
    }
}
