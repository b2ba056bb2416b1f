//! Scanner errors.

use thiserror::Error;

/// A failure to turn source text into tokens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("[line {line}] Error: unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, line: u32 },

    #[error("[line {line}] Error: unterminated string")]
    UnterminatedString { line: u32 },

    #[error("[line {line}] Error: invalid escape sequence '\\{ch}' in string")]
    InvalidEscape { ch: char, line: u32 },
}
