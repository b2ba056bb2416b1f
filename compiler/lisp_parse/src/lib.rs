//! Recursive descent parser for Lisp.
//!
//! Consumes a token slice produced by `lisp_lexer` and yields one `Expr` per
//! top-level form. One token of lookahead; no error recovery inside a form.
//! The first failure is returned and the cursor is left where it stopped.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use lisp_ir::{Expr, Token};
use lisp_stack::ensure_sufficient_stack;
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over `tokens`.
    ///
    /// The slice is expected to end with an `Eof` token; a missing one is
    /// treated as if it were there.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// True once every form has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Parse exactly one form, leaving the cursor after its closing delimiter.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_list())
    }

    /// Parse forms until end of input.
    pub fn parse_program(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut forms = Vec::new();
        while !self.is_at_end() {
            let form = self.parse_expression()?;
            debug!(line = self.cursor.previous().line, form = %form, "parsed form");
            forms.push(form);
        }
        Ok(forms)
    }
}

/// Parse every form in `tokens`.
pub fn parse(tokens: &[Token]) -> Result<Vec<Expr>, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
