//! Grammar productions.
//!
//! ```text
//! expr     := list | atom
//! list     := "(" expr expr* ")"
//!           | "(" "define" signature expr ")"
//! atom     := keyword | operator | number | string | symbol | "true" | "nil"
//! ```
//!
//! A list's head is parsed like any other expression; only a `define`
//! keyword in that position changes how the rest of the list is read.

mod function;

use lisp_ir::{Expr, Literal, TokenKind, TokenLiteral};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `list | atom`.
    pub(crate) fn parse_list(&mut self) -> Result<Expr, ParseError> {
        if !self.cursor.match_kind(TokenKind::LeftParen) {
            return self.parse_atom();
        }

        let head = self.parse_expression()?;

        if let Expr::Keyword(keyword) = &head {
            if keyword.kind == TokenKind::Define {
                trace!(line = keyword.line, "parse_list -> function definition");
                return self.parse_function_definition();
            }
        }

        let mut tail = Vec::new();
        while !self.cursor.check(TokenKind::RightParen) && !self.cursor.is_at_end() {
            tail.push(self.parse_expression()?);
        }
        self.cursor
            .consume(TokenKind::RightParen, "expect ')' after expression")?;

        Ok(Expr::list(head, tail))
    }

    /// A single-token expression.
    pub(crate) fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let kind = self.cursor.current_kind();
        trace!(kind = %kind, "parse_atom");

        if kind.is_keyword() {
            return Ok(Expr::Keyword(self.cursor.advance().clone()));
        }
        if kind.is_operator() {
            return Ok(Expr::Operator(self.cursor.advance().clone()));
        }

        match kind {
            TokenKind::Number | TokenKind::String => {
                let token = self.cursor.advance();
                match (kind, &token.literal) {
                    (TokenKind::Number, Some(TokenLiteral::Number(n))) => {
                        Ok(Expr::Atom(Literal::Number(*n)))
                    }
                    (TokenKind::String, Some(TokenLiteral::Str(s))) => {
                        Ok(Expr::Atom(Literal::Str(s.clone())))
                    }
                    _ => Err(ParseError::new(token.clone(), "unexpected literal type")),
                }
            }
            TokenKind::Symbol => Ok(Expr::Symbol(self.cursor.advance().clone())),
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expr::Atom(Literal::Bool(true)))
            }
            TokenKind::Nil => {
                self.cursor.advance();
                Ok(Expr::Atom(Literal::Nil))
            }
            _ => {
                let token = self.cursor.peek();
                let found = if token.kind == TokenKind::Eof {
                    kind.display_name()
                } else {
                    token.lexeme.as_str()
                };
                Err(self
                    .cursor
                    .error_at_current(format!("unexpected token: {found}")))
            }
        }
    }
}
