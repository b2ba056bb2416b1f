//! Function definition parsing.
//!
//! Two signature shapes are accepted after `define`:
//!
//! ```text
//! (define name (a b) body)
//! (define (name (a b)) body)
//! ```

use std::rc::Rc;

use lisp_ir::{Expr, FuncDefinition, Token, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse the rest of a `(define ...)` form. The opening paren and the
    /// `define` keyword have already been consumed; this consumes the
    /// closing paren itself.
    pub(crate) fn parse_function_definition(&mut self) -> Result<Expr, ParseError> {
        let (name, params) = if self.cursor.match_kind(TokenKind::LeftParen) {
            let name = self.parse_function_name()?;
            let params = self.parse_param_list()?;
            self.cursor
                .consume(TokenKind::RightParen, "expect ')' after function signature")?;
            (name, params)
        } else {
            let name = self.parse_function_name()?;
            (name, self.parse_param_list()?)
        };

        let body = self.parse_expression()?;

        self.cursor
            .consume(TokenKind::RightParen, "expect ')' after function definition")?;

        Ok(Expr::FuncDefinition(Rc::new(FuncDefinition {
            name,
            params,
            body,
        })))
    }

    fn parse_function_name(&mut self) -> Result<Token, ParseError> {
        self.cursor
            .consume(TokenKind::Symbol, "expect function name")
    }

    /// `"(" symbol* ")"`
    fn parse_param_list(&mut self) -> Result<Vec<Token>, ParseError> {
        self.cursor
            .consume(TokenKind::LeftParen, "expect '(' before parameter list")?;

        let mut params = Vec::new();
        while !self.cursor.check(TokenKind::RightParen) && !self.cursor.is_at_end() {
            params.push(
                self.cursor
                    .consume(TokenKind::Symbol, "expect parameter name")?,
            );
        }

        self.cursor
            .consume(TokenKind::RightParen, "expect ')' after parameter list")?;
        Ok(params)
    }
}
