//! Lisp IR - shared data model for the Lisp toolchain.
//!
//! This crate contains the types every stage agrees on:
//! - `Token` / `TokenKind` for scanner output
//! - `Expr` for the parsed AST
//!
//! The lexer produces tokens, the parser turns them into `Expr` trees, and the
//! evaluator walks those trees. Keeping the shapes in one crate means the
//! parser and evaluator cannot drift apart.

pub mod ast;
mod token;

pub use ast::{Expr, FuncDefinition, Literal};
pub use token::{Token, TokenKind, TokenLiteral};
