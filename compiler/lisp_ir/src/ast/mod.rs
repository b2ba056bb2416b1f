//! AST nodes shared by the parser and the evaluator.
//!
//! `Expr` is a closed sum type: every consumer matches it exhaustively.
//! A `List` stays uninterpreted until evaluation, where the evaluated form of
//! its head decides between operator application, closure call, or special
//! form.
//!
//! Trees can be as deep as the source nests. `Display` grows the stack as
//! it recurses, and dropping a tree frees it through a work-list instead of
//! recursing once per level.

use std::fmt;
use std::mem;
use std::rc::Rc;

use lisp_stack::ensure_sufficient_stack;

use crate::Token;

/// A self-evaluating literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

/// A parsed expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Literal number, string, boolean or nil.
    Atom(Literal),
    /// Variable reference, resolved at evaluation time.
    Symbol(Token),
    /// One of `+ - * / = < >`.
    Operator(Token),
    /// Reserved word; only meaningful in head position of a list.
    Keyword(Token),
    /// Application or special-form invocation.
    List { head: Box<Expr>, tail: Vec<Expr> },
    /// `(define ...)` form. Shared so callables can hold it without copying
    /// the body.
    FuncDefinition(Rc<FuncDefinition>),
}

/// A named function definition: name, parameter tokens and a single body.
#[derive(Clone, Debug, PartialEq)]
pub struct FuncDefinition {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Expr,
}

impl Expr {
    #[inline]
    pub fn number(value: f64) -> Self {
        Expr::Atom(Literal::Number(value))
    }

    pub fn list(head: Expr, tail: Vec<Expr>) -> Self {
        Expr::List {
            head: Box::new(head),
            tail,
        }
    }

    /// The token that best locates this expression in source, if any.
    ///
    /// Atoms carry no token; lists report the token of their head.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Expr::Atom(_) => None,
            Expr::Symbol(t) | Expr::Operator(t) | Expr::Keyword(t) => Some(t),
            Expr::List { head, .. } => head.token(),
            Expr::FuncDefinition(def) => Some(&def.name),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => write!(f, "{s:?}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Nil => f.write_str("nil"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(lit) => write!(f, "{lit}"),
            Expr::Symbol(t) | Expr::Operator(t) | Expr::Keyword(t) => f.write_str(&t.lexeme),
            Expr::List { head, tail } => ensure_sufficient_stack(|| {
                write!(f, "({head}")?;
                for expr in tail {
                    write!(f, " {expr}")?;
                }
                f.write_str(")")
            }),
            Expr::FuncDefinition(def) => write!(f, "{def}"),
        }
    }
}

impl fmt::Display for FuncDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(define ({} (", self.name.lexeme)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&param.lexeme)?;
        }
        write!(f, ")) {})", self.body)
    }
}

impl Expr {
    /// Move this node's children into `out`, leaving it childless.
    ///
    /// A definition's body is only taken when this is the last reference;
    /// a closure may still share it.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::List { head, tail } => {
                out.push(mem::replace(&mut **head, Expr::Atom(Literal::Nil)));
                out.append(tail);
            }
            Expr::FuncDefinition(def) => {
                if let Some(def) = Rc::get_mut(def) {
                    out.push(mem::replace(&mut def.body, Expr::Atom(Literal::Nil)));
                }
            }
            Expr::Atom(_) | Expr::Symbol(_) | Expr::Operator(_) | Expr::Keyword(_) => {}
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}
