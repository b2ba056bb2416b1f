//! Runtime errors and their constructors.
//!
//! Every runtime failure is built through one of the functions here so the
//! wording stays consistent across the evaluator.

use std::fmt::Display;

use lisp_ir::Token;
use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Broad category of a runtime error, for callers that branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Symbol not bound anywhere in the scope chain (lookup or `set`).
    UndefinedVariable,
    /// Non-numeric operand to an arithmetic or comparison operator.
    OperandType,
    /// Wrong number of arguments to a function, operator or special form.
    Arity,
    /// Head of an application evaluated to something that cannot be called.
    NotCallable,
    /// Keyword evaluated outside a form it can head.
    UnexpectedKeyword,
    /// Special form with malformed operands (e.g. a bad `let` binding).
    InvalidSpecialForm,
    /// Call depth exceeded the interpreter's configured limit.
    RecursionLimit,
}

/// A runtime error, located by the token where it was raised when one exists.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{}{}", location_prefix(.token), .message)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub token: Option<Token>,
    pub message: String,
}

fn location_prefix(token: &Option<Token>) -> String {
    match token {
        Some(token) => format!("[line {}] Error {}: ", token.line, token.location()),
        None => "Error: ".to_string(),
    }
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, token: Option<&Token>, message: impl Into<String>) -> Self {
        EvalError {
            kind,
            token: token.cloned(),
            message: message.into(),
        }
    }
}

// Variable errors

#[cold]
pub fn undefined_variable(name: &Token) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndefinedVariable,
        Some(name),
        format!("undefined variable '{}'", name.lexeme),
    )
}

// Operand errors

#[cold]
pub fn operand_must_be_number(operator: &Token) -> EvalError {
    EvalError::new(
        EvalErrorKind::OperandType,
        Some(operator),
        "Operator must be a number",
    )
}

#[cold]
pub fn operands_must_be_numbers(operator: &Token) -> EvalError {
    EvalError::new(
        EvalErrorKind::OperandType,
        Some(operator),
        "Operators must be numbers",
    )
}

// Call errors

#[cold]
pub fn wrong_arg_count(at: Option<&Token>, expected: impl Display, got: usize) -> EvalError {
    let expected = expected.to_string();
    let noun = if expected == "1" { "argument" } else { "arguments" };
    EvalError::new(
        EvalErrorKind::Arity,
        at,
        format!("expected {expected} {noun} but got {got}"),
    )
}

#[cold]
pub fn not_callable(at: Option<&Token>, type_name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::NotCallable,
        at,
        format!("can only call functions and operators, not {type_name}"),
    )
}

#[cold]
pub fn not_an_operator(token: &Token) -> EvalError {
    EvalError::new(
        EvalErrorKind::NotCallable,
        Some(token),
        format!("'{}' is not an operator", token.lexeme),
    )
}

#[cold]
pub fn recursion_limit_exceeded(at: Option<&Token>, max_depth: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::RecursionLimit,
        at,
        format!("maximum call depth of {max_depth} exceeded"),
    )
}

// Special form errors

#[cold]
pub fn unexpected_keyword(keyword: &Token) -> EvalError {
    EvalError::new(
        EvalErrorKind::UnexpectedKeyword,
        Some(keyword),
        format!("unexpected keyword '{}'", keyword.lexeme),
    )
}

#[cold]
pub fn invalid_special_form(keyword: &Token, message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidSpecialForm, Some(keyword), message)
}
