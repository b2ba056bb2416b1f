//! Runtime values.
//!
//! The value set is fixed, so `Value` is a plain enum and every consumer
//! matches it exhaustively.

use std::fmt;
use std::rc::Rc;

use lisp_ir::{FuncDefinition, Literal, Token};

use crate::Environment;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Str(Rc<str>),
    Bool(bool),
    Nil,
    Callable(Callable),
}

/// Something that can sit in head position of an application.
#[derive(Clone, Debug)]
pub enum Callable {
    /// A bare operator such as `+`, evaluated without being applied.
    Operator(Token),
    /// A user function with its captured environment.
    Function(Rc<Closure>),
}

/// A function definition paired with the environment active where it was
/// defined.
pub struct Closure {
    pub definition: Rc<FuncDefinition>,
    pub env: Environment,
}

impl Closure {
    #[inline]
    pub fn name(&self) -> &str {
        &self.definition.name.lexeme
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.definition.params.len()
    }
}

impl fmt::Debug for Closure {
    // The captured environment can contain this closure, so only the
    // signature is printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    pub fn function(definition: Rc<FuncDefinition>, env: Environment) -> Self {
        Value::Callable(Callable::Function(Rc::new(Closure { definition, env })))
    }

    pub fn from_literal(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::Str(s) => Value::string(s),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Nil => Value::Nil,
        }
    }

    /// `nil`, `false` and zero are falsey; everything else is truthy,
    /// including the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Str(_) | Value::Callable(_) => true,
        }
    }

    /// Equality without coercion between kinds.
    ///
    /// Numbers follow IEEE-754 (`NaN` is not equal to itself). Functions are
    /// equal only to the same closure; operators to the same operator.
    pub fn is_equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Callable(Callable::Operator(a)), Value::Callable(Callable::Operator(b))) => {
                a.kind == b.kind
            }
            (Value::Callable(Callable::Function(a)), Value::Callable(Callable::Function(b))) => {
                Rc::ptr_eq(a, b)
            }
            _ => false,
        }
    }

    /// Name of the value's kind, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Nil => "nil",
            Value::Callable(Callable::Operator(_)) => "operator",
            Value::Callable(Callable::Function(_)) => "function",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::Callable(Callable::Operator(op)) => write!(f, "<operator {}>", op.lexeme),
            Value::Callable(Callable::Function(closure)) => write!(f, "<fn {}>", closure.name()),
        }
    }
}
