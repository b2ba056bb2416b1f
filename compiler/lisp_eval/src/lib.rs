//! Lisp Eval - tree-walking evaluator.
//!
//! # Architecture
//!
//! - `Environment`: chained lexical scopes, shared by reference count so
//!   closures keep their definition-site scope alive
//! - `Value`: number, string, bool, nil or callable
//! - `apply_operator`: arithmetic and comparison over evaluated operands
//! - `Interpreter`: dispatch over `Expr`, special forms and closure calls
//!
//! Evaluation is strictly sequential: operands are evaluated left to right
//! and the first error aborts the enclosing form.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod value;

pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{apply_operator, check_number_operand, check_number_operands};
pub use value::{Callable, Closure, Value};

#[cfg(test)]
mod tests;
