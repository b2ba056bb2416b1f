//! Tree-walking interpreter.
//!
//! Dispatch is on the `Expr` variant. For lists, a keyword head selects a
//! special form; any other head is evaluated first and the resulting value
//! decides between operator application and a closure call.

mod builder;
mod special_forms;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use lisp_ir::{Expr, Token};
use lisp_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::{
    not_callable, recursion_limit_exceeded, unexpected_keyword, wrong_arg_count, EvalResult,
};
use crate::{apply_operator, Callable, Closure, Environment, Value};

/// Evaluates expressions against environments.
///
/// Holds the global environment and call-depth bookkeeping; the
/// environment for each evaluation is passed explicitly.
pub struct Interpreter {
    globals: Environment,
    max_call_depth: usize,
    call_depth: usize,
}

impl Interpreter {
    /// An interpreter with a fresh global environment and default limits.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// The top-level environment used by [`Interpreter::run`].
    #[inline]
    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    /// Evaluate top-level forms in order in the global environment.
    ///
    /// Returns the last form's value (`nil` for no forms) or the first error.
    pub fn run(&mut self, forms: &[Expr]) -> EvalResult {
        let globals = self.globals.clone();
        let mut last = Value::Nil;
        for form in forms {
            last = self.evaluate(form, &globals)?;
        }
        Ok(last)
    }

    /// Evaluate `expr` in `env`.
    pub fn evaluate(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr, env))
    }

    fn eval_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Atom(literal) => Ok(Value::from_literal(literal)),
            Expr::Symbol(name) => env.get(name),
            Expr::Operator(op) => Ok(Value::Callable(Callable::Operator(op.clone()))),
            Expr::Keyword(keyword) => Err(unexpected_keyword(keyword)),
            Expr::List { head, tail } => self.eval_list(head, tail, env),
            Expr::FuncDefinition(definition) => {
                trace!(name = %definition.name.lexeme, "define function");
                let function = Value::function(definition.clone(), env.clone());
                env.define(&definition.name.lexeme, function);
                Ok(Value::Nil)
            }
        }
    }

    fn eval_list(&mut self, head: &Expr, tail: &[Expr], env: &Environment) -> EvalResult {
        if let Expr::Keyword(keyword) = head {
            return self.eval_special_form(keyword, tail, env);
        }

        let callee = self.evaluate(head, env)?;
        match callee {
            Value::Callable(Callable::Operator(op)) => {
                let args = self.eval_args(tail, env)?;
                apply_operator(&op, &args)
            }
            Value::Callable(Callable::Function(closure)) => {
                let args = self.eval_args(tail, env)?;
                self.call_function(&closure, args, head.token())
            }
            other @ (Value::Number(_) | Value::Str(_) | Value::Bool(_) | Value::Nil) => {
                Err(not_callable(head.token(), other.type_name()))
            }
        }
    }

    /// Evaluate operands left to right, stopping at the first error.
    fn eval_args(&mut self, args: &[Expr], env: &Environment) -> EvalResult<Vec<Value>> {
        args.iter().map(|arg| self.evaluate(arg, env)).collect()
    }

    /// Call a closure: bind parameters in a new child of the captured
    /// environment and evaluate the body there.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = %closure.name(), depth = self.call_depth)
    )]
    fn call_function(
        &mut self,
        closure: &Closure,
        args: Vec<Value>,
        call_site: Option<&Token>,
    ) -> EvalResult {
        let definition = &closure.definition;
        if args.len() != definition.params.len() {
            return Err(wrong_arg_count(call_site, definition.params.len(), args.len()));
        }
        if self.call_depth >= self.max_call_depth {
            return Err(recursion_limit_exceeded(call_site, self.max_call_depth));
        }

        let frame = closure.env.child_scope();
        for (param, arg) in definition.params.iter().zip(args) {
            frame.define(&param.lexeme, arg);
        }

        self.call_depth += 1;
        let result = self.evaluate(&definition.body, &frame);
        self.call_depth -= 1;
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
