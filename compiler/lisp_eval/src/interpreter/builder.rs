//! `InterpreterBuilder` for creating `Interpreter` instances.

use super::Interpreter;
use crate::Environment;

/// Default limit on nested closure calls.
///
/// The native stack grows on demand, so this bounds runaway recursion
/// rather than protecting the stack.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for configuring an [`Interpreter`].
pub struct InterpreterBuilder {
    globals: Option<Environment>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            globals: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Use an existing environment as the global scope.
    ///
    /// Lets a REPL or embedder pre-bind values, or share one global scope
    /// between interpreters.
    #[must_use]
    pub fn globals(mut self, env: Environment) -> Self {
        self.globals = Some(env);
        self
    }

    /// Limit how deeply closure calls may nest.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            globals: self.globals.unwrap_or_default(),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
