//! Shared helpers for phase tests.

use std::path::PathBuf;

use lisp_eval::{Interpreter, Value};
use lispc::{eval_source, CliError};

/// Run `source` in a fresh interpreter.
pub fn run(source: &str) -> Result<Value, CliError> {
    eval_source(source, &mut Interpreter::new())
}

/// Run `source` and expect it to succeed.
pub fn run_ok(source: &str) -> Value {
    run(source).unwrap_or_else(|err| panic!("program failed: {err}\n{source}"))
}

/// Write `source` to a file in the temp directory, unique per test name.
pub fn write_program(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lispc-{}-{name}.lisp", std::process::id()));
    std::fs::write(&path, source).unwrap();
    path
}
