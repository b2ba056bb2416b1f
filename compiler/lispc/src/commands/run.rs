//! `lisp run`: evaluate a whole file.

use std::io::Write;

use lisp_eval::{InterpreterBuilder, Value, DEFAULT_MAX_CALL_DEPTH};
use tracing::info;

use super::read_file;
use crate::{eval_source, CliError};

/// Interpreter settings taken from the command line.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub max_call_depth: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl RunOptions {
    /// Apply a single `--flag=value` argument. Returns `false` if the
    /// argument is not a run option.
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, String> {
        let Some(depth) = arg.strip_prefix("--max-depth=") else {
            return Ok(false);
        };
        self.max_call_depth = depth
            .parse()
            .map_err(|_| format!("invalid --max-depth value '{depth}'"))?;
        Ok(true)
    }
}

/// Evaluate every form in `path`, stopping at the first error.
///
/// The value of the last form is written to `out` unless it is `nil`.
pub fn run_file(path: &str, options: &RunOptions, out: &mut impl Write) -> Result<Value, CliError> {
    let source = read_file(path)?;
    info!(path, bytes = source.len(), "running file");

    let mut interpreter = InterpreterBuilder::new()
        .max_call_depth(options.max_call_depth)
        .build();
    let value = eval_source(&source, &mut interpreter)?;
    if !matches!(value, Value::Nil) {
        writeln!(out, "{value}")?;
    }
    Ok(value)
}
