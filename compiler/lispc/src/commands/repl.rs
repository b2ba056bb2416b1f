//! Interactive read-eval-print loop.

use std::io::{BufRead, Write};

use lisp_eval::{Interpreter, Value};
use tracing::debug;

use crate::{eval_source, CliError};

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = ". ";

/// Read forms from `input` until end of input, printing each result.
///
/// Lines are buffered while the pending text is an unfinished form (open
/// list or string). Errors are reported to `out` and the failing input is
/// discarded; bindings made before the error are kept.
pub fn run_repl(
    input: impl BufRead,
    out: &mut impl Write,
    interpreter: &mut Interpreter,
) -> Result<(), CliError> {
    let mut pending = String::new();
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        pending.push_str(&line?);
        pending.push('\n');

        if pending.trim().is_empty() {
            pending.clear();
        } else {
            match eval_source(&pending, interpreter) {
                Err(err) if err.is_incomplete() => {
                    debug!("incomplete form, reading more");
                    write!(out, "{CONTINUATION_PROMPT}")?;
                    out.flush()?;
                    continue;
                }
                Err(err) => writeln!(out, "{err}")?,
                Ok(Value::Nil) => {}
                Ok(value) => writeln!(out, "{value}")?,
            }
            pending.clear();
        }

        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    if !pending.trim().is_empty() {
        if let Err(err) = eval_source(&pending, interpreter) {
            writeln!(out, "{err}")?;
        }
    }
    writeln!(out)?;
    Ok(())
}
