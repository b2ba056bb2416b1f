//! Command handlers for the `lisp` CLI.
//!
//! Handlers write to a caller-supplied sink and return errors instead of
//! exiting, so `main` decides on exit codes and tests can capture output.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, lex_source, parse_file, parse_source};
pub use repl::run_repl;
pub use run::{run_file, RunOptions};

use std::io::Write;

use crate::CliError;

/// Flush `out` once a command has finished.
///
/// A command error takes precedence; otherwise a failed flush is reported
/// as an output error.
pub fn finish(result: Result<(), CliError>, out: &mut impl Write) -> Result<(), CliError> {
    result?;
    out.flush()?;
    Ok(())
}

pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}
