//! Errors surfaced by the driver.

use std::io;

use lisp_eval::EvalError;
use lisp_lexer::LexError;
use lisp_parse::ParseError;
use thiserror::Error;

/// Any failure from reading, lexing, parsing or evaluating a program.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", describe_io(.path, .source))]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

fn describe_io(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

impl CliError {
    /// True when more input could still turn this into a valid program:
    /// the source ended inside a string or an open list.
    pub fn is_incomplete(&self) -> bool {
        match self {
            CliError::Lex(LexError::UnterminatedString { .. }) => true,
            CliError::Parse(err) => err.is_incomplete(),
            _ => false,
        }
    }
}
