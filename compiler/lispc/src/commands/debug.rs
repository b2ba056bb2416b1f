//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::io::Write;

use super::read_file;
use crate::CliError;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    writeln!(out, "Tokens for '{path}':")?;
    lex_source(&source, out)
}

/// Write one line per token: line number, kind and lexeme.
pub fn lex_source(source: &str, out: &mut impl Write) -> Result<(), CliError> {
    for token in lisp_lexer::lex(source)? {
        writeln!(out, "  {:>4}  {:?}  {}", token.line, token.kind, token.lexeme)?;
    }
    Ok(())
}

/// Parse a file and display each top-level form.
pub fn parse_file(path: &str, out: &mut impl Write) -> Result<(), CliError> {
    let source = read_file(path)?;
    writeln!(out, "Forms for '{path}':")?;
    parse_source(&source, out)
}

/// Write each parsed form back as an s-expression, one per line.
pub fn parse_source(source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let tokens = lisp_lexer::lex(source)?;
    for form in lisp_parse::parse(&tokens)? {
        writeln!(out, "  {form}")?;
    }
    Ok(())
}
