use lisp_eval::{Value, DEFAULT_MAX_CALL_DEPTH};
use std::io::{self, Write};

use lispc::commands::{finish, lex_source, parse_file, parse_source, run_file, RunOptions};
use lispc::CliError;
use pretty_assertions::assert_eq;

use crate::common::write_program;

fn captured(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_run_file_prints_last_value() {
    let path = write_program(
        "fact",
        "(define fact (n) (if (< n 2) 1 (* n (fact (- n 1)))))\n(fact 5)\n",
    );
    let mut out = Vec::new();
    let value = run_file(path.to_str().unwrap(), &RunOptions::default(), &mut out).unwrap();

    assert_eq!(value, Value::Number(120.0));
    assert_eq!(String::from_utf8(out).unwrap(), "120\n");
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_run_file_nil_prints_nothing() {
    let path = write_program("nil-result", "(define f () 1)\n");
    let mut out = Vec::new();
    let value = run_file(path.to_str().unwrap(), &RunOptions::default(), &mut out).unwrap();

    assert_eq!(value, Value::Nil);
    assert!(out.is_empty());
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_run_file_respects_max_depth() {
    let path = write_program("deep", "(define spin (n) (spin n))\n(spin 1)\n");
    let options = RunOptions { max_call_depth: 20 };
    let err = run_file(path.to_str().unwrap(), &options, &mut Vec::new()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "[line 1] Error at 'spin': maximum call depth of 20 exceeded"
    );
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_missing_file() {
    let err = run_file(
        "definitely/not/here.lisp",
        &RunOptions::default(),
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, CliError::Read { .. }), "{err:?}");
    assert_eq!(err.to_string(), "cannot find file 'definitely/not/here.lisp'");
}

#[test]
fn test_max_depth_flag() {
    let mut options = RunOptions::default();
    assert_eq!(options.max_call_depth, DEFAULT_MAX_CALL_DEPTH);

    assert_eq!(options.apply_flag("--max-depth=64"), Ok(true));
    assert_eq!(options.max_call_depth, 64);

    assert_eq!(options.apply_flag("fact.lisp"), Ok(false));
    assert!(options.apply_flag("--max-depth=lots").is_err());
}

#[test]
fn test_lex_output() {
    let out = captured(|out| lex_source("(+ 1\n\"s\")", out));
    let lines: Vec<&str> = out.lines().map(str::trim_end).collect();
    assert_eq!(
        lines,
        vec![
            "     1  LeftParen  (",
            "     1  Plus  +",
            "     1  Number  1",
            "     2  String  \"s\"",
            "     2  RightParen  )",
            "     2  Eof",
        ]
    );
}

#[test]
fn test_parse_output_normalizes_definitions() {
    let out = captured(|out| parse_source("(define add (a b) (+ a b)) (add 2 3)", out));
    assert_eq!(out, "  (define (add (a b)) (+ a b))\n  (add 2 3)\n");
}

#[test]
fn test_parse_file_reports_errors() {
    let path = write_program("bad-parse", "(define 1 (a) a)");
    let err = parse_file(path.to_str().unwrap(), &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "[line 1] Error at '1': expect function name");
    std::fs::remove_file(path).unwrap();
}

/// Accepts writes but fails every flush, like a closed pipe.
struct FailingFlush;

impl Write for FailingFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[test]
fn test_finish_reports_flush_failure() {
    let err = finish(Ok(()), &mut FailingFlush).unwrap_err();
    assert!(matches!(err, CliError::Output(_)), "{err:?}");
    assert_eq!(err.to_string(), "error writing output: pipe closed");
}

#[test]
fn test_finish_keeps_command_error() {
    let err = finish(
        Err(CliError::Read {
            path: "x.lisp".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        }),
        &mut FailingFlush,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "cannot find file 'x.lisp'");
}

#[test]
fn test_finish_flushes_output() {
    let mut out = Vec::new();
    writeln!(out, "done").unwrap();
    finish(Ok(()), &mut out).unwrap();
    assert_eq!(out, b"done\n");
}
