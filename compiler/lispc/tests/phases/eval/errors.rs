use lisp_eval::EvalErrorKind;
use lispc::CliError;
use pretty_assertions::assert_eq;

use crate::common::run;

#[test]
fn test_lex_error_surfaces() {
    let err = run("(+ 1 #)").unwrap_err();
    assert!(matches!(err, CliError::Lex(_)), "{err:?}");
    assert!(!err.is_incomplete());
}

#[test]
fn test_parse_error_rendering() {
    let err = run("(+ 1 2").unwrap_err();
    assert!(matches!(err, CliError::Parse(_)), "{err:?}");
    assert!(err.is_incomplete());
    assert_eq!(err.to_string(), "[line 1] Error at end: expect ')' after expression");
}

#[test]
fn test_unterminated_string_is_incomplete() {
    let err = run("(print \"abc").unwrap_err();
    assert!(err.is_incomplete());
}

#[test]
fn test_stray_paren_is_not_incomplete() {
    let err = run(")").unwrap_err();
    assert!(!err.is_incomplete());
}

#[test]
fn test_runtime_error_reports_line() {
    let err = run("(define f (x) x)\n\n(f 1 2)").unwrap_err();
    let CliError::Eval(eval_err) = &err else {
        panic!("expected runtime error, got {err:?}");
    };
    assert_eq!(eval_err.kind, EvalErrorKind::Arity);
    assert_eq!(
        err.to_string(),
        "[line 3] Error at 'f': expected 1 argument but got 2"
    );
}

#[test]
fn test_error_aborts_remaining_forms() {
    let err = run("(undefined-fn 1) (+ 1 2)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "[line 1] Error at 'undefined-fn': undefined variable 'undefined-fn'"
    );
}
