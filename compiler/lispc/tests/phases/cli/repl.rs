use lisp_eval::{Interpreter, InterpreterBuilder};
use lispc::commands::run_repl;
use pretty_assertions::assert_eq;

fn session(input: &str, interpreter: &mut Interpreter) -> String {
    let mut out = Vec::new();
    run_repl(input.as_bytes(), &mut out, interpreter).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_results_are_printed() {
    let out = session("(define sq (x) (* x x))\n(sq 4)\n", &mut Interpreter::new());
    assert_eq!(out, "> > 16\n> \n");
}

#[test]
fn test_open_list_continues_on_next_line() {
    let out = session("(+ 1\n2)\n", &mut Interpreter::new());
    assert_eq!(out, "> . 3\n> \n");
}

#[test]
fn test_open_string_continues_on_next_line() {
    let out = session("\"two\nlines\"\n", &mut Interpreter::new());
    assert_eq!(out, "> . two\nlines\n> \n");
}

#[test]
fn test_blank_lines_are_skipped() {
    let out = session("\n\n1\n", &mut Interpreter::new());
    assert_eq!(out, "> > > 1\n> \n");
}

#[test]
fn test_errors_do_not_end_session() {
    let out = session("missing\n(+ 2 2)\n", &mut Interpreter::new());
    assert_eq!(
        out,
        "> [line 1] Error at 'missing': undefined variable 'missing'\n> 4\n> \n"
    );
}

#[test]
fn test_bindings_survive_later_errors() {
    let mut interpreter = Interpreter::new();
    let out = session("(define one () 1) (one 2)\n(one)\n", &mut interpreter);
    assert!(out.contains("expected 0 arguments but got 1"), "{out}");
    assert!(out.ends_with("> 1\n> \n"), "{out}");
    assert!(interpreter.globals().lookup("one").is_some());
}

#[test]
fn test_unfinished_form_at_end_of_input_is_reported() {
    let out = session("(+ 1\n", &mut Interpreter::new());
    assert!(out.starts_with("> . "), "{out}");
    assert!(out.contains("expect ')' after expression"), "{out}");
}

#[test]
fn test_configured_depth_applies() {
    let mut interpreter = InterpreterBuilder::new().max_call_depth(5).build();
    let out = session("(define spin (n) (spin n))\n(spin 0)\n", &mut interpreter);
    assert!(out.contains("maximum call depth of 5 exceeded"), "{out}");
}
