use lisp_eval::{Interpreter, Value};
use lispc::eval_source;
use pretty_assertions::assert_eq;

use crate::common::run_ok;

#[test]
fn test_add_round_trip() {
    assert_eq!(
        run_ok("(define (add (a b)) (+ a b))\n(add 2 3)"),
        Value::Number(5.0)
    );
}

#[test]
fn test_fibonacci() {
    let source = "
        ; naive doubly recursive fib
        (define fib (n)
          (if (< n 2)
              n
              (+ (fib (- n 1)) (fib (- n 2)))))
        (fib 15)";
    assert_eq!(run_ok(source), Value::Number(610.0));
}

#[test]
fn test_mutual_recursion() {
    let source = "
        (define even? (n) (if (= n 0) true (odd? (- n 1))))
        (define odd? (n) (if (= n 0) nil (even? (- n 1))))
        (even? 10)";
    assert_eq!(run_ok(source), Value::Bool(true));
}

#[test]
fn test_returned_closure_shares_scope() {
    let mut interpreter = Interpreter::new();
    eval_source(
        "(define make-counter ()
           (let ((count 0))
             (define tick () (begin (set count (+ count 1)) count))
             tick))",
        &mut interpreter,
    )
    .unwrap();

    let counter = eval_source("(make-counter)", &mut interpreter).unwrap();
    interpreter.globals().define("counter", counter);

    assert_eq!(eval_source("(counter)", &mut interpreter).unwrap(), Value::Number(1.0));
    assert_eq!(eval_source("(counter)", &mut interpreter).unwrap(), Value::Number(2.0));
    assert_eq!(
        eval_source("((make-counter))", &mut interpreter).unwrap(),
        Value::Number(1.0)
    );
}

#[test]
fn test_higher_order_functions() {
    let source = "
        (define twice (f x) (f (f x)))
        (define inc (n) (+ n 1))
        (+ (twice inc 5) (twice * 3))";
    // `(twice * 3)` applies `*` to a single operand twice: 3.
    assert_eq!(run_ok(source), Value::Number(10.0));
}

#[test]
fn test_strings_and_escapes() {
    assert_eq!(run_ok(r#""line\nbreak""#), Value::string("line\nbreak"));
    assert_eq!(run_ok(r#"(= "a" "a")"#), Value::Bool(true));
}

#[test]
fn test_definitions_persist_between_sources() {
    let mut interpreter = Interpreter::new();
    eval_source("(define sq (x) (* x x))", &mut interpreter).unwrap();
    assert_eq!(
        eval_source("(sq 12)", &mut interpreter).unwrap(),
        Value::Number(144.0)
    );
}

#[test]
fn test_deep_recursion_within_limit() {
    let source = "
        (define count-down (n) (if (= n 0) 0 (count-down (- n 1))))
        (count-down 5000)";
    assert_eq!(run_ok(source), Value::Number(0.0));
}

#[test]
fn test_deeply_nested_form() {
    let depth = 100_000;
    let source = format!("{}1{}", "(+ ".repeat(depth), ")".repeat(depth));
    assert_eq!(run_ok(&source), Value::Number(1.0));
}
