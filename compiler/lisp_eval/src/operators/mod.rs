//! Operator application.
//!
//! Operands arrive already evaluated, left to right. Arithmetic folds over
//! any number of operands; comparisons take exactly two. Numbers are `f64`
//! throughout, so division follows IEEE-754 (`(/ 1 0)` is infinity).

use lisp_ir::{Token, TokenKind};

use crate::errors::{
    not_an_operator, operand_must_be_number, operands_must_be_numbers, wrong_arg_count,
    EvalResult,
};
use crate::Value;

/// Require a numeric operand.
#[inline]
pub fn check_number_operand(operator: &Token, operand: &Value) -> EvalResult<f64> {
    operand
        .as_number()
        .ok_or_else(|| operand_must_be_number(operator))
}

/// Require two numeric operands.
#[inline]
pub fn check_number_operands(
    operator: &Token,
    left: &Value,
    right: &Value,
) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operands_must_be_numbers(operator)),
    }
}

/// Apply `operator` to evaluated operands.
pub fn apply_operator(operator: &Token, args: &[Value]) -> EvalResult {
    match operator.kind {
        TokenKind::Plus => fold(operator, 0.0, args, |a, b| a + b),
        TokenKind::Star => fold(operator, 1.0, args, |a, b| a * b),
        TokenKind::Minus => match args {
            [] => Err(wrong_arg_count(Some(operator), "at least 1", 0)),
            [only] => Ok(Value::Number(-check_number_operand(operator, only)?)),
            [first, rest @ ..] => {
                let start = check_number_operand(operator, first)?;
                fold(operator, start, rest, |a, b| a - b)
            }
        },
        TokenKind::Slash => match args {
            [] => Err(wrong_arg_count(Some(operator), "at least 1", 0)),
            [only] => Ok(Value::Number(1.0 / check_number_operand(operator, only)?)),
            [first, rest @ ..] => {
                let start = check_number_operand(operator, first)?;
                fold(operator, start, rest, |a, b| a / b)
            }
        },
        TokenKind::Equal => {
            let (left, right) = binary_operands(operator, args)?;
            Ok(Value::Bool(left.is_equal(right)))
        }
        TokenKind::Less => {
            let (left, right) = binary_operands(operator, args)?;
            let (a, b) = check_number_operands(operator, left, right)?;
            Ok(Value::Bool(a < b))
        }
        TokenKind::Greater => {
            let (left, right) = binary_operands(operator, args)?;
            let (a, b) = check_number_operands(operator, left, right)?;
            Ok(Value::Bool(a > b))
        }
        _ => Err(not_an_operator(operator)),
    }
}

/// Left fold over numeric operands, checking each one as it is reached.
fn fold(operator: &Token, init: f64, args: &[Value], op: impl Fn(f64, f64) -> f64) -> EvalResult {
    args.iter()
        .try_fold(init, |acc, arg| {
            check_number_operand(operator, arg).map(|n| op(acc, n))
        })
        .map(Value::Number)
}

fn binary_operands<'v>(operator: &Token, args: &'v [Value]) -> EvalResult<(&'v Value, &'v Value)> {
    match args {
        [left, right] => Ok((left, right)),
        _ => Err(wrong_arg_count(Some(operator), 2, args.len())),
    }
}
