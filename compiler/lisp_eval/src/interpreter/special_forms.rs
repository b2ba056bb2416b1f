//! Keyword-headed forms: `if`, `begin`, `let`, `set`, `and`, `or`, `not`.
//!
//! Operands arrive unevaluated; each form decides which of them run and in
//! what order.

use lisp_ir::{Expr, Token, TokenKind};
use tracing::trace;

use super::Interpreter;
use crate::errors::{invalid_special_form, unexpected_keyword, wrong_arg_count, EvalResult};
use crate::{Environment, Value};

impl Interpreter {
    pub(super) fn eval_special_form(
        &mut self,
        keyword: &Token,
        args: &[Expr],
        env: &Environment,
    ) -> EvalResult {
        trace!(form = %keyword.lexeme, args = args.len(), "special form");
        match keyword.kind {
            TokenKind::If => self.eval_if(keyword, args, env),
            TokenKind::Begin => self.eval_sequence(args, env),
            TokenKind::Let => self.eval_let(keyword, args, env),
            TokenKind::Set => self.eval_set(keyword, args, env),
            TokenKind::And => self.eval_and(args, env),
            TokenKind::Or => self.eval_or(args, env),
            TokenKind::Not => self.eval_not(keyword, args, env),
            _ => Err(unexpected_keyword(keyword)),
        }
    }

    /// `(if cond then [else])`
    fn eval_if(&mut self, keyword: &Token, args: &[Expr], env: &Environment) -> EvalResult {
        let (cond, then_branch, else_branch) = match args {
            [cond, then_branch] => (cond, then_branch, None),
            [cond, then_branch, else_branch] => (cond, then_branch, Some(else_branch)),
            _ => return Err(wrong_arg_count(Some(keyword), "2 or 3", args.len())),
        };

        if self.evaluate(cond, env)?.is_truthy() {
            self.evaluate(then_branch, env)
        } else if let Some(else_branch) = else_branch {
            self.evaluate(else_branch, env)
        } else {
            Ok(Value::Nil)
        }
    }

    /// Evaluate `body` in order in `env`, yielding the last value.
    fn eval_sequence(&mut self, body: &[Expr], env: &Environment) -> EvalResult {
        let mut last = Value::Nil;
        for expr in body {
            last = self.evaluate(expr, env)?;
        }
        Ok(last)
    }

    /// `(let ((name init) ...) body...)`
    fn eval_let(&mut self, keyword: &Token, args: &[Expr], env: &Environment) -> EvalResult {
        let Some((bindings, body)) = args.split_first() else {
            return Err(invalid_special_form(keyword, "expect binding list after 'let'"));
        };
        let bindings = let_bindings(keyword, bindings)?;

        let scope = env.child_scope();
        for (name, init) in bindings {
            let value = self.evaluate(init, env)?;
            scope.define(&name.lexeme, value);
        }
        self.eval_sequence(body, &scope)
    }

    /// `(set name value)`
    fn eval_set(&mut self, keyword: &Token, args: &[Expr], env: &Environment) -> EvalResult {
        let [target, value] = args else {
            return Err(wrong_arg_count(Some(keyword), 2, args.len()));
        };
        let Expr::Symbol(name) = target else {
            return Err(invalid_special_form(keyword, "expect variable name after 'set'"));
        };

        let value = self.evaluate(value, env)?;
        env.assign(name, value.clone())?;
        Ok(value)
    }

    /// `(and e...)`: the first falsey value, else the last value.
    fn eval_and(&mut self, args: &[Expr], env: &Environment) -> EvalResult {
        let mut last = Value::Bool(true);
        for arg in args {
            last = self.evaluate(arg, env)?;
            if !last.is_truthy() {
                break;
            }
        }
        Ok(last)
    }

    /// `(or e...)`: the first truthy value, else the last value.
    fn eval_or(&mut self, args: &[Expr], env: &Environment) -> EvalResult {
        let mut last = Value::Bool(false);
        for arg in args {
            last = self.evaluate(arg, env)?;
            if last.is_truthy() {
                break;
            }
        }
        Ok(last)
    }

    /// `(not e)`
    fn eval_not(&mut self, keyword: &Token, args: &[Expr], env: &Environment) -> EvalResult {
        let [operand] = args else {
            return Err(wrong_arg_count(Some(keyword), 1, args.len()));
        };
        Ok(Value::Bool(!self.evaluate(operand, env)?.is_truthy()))
    }
}

/// Unpack a parsed binding list.
///
/// `((a 1) (b 2))` parses as a list whose head is `(a 1)` and whose tail
/// holds the remaining bindings, so both are checked the same way.
fn let_bindings<'e>(keyword: &Token, bindings: &'e Expr) -> EvalResult<Vec<(&'e Token, &'e Expr)>> {
    let Expr::List { head, tail } = bindings else {
        return Err(invalid_special_form(keyword, "expect binding list after 'let'"));
    };

    std::iter::once(head.as_ref())
        .chain(tail)
        .map(|binding| match binding {
            Expr::List { head, tail } => match (head.as_ref(), tail.as_slice()) {
                (Expr::Symbol(name), [init]) => Ok((name, init)),
                _ => Err(invalid_special_form(
                    keyword,
                    "each 'let' binding must be (name value)",
                )),
            },
            _ => Err(invalid_special_form(
                keyword,
                "each 'let' binding must be (name value)",
            )),
        })
        .collect()
}
