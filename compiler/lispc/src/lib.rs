//! Lisp interpreter driver.
//!
//! Glues the pipeline together (`lisp_lexer` → `lisp_parse` → `lisp_eval`)
//! and hosts the command handlers used by the `lisp` binary.

pub mod commands;
mod error;

use std::sync::Once;

pub use error::CliError;

use lisp_eval::{Interpreter, Value};
use tracing::debug;

/// Lex, parse and evaluate `source` with `interpreter`.
///
/// Definitions persist in the interpreter's globals between calls. Returns
/// the value of the last form.
pub fn eval_source(source: &str, interpreter: &mut Interpreter) -> Result<Value, CliError> {
    let tokens = lisp_lexer::lex(source)?;
    debug!(tokens = tokens.len(), "lexed");
    let forms = lisp_parse::parse(&tokens)?;
    debug!(forms = forms.len(), "parsed");
    Ok(interpreter.run(&forms)?)
}

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped tracing subscriber.
///
/// Only active when `LISP_LOG` (or, failing that, `RUST_LOG`) is set; the
/// variable's value is used as the `EnvFilter` directive, e.g.
/// `LISP_LOG=lisp_eval=debug`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Some(directives) = ["LISP_LOG", "RUST_LOG"]
            .into_iter()
            .find_map(|var| std::env::var(var).ok())
        else {
            return;
        };

        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .init();
    });
}
