//! Command handler tests with captured output.
//!
//! - `commands` - `run`, `lex`, `parse` and option parsing
//! - `repl` - prompts, continuation lines and error recovery

mod commands;
mod repl;
