//! Interpreter behaviour on complete programs.
//!
//! - `programs` - multi-form programs (recursion, closures, shared state)
//! - `errors` - error classification and rendering through the driver

mod errors;
mod programs;
