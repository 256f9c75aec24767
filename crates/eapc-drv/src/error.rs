//! Error handling for the interp CLI.

use thiserror::Error;

/// Top-level error type for the CLI. Syntax and runtime errors carry the
/// message the interpreter already produced; everything else is a thin
/// wrapper so `main` has one place to decide exit code and message (§7).
#[derive(Error, Debug)]
pub enum DrvError {
    #[error("could not read {path}: {source}")]
    ReadSource { path: String, #[source] source: std::io::Error },

    #[error("Syntax Error: {0}")]
    Syntax(String),

    #[error("Runtime Error: {0}")]
    Runtime(#[from] eapc_eval::RuntimeError),
}

pub type Result<T> = std::result::Result<T, DrvError>;
