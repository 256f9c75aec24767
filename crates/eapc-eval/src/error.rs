//! Runtime error types (§7 "Runtime errors").

use eapc_util::Symbol;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("array index out of bounds in dimension {dimension}: {index} not in [{lower}..{upper}]")]
    IndexOutOfBounds { dimension: usize, index: i64, lower: i64, upper: i64 },

    #[error("array access has {found} index(es), expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("'{name}' expects {expected} argument(s), found {found}")]
    WrongArgumentCount { name: Symbol, expected: usize, found: usize },

    #[error("undefined identifier '{0}'")]
    UndefinedIdentifier(Symbol),

    #[error("undefined subroutine '{0}'")]
    UndefinedSubroutine(Symbol),

    #[error("'{0}' is a procedure and cannot be used as an expression")]
    ProcedureUsedAsExpression(Symbol),

    #[error("'{0}' is not an array")]
    NotAnArray(Symbol),

    #[error("a by-reference argument must be a variable or array access")]
    InvalidReferenceArgument,

    #[error("array index must be an integer")]
    NonIntegerIndex,

    #[error("array bound must be an integer")]
    NonIntegerBound,

    #[error("FOR loop step must not be zero")]
    ZeroStep,

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("integer overflow")]
    IntegerOverflow,
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
