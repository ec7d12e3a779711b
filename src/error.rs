// error.rs

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::parser::Operation;

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("unsupported operation `{0}`")]
    UnknownOperation(String),

    #[error("{op} takes 2 operands, got {got}")]
    WrongArity { op: Operation, got: usize },

    #[error("input error: {0}")]
    Input(#[from] ReadlineError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Whether the input stream itself is broken, as opposed to a bad value
    /// or a failed write.
    pub fn is_input(&self) -> bool {
        matches!(self, CalcError::Input(_))
    }
}
