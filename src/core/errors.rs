use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    #[error("Matrix is not Unitary (U†U != I)")]
    NonUnitary,

    #[error("Matrix must be square")]
    NotSquareMatrix,

    #[error("Invalid dimensions: single-qubit gates are 2x2, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid argument `{name}`: {value} is not a finite angle")]
    InvalidArgument { name: &'static str, value: f64 },

    #[error("Cannot normalize the zero vector")]
    DegenerateState,

    #[error("Gate error: {0}")]
    GateError(#[from] GateError),
}
