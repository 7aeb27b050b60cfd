use thiserror::Error;

/// Failure raised while evaluating a pending operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Div by 0")]
    DivisionByZero,
    #[error("Overflow")]
    Overflow,
    #[error("Invalid number")]
    MalformedNumeral,
}
