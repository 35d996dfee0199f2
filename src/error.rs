use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("Account doesn't support '{operation}' for operand of type {kind}")]
    UnsupportedOperand {
        operation: &'static str,
        kind: &'static str,
    },

    #[error("Unsupported key {0}")]
    InvalidKey(String),

    #[error("Incorrect data, no balance is the highest")]
    InvalidComparison,

    #[error("Balance {0:?} has no integer length")]
    InvalidLength(f64),
}

impl AccountError {
    pub fn unsupported(operation: &'static str, kind: &'static str) -> Self {
        AccountError::UnsupportedOperand { operation, kind }
    }
}
