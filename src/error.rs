use thiserror::Error;

pub const EXIT_INVALID_OPERAND: i32 = 1;
pub const EXIT_INVALID_RESULT_LENGTH: i32 = 2;

/// Why a numeric literal was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    #[error("Not a valid number")]
    Malformed,
    #[error("Number is out of range")]
    OutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("{reason}: {literal}")]
    InvalidOperand { literal: String, reason: LiteralError },
    #[error("Invalid result length: {0}")]
    InvalidResultLength(u64),
    #[error("Invalid result length: {0}")]
    MalformedResultLength(String),
}

impl DiffError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidOperand { .. } => EXIT_INVALID_OPERAND,
            Self::InvalidResultLength(_) | Self::MalformedResultLength(_) => {
                EXIT_INVALID_RESULT_LENGTH
            }
        }
    }
}
