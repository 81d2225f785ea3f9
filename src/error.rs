use thiserror::Error;

use crate::base::Base;

/// Why a conversion request was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("input is empty")]
    Empty,

    #[error("not a valid {base} number")]
    InvalidDigits { base: Base },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid input: {reason}")]
pub struct InvalidInput {
    pub reason: InvalidReason,
}

impl InvalidInput {
    pub fn empty() -> Self {
        Self {
            reason: InvalidReason::Empty,
        }
    }

    pub fn invalid_digits(base: Base) -> Self {
        Self {
            reason: InvalidReason::InvalidDigits { base },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reason == InvalidReason::Empty
    }

    /// Text shown in the error dialog.
    pub fn user_message(&self) -> &'static str {
        match self.reason {
            InvalidReason::Empty => "Please enter a number.",
            InvalidReason::InvalidDigits { .. } => "Invalid input or base. Please try again.",
        }
    }
}

pub type Result<T> = std::result::Result<T, InvalidInput>;
