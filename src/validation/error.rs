use std::fmt;

use thiserror::Error;

/// The raw input field a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    FrameCount,
    ReferenceString,
    CylinderCount,
    HeadPosition,
    RequestQueue,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::FrameCount => "frame count",
            InputField::ReferenceString => "reference string",
            InputField::CylinderCount => "cylinder count",
            InputField::HeadPosition => "head position",
            InputField::RequestQueue => "request queue",
        };
        f.write_str(name)
    }
}

/// Errors produced while turning raw workload text into typed workloads
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing input: {field} must not be empty")]
    Missing { field: InputField },
    #[error("Invalid {field}: '{token}' is not a number")]
    NotANumber { field: InputField, token: String },
    #[error("Invalid {field}: '{token}' is not a whole number")]
    NotAnInteger { field: InputField, token: String },
    #[error("Invalid {field}: '{token}' is too large")]
    TooLarge { field: InputField, token: String },
    #[error("Invalid {field}: {value} is negative, values must be non-negative integers")]
    Negative { field: InputField, value: i64 },
    #[error("Invalid {field}: must be a positive integer")]
    NotPositive { field: InputField },
    #[error("Invalid {field}: {value} is out of range, valid range is [0, {max}]")]
    OutOfRange { field: InputField, value: i64, max: u32 },
}

impl ValidationError {
    /// The field that failed validation
    pub fn field(&self) -> InputField {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::NotAnInteger { field, .. }
            | ValidationError::TooLarge { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotPositive { field }
            | ValidationError::OutOfRange { field, .. } => *field,
        }
    }
}

/// Validation result
pub type ValidationResult<T> = Result<T, ValidationError>;
