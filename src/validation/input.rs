// Input Validation Module
//
// Turns the raw text a user types into typed, range-checked workloads.
// Reference strings are whitespace-separated; request queues are
// comma-separated with whitespace trimmed around each token.

use crate::common::types::{Cylinder, Direction, PageNumber};
use crate::disk::DiskWorkload;
use crate::memory::MemoryWorkload;
use crate::validation::{InputField, ValidationError, ValidationResult};

/// The input validator checks workload text before any engine runs
pub struct InputValidator;

impl InputValidator {
    /// Validate a frame count and a reference string
    pub fn validate_memory(frames_text: &str, reference_text: &str) -> ValidationResult<MemoryWorkload> {
        let frame_count = Self::parse_positive(InputField::FrameCount, frames_text)?;
        let references = Self::parse_references(reference_text)?;
        MemoryWorkload::new(frame_count as usize, references)
    }

    /// Validate a cylinder count, head position and request queue.
    ///
    /// The initial direction is not part of the text form; the workload
    /// starts moving up and callers adjust it with `with_direction`.
    pub fn validate_disk(
        cylinders_text: &str,
        head_text: &str,
        queue_text: &str,
    ) -> ValidationResult<DiskWorkload> {
        let cylinder_count = Self::parse_positive(InputField::CylinderCount, cylinders_text)?;
        let max = cylinder_count - 1;
        let start = Self::parse_head(head_text, max)?;
        let requests = Self::parse_queue(queue_text, max)?;
        DiskWorkload::new(cylinder_count, start, requests, Direction::Up)
    }

    fn parse_positive(field: InputField, text: &str) -> ValidationResult<u32> {
        let token = text.trim();
        if token.is_empty() {
            return Err(ValidationError::Missing { field });
        }
        let value = parse_integer(field, token)?;
        if value <= 0 {
            return Err(ValidationError::NotPositive { field });
        }
        to_u32(field, token, value)
    }

    fn parse_references(text: &str) -> ValidationResult<Vec<PageNumber>> {
        let field = InputField::ReferenceString;
        if text.trim().is_empty() {
            return Err(ValidationError::Missing { field });
        }

        let mut values = Vec::new();
        for token in text.split_whitespace() {
            values.push(parse_integer(field, token)?);
        }
        // Non-numeric tokens are reported before sign problems
        if let Some(&negative) = values.iter().find(|&&v| v < 0) {
            return Err(ValidationError::Negative { field, value: negative });
        }
        text.split_whitespace()
            .zip(values)
            .map(|(token, value)| to_u32(field, token, value))
            .collect()
    }

    fn parse_head(text: &str, max: Cylinder) -> ValidationResult<Cylinder> {
        let field = InputField::HeadPosition;
        let token = text.trim();
        if token.is_empty() {
            return Err(ValidationError::Missing { field });
        }
        let value = parse_integer(field, token)?;
        if value < 0 {
            return Err(ValidationError::Negative { field, value });
        }
        if value > i64::from(max) {
            return Err(ValidationError::OutOfRange { field, value, max });
        }
        to_u32(field, token, value)
    }

    fn parse_queue(text: &str, max: Cylinder) -> ValidationResult<Vec<Cylinder>> {
        let field = InputField::RequestQueue;
        if text.trim().is_empty() {
            return Err(ValidationError::Missing { field });
        }

        let mut values = Vec::new();
        for token in text.split(',').map(str::trim) {
            if token.is_empty() {
                return Err(ValidationError::NotANumber { field, token: token.to_string() });
            }
            values.push(parse_integer(field, token)?);
        }
        if let Some(&bad) = values.iter().find(|&&v| v < 0 || v > i64::from(max)) {
            return Err(ValidationError::OutOfRange { field, value: bad, max });
        }
        Ok(values.into_iter().map(|v| v as Cylinder).collect())
    }
}

/// Parse one token as a signed integer, classifying the failure
fn parse_integer(field: InputField, token: &str) -> ValidationResult<i64> {
    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }

    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::TooLarge { field, token: token.to_string() });
    }

    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            Err(ValidationError::NotAnInteger { field, token: token.to_string() })
        }
        _ => Err(ValidationError::NotANumber { field, token: token.to_string() }),
    }
}

fn to_u32(field: InputField, token: &str, value: i64) -> ValidationResult<u32> {
    u32::try_from(value).map_err(|_| ValidationError::TooLarge { field, token: token.to_string() })
}

/// Validate the memory workload text fields
pub fn validate_memory_input(frames_text: &str, reference_text: &str) -> ValidationResult<MemoryWorkload> {
    InputValidator::validate_memory(frames_text, reference_text)
}

/// Validate the disk workload text fields
pub fn validate_disk_input(
    cylinders_text: &str,
    head_text: &str,
    queue_text: &str,
) -> ValidationResult<DiskWorkload> {
    InputValidator::validate_disk(cylinders_text, head_text, queue_text)
}
