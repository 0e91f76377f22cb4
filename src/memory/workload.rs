use serde::Serialize;

use crate::common::types::PageNumber;
use crate::validation::{InputField, ValidationError, ValidationResult};

/// Largest frame table a workload may ask for
pub const MAX_FRAME_COUNT: usize = 4096;

/// A validated page-replacement workload: a frame count of at least one
/// and a non-empty reference sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryWorkload {
    frame_count: usize,
    references: Vec<PageNumber>,
}

impl MemoryWorkload {
    pub fn new(frame_count: usize, references: Vec<PageNumber>) -> ValidationResult<Self> {
        if frame_count == 0 {
            return Err(ValidationError::NotPositive { field: InputField::FrameCount });
        }
        if frame_count > MAX_FRAME_COUNT {
            return Err(ValidationError::TooLarge {
                field: InputField::FrameCount,
                token: frame_count.to_string(),
            });
        }
        if references.is_empty() {
            return Err(ValidationError::Missing { field: InputField::ReferenceString });
        }
        Ok(Self { frame_count, references })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn references(&self) -> &[PageNumber] {
        &self.references
    }

    /// Number of distinct pages referenced
    pub fn distinct_pages(&self) -> usize {
        let mut pages = self.references.clone();
        pages.sort_unstable();
        pages.dedup();
        pages.len()
    }
}

/// Render a reference sequence in the accepted whitespace-separated form
pub fn format_reference_sequence(references: &[PageNumber]) -> String {
    references
        .iter()
        .map(|page| page.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
