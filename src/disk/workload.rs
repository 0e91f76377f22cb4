use serde::Serialize;

use crate::common::types::{Cylinder, Direction};
use crate::validation::{InputField, ValidationError, ValidationResult};

/// A validated disk-scheduling workload.
///
/// The valid cylinder range is `[0, cylinder_count - 1]`; the head and
/// every request lie inside it. Duplicate requests and requests equal to
/// the head position are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskWorkload {
    cylinder_count: u32,
    start: Cylinder,
    requests: Vec<Cylinder>,
    direction: Direction,
}

impl DiskWorkload {
    pub fn new(
        cylinder_count: u32,
        start: Cylinder,
        requests: Vec<Cylinder>,
        direction: Direction,
    ) -> ValidationResult<Self> {
        if cylinder_count == 0 {
            return Err(ValidationError::NotPositive { field: InputField::CylinderCount });
        }
        let max = cylinder_count - 1;
        if start > max {
            return Err(ValidationError::OutOfRange {
                field: InputField::HeadPosition,
                value: i64::from(start),
                max,
            });
        }
        if requests.is_empty() {
            return Err(ValidationError::Missing { field: InputField::RequestQueue });
        }
        if let Some(&bad) = requests.iter().find(|&&r| r > max) {
            return Err(ValidationError::OutOfRange {
                field: InputField::RequestQueue,
                value: i64::from(bad),
                max,
            });
        }

        Ok(Self {
            cylinder_count,
            start,
            requests,
            direction,
        })
    }

    /// Same workload with a different initial arm direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn cylinder_count(&self) -> u32 {
        self.cylinder_count
    }

    /// Highest addressable cylinder
    pub fn max_cylinder(&self) -> Cylinder {
        self.cylinder_count - 1
    }

    pub fn start(&self) -> Cylinder {
        self.start
    }

    pub fn requests(&self) -> &[Cylinder] {
        &self.requests
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Render a request queue in the accepted comma-separated form
pub fn format_request_queue(requests: &[Cylinder]) -> String {
    requests
        .iter()
        .map(|cylinder| cylinder.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
