use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Page number referenced by a workload
pub type PageNumber = u32;

/// Physical frame slot index
pub type FrameIndex = usize;

/// Disk cylinder number
pub type Cylinder = u32;

/// Accumulated head travel, in cylinders
pub type SeekDistance = u64;

/// Initial direction of the disk arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher cylinder numbers
    #[default]
    Up,
    /// Toward lower cylinder numbers
    Down,
}

impl From<bool> for Direction {
    fn from(up: bool) -> Self {
        if up { Direction::Up } else { Direction::Down }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "higher" => Ok(Direction::Up),
            "down" | "lower" => Ok(Direction::Down),
            other => Err(format!("unknown direction '{}', expected 'up' or 'down'", other)),
        }
    }
}
