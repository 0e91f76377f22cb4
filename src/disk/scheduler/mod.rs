mod cscan;
mod look;

pub use cscan::CScanScheduler;
pub use look::LookScheduler;

use crate::common::types::Cylinder;
use crate::disk::trace::HeadPath;
use crate::disk::workload::DiskWorkload;

/// Pending requests split around the initial head position.
///
/// Duplicates are kept; requests on the start cylinder are served by the
/// initial position and only counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestGroups {
    /// Requests below the head, ascending
    pub lower: Vec<Cylinder>,
    /// Requests above the head, ascending
    pub higher: Vec<Cylinder>,
    /// Number of requests on the start cylinder
    pub at_start: usize,
}

impl RequestGroups {
    pub fn partition(start: Cylinder, requests: &[Cylinder]) -> Self {
        let mut lower: Vec<Cylinder> = requests.iter().copied().filter(|&r| r < start).collect();
        let mut higher: Vec<Cylinder> = requests.iter().copied().filter(|&r| r > start).collect();
        lower.sort_unstable();
        higher.sort_unstable();
        let at_start = requests.len() - lower.len() - higher.len();
        Self { lower, higher, at_start }
    }

    /// Requests the head has to travel to
    pub fn pending(&self) -> usize {
        self.lower.len() + self.higher.len()
    }
}

/// Disk arm scheduling policy
pub trait DiskScheduler {
    /// Extend `path` with every pending request in service order
    fn schedule(&self, workload: &DiskWorkload, groups: &RequestGroups, path: &mut HeadPath);
}
