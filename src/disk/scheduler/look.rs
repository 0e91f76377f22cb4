use crate::common::types::Direction;
use crate::disk::scheduler::{DiskScheduler, RequestGroups};
use crate::disk::trace::HeadPath;
use crate::disk::workload::DiskWorkload;

/// LOOK: sweep toward the farthest request in the initial direction,
/// then reverse once and sweep back without touching the boundary.
pub struct LookScheduler;

impl DiskScheduler for LookScheduler {
    fn schedule(&self, workload: &DiskWorkload, groups: &RequestGroups, path: &mut HeadPath) {
        match workload.direction() {
            Direction::Up => {
                groups.higher.iter().for_each(|&c| path.seek_to(c));
                groups.lower.iter().rev().for_each(|&c| path.seek_to(c));
            }
            Direction::Down => {
                groups.lower.iter().rev().for_each(|&c| path.seek_to(c));
                groups.higher.iter().for_each(|&c| path.seek_to(c));
            }
        }
    }
}
