use crate::common::types::Direction;
use crate::disk::scheduler::{DiskScheduler, RequestGroups};
use crate::disk::trace::HeadPath;
use crate::disk::workload::DiskWorkload;

/// C-SCAN: serve requests in one direction only. When requests remain
/// behind the head it runs to the boundary, returns to the opposite end
/// without reading, and sweeps on in the same direction.
pub struct CScanScheduler;

impl DiskScheduler for CScanScheduler {
    fn schedule(&self, workload: &DiskWorkload, groups: &RequestGroups, path: &mut HeadPath) {
        let top = workload.max_cylinder();
        match workload.direction() {
            Direction::Up => {
                groups.higher.iter().for_each(|&c| path.seek_to(c));
                if groups.lower.is_empty() {
                    return;
                }
                if path.current() != top {
                    path.seek_to(top);
                }
                path.jump_to(0);
                groups.lower.iter().for_each(|&c| path.seek_to(c));
            }
            Direction::Down => {
                groups.lower.iter().rev().for_each(|&c| path.seek_to(c));
                if groups.higher.is_empty() {
                    return;
                }
                if path.current() != 0 {
                    path.seek_to(0);
                }
                path.jump_to(top);
                groups.higher.iter().rev().for_each(|&c| path.seek_to(c));
            }
        }
    }
}
