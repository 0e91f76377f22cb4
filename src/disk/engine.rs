use log::debug;

use crate::disk::scheduler::{CScanScheduler, DiskScheduler, LookScheduler, RequestGroups};
use crate::disk::trace::{DiskResult, DiskStrategy, HeadPath};
use crate::disk::workload::DiskWorkload;

/// Run a disk scheduling simulation
pub fn run_disk_simulation(strategy: DiskStrategy, workload: &DiskWorkload) -> DiskResult {
    let scheduler: &dyn DiskScheduler = match strategy {
        DiskStrategy::Look => &LookScheduler,
        DiskStrategy::CScan => &CScanScheduler,
    };

    let groups = RequestGroups::partition(workload.start(), workload.requests());
    debug!(
        "{} simulation: {} cylinders, head at {} moving {}, {} lower / {} higher / {} at head",
        strategy,
        workload.cylinder_count(),
        workload.start(),
        workload.direction(),
        groups.lower.len(),
        groups.higher.len(),
        groups.at_start
    );

    let mut path = HeadPath::new(workload.start());
    scheduler.schedule(workload, &groups, &mut path);
    let result = path.finish(strategy, workload.start(), workload.direction(), groups.pending());

    debug!(
        "{} simulation finished: {} points, seek distance {}",
        strategy,
        result.sequence.len(),
        result.seek_distance
    );
    result
}
