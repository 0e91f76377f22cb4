//! Cross-strategy comparison of one workload.

use serde::Serialize;

use crate::common::config::TraceConfig;
use crate::common::types::SeekDistance;
use crate::disk::{run_disk_simulation, DiskResult, DiskStrategy, DiskWorkload};
use crate::memory::{run_memory_simulation_with_config, MemoryResult, MemoryStrategy, MemoryWorkload};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemorySummary {
    pub strategy: MemoryStrategy,
    pub faults: usize,
    pub hits: usize,
    pub hit_ratio: f64,
    pub fault_ratio: f64,
}

impl From<&MemoryResult> for MemorySummary {
    fn from(result: &MemoryResult) -> Self {
        Self {
            strategy: result.strategy,
            faults: result.faults,
            hits: result.hits,
            hit_ratio: result.hit_ratio(),
            fault_ratio: result.fault_ratio(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskSummary {
    pub strategy: DiskStrategy,
    pub seek_distance: SeekDistance,
    pub requests_served: usize,
    pub average_seek: f64,
}

impl From<&DiskResult> for DiskSummary {
    fn from(result: &DiskResult) -> Self {
        Self {
            strategy: result.strategy,
            seek_distance: result.seek_distance,
            requests_served: result.requests_served,
            average_seek: result.average_seek(),
        }
    }
}

/// Run every memory strategy once over `workload`
pub fn compare_memory(workload: &MemoryWorkload) -> Vec<MemorySummary> {
    MemoryStrategy::ALL
        .iter()
        .map(|&strategy| {
            let result = run_memory_simulation_with_config(strategy, workload, &TraceConfig::minimal());
            MemorySummary::from(&result)
        })
        .collect()
}

/// Run every disk strategy once over `workload`
pub fn compare_disk(workload: &DiskWorkload) -> Vec<DiskSummary> {
    DiskStrategy::ALL
        .iter()
        .map(|&strategy| DiskSummary::from(&run_disk_simulation(strategy, workload)))
        .collect()
}

/// Strategy with the fewest faults; the earlier one wins a tie
pub fn best_memory(summaries: &[MemorySummary]) -> Option<&MemorySummary> {
    summaries
        .iter()
        .fold(None, |best: Option<&MemorySummary>, s| match best {
            Some(b) if b.faults <= s.faults => Some(b),
            _ => Some(s),
        })
}

/// Strategy with the least head travel; the earlier one wins a tie
pub fn best_disk(summaries: &[DiskSummary]) -> Option<&DiskSummary> {
    summaries
        .iter()
        .fold(None, |best: Option<&DiskSummary>, s| match best {
            Some(b) if b.seek_distance <= s.seek_distance => Some(b),
            _ => Some(s),
        })
}
