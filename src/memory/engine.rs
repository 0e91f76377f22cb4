use log::{debug, trace};

use crate::common::config::TraceConfig;
use crate::common::types::{FrameIndex, PageNumber};
use crate::memory::frame_table::FrameTable;
use crate::memory::replacer::{ClockReplacer, LRUReplacer, PageReplacer};
use crate::memory::trace::{MemoryResult, MemoryStep, MemoryStrategy, StepAnnotation};
use crate::memory::workload::MemoryWorkload;

/// Run a page replacement simulation with full trace annotations
pub fn run_memory_simulation(strategy: MemoryStrategy, workload: &MemoryWorkload) -> MemoryResult {
    run_memory_simulation_with_config(strategy, workload, &TraceConfig::default())
}

/// Run a page replacement simulation with an explicit trace config
pub fn run_memory_simulation_with_config(
    strategy: MemoryStrategy,
    workload: &MemoryWorkload,
    config: &TraceConfig,
) -> MemoryResult {
    let frame_count = workload.frame_count();
    match strategy {
        MemoryStrategy::Lru => simulate(strategy, LRUReplacer::new(frame_count), workload, config),
        MemoryStrategy::Arb => simulate(strategy, ClockReplacer::new(frame_count), workload, config),
    }
}

/// What happened to the frame table on one reference
struct Outcome {
    fault: bool,
    frame: Option<FrameIndex>,
    evicted: Option<PageNumber>,
    full_revolution: bool,
}

fn simulate<R: PageReplacer>(
    strategy: MemoryStrategy,
    mut replacer: R,
    workload: &MemoryWorkload,
    config: &TraceConfig,
) -> MemoryResult {
    let mut table = FrameTable::new(workload.frame_count());
    let mut steps = Vec::with_capacity(workload.references().len());
    let mut faults = 0;
    let mut hits = 0;

    debug!(
        "{} simulation: {} frames, {} references",
        strategy,
        table.len(),
        workload.references().len()
    );

    for &page in workload.references() {
        let frames_before = table.snapshot();
        let state_before = config.annotations.then(|| replacer.state());

        let outcome = match table.find(page) {
            Some(frame) => {
                hits += 1;
                replacer.record_hit(frame);
                trace!("page {} hit in frame {}", page, frame);
                Outcome {
                    fault: false,
                    frame: None,
                    evicted: None,
                    full_revolution: false,
                }
            }
            None => {
                faults += 1;
                // Filling an empty frame is allocation, not eviction
                let (frame, full_revolution) = match table.first_empty() {
                    Some(frame) => (frame, false),
                    None => {
                        let victim = replacer.victim();
                        (victim.frame, victim.full_revolution)
                    }
                };
                let evicted = table.install(frame, page);
                replacer.record_load(frame);
                trace!("page {} fault into frame {} (evicted {:?})", page, frame, evicted);
                Outcome {
                    fault: true,
                    frame: Some(frame),
                    evicted,
                    full_revolution,
                }
            }
        };

        let annotation = state_before
            .and_then(|before| StepAnnotation::from_states(before, replacer.state(), outcome.full_revolution));

        steps.push(MemoryStep {
            reference: page,
            frames_before,
            frames_after: table.snapshot(),
            fault: outcome.fault,
            replaced_frame: outcome.frame,
            evicted_page: outcome.evicted,
            annotation,
        });
    }

    debug!("{} simulation finished: {} faults, {} hits", strategy, faults, hits);

    MemoryResult {
        strategy,
        frame_count: table.len(),
        steps,
        faults,
        hits,
    }
}
