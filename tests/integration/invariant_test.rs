// Randomised checks of the properties every simulation result must hold

use anyhow::Result;

#[path = "../common/mod.rs"]
mod common;
use common::{random_disk_workload, random_memory_workload, test_rng};

use ossim::disk::{DiskStrategy, RequestGroups};
use ossim::memory::{MemoryStrategy, StepAnnotation};
use ossim::{run_disk_simulation, run_memory_simulation};

const ROUNDS: usize = 500;

#[test]
fn test_memory_invariants() -> Result<()> {
    let mut rng = test_rng(0x5eed);
    for _ in 0..ROUNDS {
        let workload = random_memory_workload(&mut rng)?;
        for strategy in MemoryStrategy::ALL {
            let result = run_memory_simulation(strategy, &workload);

            assert_eq!(result.faults + result.hits, workload.references().len());
            assert_eq!(result.steps.len(), workload.references().len());

            for (step, &reference) in result.steps.iter().zip(workload.references()) {
                assert_eq!(step.reference, reference);
                assert_eq!(step.frames_before.len(), workload.frame_count());
                assert_eq!(step.frames_after.len(), workload.frame_count());
                // The referenced page is always resident afterwards
                assert!(step.frames_after.contains(&Some(reference)));
                assert_eq!(step.fault, step.replaced_frame.is_some());
                if step.evicted_page.is_some() {
                    assert!(step.fault);
                    assert!(step.frames_before.iter().all(Option::is_some));
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_arb_bit_semantics() -> Result<()> {
    let mut rng = test_rng(0xc10c);
    for _ in 0..ROUNDS {
        let workload = random_memory_workload(&mut rng)?;
        let result = run_memory_simulation(MemoryStrategy::Arb, &workload);

        for step in &result.steps {
            let Some(StepAnnotation::Clock { bits_before, bits_after, full_revolution, .. }) = &step.annotation
            else {
                panic!("clock steps carry clock annotations");
            };
            let frame = step
                .frames_after
                .iter()
                .position(|&slot| slot == Some(step.reference))
                .expect("referenced page is resident");
            assert!(bits_after[frame], "bit is set after a load or hit");

            let table_full = step.frames_before.iter().all(Option::is_some);
            let all_set = bits_before.iter().all(|&b| b);
            assert_eq!(*full_revolution, step.fault && table_full && all_set);
        }
    }
    Ok(())
}

#[test]
fn test_disk_invariants() -> Result<()> {
    let mut rng = test_rng(0xd15c);
    for _ in 0..ROUNDS {
        let workload = random_disk_workload(&mut rng)?;
        let groups = RequestGroups::partition(workload.start(), workload.requests());
        for strategy in DiskStrategy::ALL {
            let result = run_disk_simulation(strategy, &workload);

            assert_eq!(result.sequence[0], workload.start());
            assert!(result.sequence.iter().all(|&c| c <= workload.max_cylinder()));
            assert_eq!(result.requests_served, groups.pending());

            let extra = result.sequence.len() - 1 - groups.pending();
            match strategy {
                DiskStrategy::Look => assert_eq!(extra, 0),
                DiskStrategy::CScan => assert!(extra <= 2),
            }

            let total: u64 = result
                .sequence
                .windows(2)
                .map(|w| u64::from(w[0].abs_diff(w[1])))
                .sum();
            assert_eq!(result.seek_distance, total - result.wrap_distance());
            assert_eq!(result.seek_distance, result.moves().iter().map(|m| m.distance).sum::<u64>());
        }
    }
    Ok(())
}

#[test]
fn test_look_reverses_at_most_once() -> Result<()> {
    let mut rng = test_rng(0x100c);
    for _ in 0..ROUNDS {
        let workload = random_disk_workload(&mut rng)?;
        let result = run_disk_simulation(DiskStrategy::Look, &workload);

        let mut reversals = 0;
        let mut heading: Option<bool> = None;
        for w in result.sequence.windows(2) {
            if w[0] == w[1] {
                continue;
            }
            let up = w[1] > w[0];
            if heading.is_some_and(|h| h != up) {
                reversals += 1;
            }
            heading = Some(up);
        }
        assert!(reversals <= 1);
    }
    Ok(())
}
