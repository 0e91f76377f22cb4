//! Memory Replacement Engine
//!
//! Simulates LRU and second-chance clock (ARB) page replacement over a
//! fixed-size frame table, producing one snapshot per reference.

pub mod engine;
pub mod frame_table;
pub mod replacer;
pub mod trace;
pub mod workload;

pub use engine::{run_memory_simulation, run_memory_simulation_with_config};
pub use frame_table::FrameTable;
pub use replacer::{ClockReplacer, LRUReplacer, PageReplacer, Victim};
pub use trace::{MemoryResult, MemoryStep, MemoryStrategy, ReplacerState, StepAnnotation};
pub use workload::{format_reference_sequence, MemoryWorkload, MAX_FRAME_COUNT};
