// Operating-system algorithm simulator

pub mod common;
pub mod disk;
pub mod memory;
pub mod report;
pub mod validation;

// Re-export key items for convenient access
pub use common::{Cylinder, Direction, FrameIndex, PageNumber, SeekDistance, TraceConfig};
pub use disk::{run_disk_simulation, DiskResult, DiskStep, DiskStrategy, DiskWorkload};
pub use memory::{
    run_memory_simulation, run_memory_simulation_with_config, MemoryResult, MemoryStep, MemoryStrategy,
    MemoryWorkload, StepAnnotation,
};
pub use report::{compare_disk, compare_memory, DiskSummary, MemorySummary};
pub use validation::{validate_disk_input, validate_memory_input, InputField, ValidationError, ValidationResult};
