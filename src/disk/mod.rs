//! Disk Scheduling Engine
//!
//! Simulates LOOK and C-SCAN arm scheduling over a fixed cylinder range.

pub mod engine;
pub mod scheduler;
pub mod trace;
pub mod workload;

pub use engine::run_disk_simulation;
pub use scheduler::{CScanScheduler, DiskScheduler, LookScheduler, RequestGroups};
pub use trace::{DiskResult, DiskStep, DiskStrategy, HeadMove, HeadPath};
pub use workload::{format_request_queue, DiskWorkload};
