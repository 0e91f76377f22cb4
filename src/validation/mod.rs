//! Input Validation Module
//!
//! Parses and range-checks raw workload text. This is the only place in
//! the crate that reports errors; the engines are total over the
//! workloads produced here.

pub mod error;
pub mod input;


pub use self::error::{InputField, ValidationError, ValidationResult};
pub use self::input::{validate_disk_input, validate_memory_input, InputValidator};
