pub mod config;
pub mod types;

pub use config::TraceConfig;
pub use types::{Cylinder, Direction, FrameIndex, PageNumber, SeekDistance};
