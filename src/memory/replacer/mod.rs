mod clock;
mod lru;

pub use clock::ClockReplacer;
pub use lru::LRUReplacer;

use crate::common::types::FrameIndex;
use crate::memory::trace::ReplacerState;

/// Frame chosen by a replacer for eviction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victim {
    pub frame: FrameIndex,
    /// The search cleared every reference bit before finding this frame
    pub full_revolution: bool,
}

/// Page replacement policy over a fixed set of frames.
///
/// The engine owns the frame contents; a replacer only tracks the
/// bookkeeping it needs to pick a victim once every frame is occupied.
pub trait PageReplacer {
    /// A resident page in `frame` was referenced again
    fn record_hit(&mut self, frame: FrameIndex);

    /// A page was loaded into `frame`, either an empty one or a victim
    fn record_load(&mut self, frame: FrameIndex);

    /// Choose the frame to evict. Only called when every frame is occupied.
    fn victim(&mut self) -> Victim;

    /// Copy of the state a visualisation needs to replay the decision
    fn state(&self) -> ReplacerState;
}
