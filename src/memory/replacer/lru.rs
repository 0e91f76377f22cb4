use std::collections::VecDeque;

use log::{error, trace};

use crate::common::types::FrameIndex;
use crate::memory::replacer::{PageReplacer, Victim};
use crate::memory::trace::ReplacerState;

/// Simple LRU (Least Recently Used) page replacement policy
pub struct LRUReplacer {
    /// Occupied frames, least recently used at the front
    lru_list: VecDeque<FrameIndex>,
}

impl LRUReplacer {
    pub fn new(frame_count: usize) -> Self {
        Self {
            lru_list: VecDeque::with_capacity(frame_count),
        }
    }

    /// Move a frame to the most recently used end
    fn touch(&mut self, frame: FrameIndex) {
        if let Some(pos) = self.lru_list.iter().position(|&id| id == frame) {
            self.lru_list.remove(pos);
        }
        self.lru_list.push_back(frame);
    }
}

impl PageReplacer for LRUReplacer {
    fn record_hit(&mut self, frame: FrameIndex) {
        self.touch(frame);
    }

    fn record_load(&mut self, frame: FrameIndex) {
        self.touch(frame);
    }

    fn victim(&mut self) -> Victim {
        let frame = match self.lru_list.pop_front() {
            Some(frame) => frame,
            None => {
                error!("LRU victim requested with no occupied frames, falling back to frame 0");
                0
            }
        };
        trace!("LRU victim: frame {}", frame);
        Victim {
            frame,
            full_revolution: false,
        }
    }

    fn state(&self) -> ReplacerState {
        ReplacerState::Lru {
            order: self.lru_list.iter().copied().collect(),
        }
    }
}
