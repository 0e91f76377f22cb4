use log::{error, trace};

use crate::common::types::FrameIndex;
use crate::memory::replacer::{PageReplacer, Victim};
use crate::memory::trace::ReplacerState;

/// Second-chance clock. Each frame carries one reference bit; the hand
/// clears set bits as it passes and evicts the first frame whose bit is
/// already clear.
pub struct ClockReplacer {
    /// reference bit per frame
    bits: Vec<bool>,
    /// clock hand
    hand: FrameIndex,
}

impl ClockReplacer {
    pub fn new(frame_count: usize) -> Self {
        Self {
            bits: vec![false; frame_count],
            hand: 0,
        }
    }

    /// advance the clock hand, return the old hand
    fn advance(&mut self) -> FrameIndex {
        let hand = self.hand;
        self.hand += 1;
        if self.hand == self.bits.len() {
            self.hand = 0;
        }
        hand
    }
}

impl PageReplacer for ClockReplacer {
    fn record_hit(&mut self, frame: FrameIndex) {
        self.bits[frame] = true;
    }

    /// the hand moves to the slot right after the loaded frame
    fn record_load(&mut self, frame: FrameIndex) {
        self.bits[frame] = true;
        self.hand = (frame + 1) % self.bits.len();
    }

    /// Leaves the hand on the victim; `record_load` moves it past.
    fn victim(&mut self) -> Victim {
        let mut full_revolution = false;
        let mut revolutions = 0;
        loop {
            for _ in 0..self.bits.len() {
                if !self.bits[self.hand] {
                    trace!("clock victim: frame {}", self.hand);
                    return Victim {
                        frame: self.hand,
                        full_revolution,
                    };
                }
                let cleared = self.advance();
                self.bits[cleared] = false;
                trace!("clock second chance: frame {}", cleared);
            }

            // back at the starting slot with every bit cleared
            revolutions += 1;
            if revolutions == 1 {
                full_revolution = true;
                continue;
            }
            // every bit was cleared on the previous pass, so this is a logic error
            error!(
                "clock hand completed two revolutions without a victim, forcing eviction of frame {}",
                self.hand
            );
            return Victim {
                frame: self.hand,
                full_revolution,
            };
        }
    }

    fn state(&self) -> ReplacerState {
        ReplacerState::Clock {
            bits: self.bits.clone(),
            hand: self.hand,
        }
    }
}
