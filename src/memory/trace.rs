use std::fmt;
use std::str::FromStr;

use log::error;
use serde::Serialize;

use crate::common::types::{FrameIndex, PageNumber};

/// Page replacement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MemoryStrategy {
    /// Least Recently Used
    Lru,
    /// Additional-reference-bit second-chance clock
    Arb,
}

impl MemoryStrategy {
    pub const ALL: [MemoryStrategy; 2] = [MemoryStrategy::Lru, MemoryStrategy::Arb];
}

impl fmt::Display for MemoryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryStrategy::Lru => write!(f, "LRU"),
            MemoryStrategy::Arb => write!(f, "ARB"),
        }
    }
}

impl FromStr for MemoryStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lru" => Ok(MemoryStrategy::Lru),
            "arb" | "clock" => Ok(MemoryStrategy::Arb),
            other => Err(format!("unknown memory strategy '{}', expected 'lru' or 'arb'", other)),
        }
    }
}

/// Replacer bookkeeping at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReplacerState {
    /// Occupied frames ordered least to most recently used
    Lru { order: Vec<FrameIndex> },
    /// Reference bit per frame and the clock hand position
    Clock { bits: Vec<bool>, hand: FrameIndex },
}

/// Replacer state around one step, recorded for visualisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepAnnotation {
    Lru {
        order_before: Vec<FrameIndex>,
        order_after: Vec<FrameIndex>,
    },
    Clock {
        bits_before: Vec<bool>,
        bits_after: Vec<bool>,
        hand_before: FrameIndex,
        hand_after: FrameIndex,
        /// The hand cleared every bit before finding a victim
        full_revolution: bool,
    },
}

impl StepAnnotation {
    pub(crate) fn from_states(before: ReplacerState, after: ReplacerState, full_revolution: bool) -> Option<Self> {
        match (before, after) {
            (ReplacerState::Lru { order: order_before }, ReplacerState::Lru { order: order_after }) => {
                Some(StepAnnotation::Lru { order_before, order_after })
            }
            (
                ReplacerState::Clock { bits: bits_before, hand: hand_before },
                ReplacerState::Clock { bits: bits_after, hand: hand_after },
            ) => Some(StepAnnotation::Clock {
                bits_before,
                bits_after,
                hand_before,
                hand_after,
                full_revolution,
            }),
            (before, after) => {
                error!("replacer state changed kind within one step: {:?} -> {:?}", before, after);
                None
            }
        }
    }
}

/// One processed reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryStep {
    pub reference: PageNumber,
    pub frames_before: Vec<Option<PageNumber>>,
    pub frames_after: Vec<Option<PageNumber>>,
    pub fault: bool,
    /// Frame written on a fault; `None` on a hit
    pub replaced_frame: Option<FrameIndex>,
    /// Page evicted to make room; `None` on a hit or when an empty frame was filled
    pub evicted_page: Option<PageNumber>,
    pub annotation: Option<StepAnnotation>,
}

impl MemoryStep {
    pub fn is_hit(&self) -> bool {
        !self.fault
    }

    /// Whether this step's clock sweep cleared every reference bit
    pub fn full_revolution(&self) -> bool {
        matches!(self.annotation, Some(StepAnnotation::Clock { full_revolution: true, .. }))
    }
}

/// Full trace and metrics of one page replacement run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryResult {
    pub strategy: MemoryStrategy,
    pub frame_count: usize,
    pub steps: Vec<MemoryStep>,
    pub faults: usize,
    pub hits: usize,
}

impl MemoryResult {
    pub fn references(&self) -> usize {
        self.steps.len()
    }

    pub fn hit_ratio(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.hits as f64 / self.steps.len() as f64
    }

    pub fn fault_ratio(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.faults as f64 / self.steps.len() as f64
    }

    /// Frame contents after the last reference
    pub fn final_frames(&self) -> Vec<Option<PageNumber>> {
        self.steps
            .last()
            .map(|step| step.frames_after.clone())
            .unwrap_or_else(|| vec![None; self.frame_count])
    }
}
