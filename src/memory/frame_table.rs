use crate::common::types::{FrameIndex, PageNumber};

/// Fixed-size table of physical frames. A slot is either empty or holds
/// one resident page; the slot count never changes.
#[derive(Debug, Clone)]
pub struct FrameTable {
    slots: Vec<Option<PageNumber>>,
}

impl FrameTable {
    pub fn new(frame_count: usize) -> Self {
        Self {
            slots: vec![None; frame_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Frame currently holding `page`, if resident
    pub fn find(&self, page: PageNumber) -> Option<FrameIndex> {
        self.slots.iter().position(|&slot| slot == Some(page))
    }

    /// Lowest-indexed empty frame
    pub fn first_empty(&self) -> Option<FrameIndex> {
        self.slots.iter().position(Option::is_none)
    }

    /// Put `page` into `frame`, returning the page it displaced
    pub fn install(&mut self, frame: FrameIndex, page: PageNumber) -> Option<PageNumber> {
        self.slots[frame].replace(page)
    }

    /// Independent copy of the slot contents
    pub fn snapshot(&self) -> Vec<Option<PageNumber>> {
        self.slots.clone()
    }
}
