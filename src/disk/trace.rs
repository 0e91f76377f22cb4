use std::fmt;
use std::str::FromStr;

use log::trace;
use serde::Serialize;

use crate::common::types::{Cylinder, Direction, SeekDistance};

/// Disk arm scheduling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DiskStrategy {
    Look,
    CScan,
}

impl DiskStrategy {
    pub const ALL: [DiskStrategy; 2] = [DiskStrategy::Look, DiskStrategy::CScan];
}

impl fmt::Display for DiskStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskStrategy::Look => write!(f, "LOOK"),
            DiskStrategy::CScan => write!(f, "C-SCAN"),
        }
    }
}

impl FromStr for DiskStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "look" => Ok(DiskStrategy::Look),
            "cscan" | "c-scan" | "c_scan" => Ok(DiskStrategy::CScan),
            other => Err(format!("unknown disk strategy '{}', expected 'look' or 'cscan'", other)),
        }
    }
}

/// A visited cylinder and the step at which the head reached it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiskStep {
    pub step: usize,
    pub cylinder: Cylinder,
}

/// One head movement between consecutive visited cylinders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadMove {
    pub from: Cylinder,
    pub to: Cylinder,
    /// Distance counted toward the seek total; zero for the C-SCAN return stroke
    pub distance: SeekDistance,
    pub wrap: bool,
}

/// Head path under construction
#[derive(Debug)]
pub struct HeadPath {
    sequence: Vec<Cylinder>,
    seek_distance: SeekDistance,
    wrap_index: Option<usize>,
}

impl HeadPath {
    pub fn new(start: Cylinder) -> Self {
        Self {
            sequence: vec![start],
            seek_distance: 0,
            wrap_index: None,
        }
    }

    pub fn current(&self) -> Cylinder {
        // the path always holds the start cylinder
        self.sequence[self.sequence.len() - 1]
    }

    /// Move the head to `cylinder`, counting the distance
    pub fn seek_to(&mut self, cylinder: Cylinder) {
        let distance = SeekDistance::from(self.current().abs_diff(cylinder));
        trace!("head {} -> {} ({} cylinders)", self.current(), cylinder, distance);
        self.seek_distance += distance;
        self.sequence.push(cylinder);
    }

    /// Return stroke to `cylinder` without reading; not counted
    pub fn jump_to(&mut self, cylinder: Cylinder) {
        trace!("head return stroke {} -> {}", self.current(), cylinder);
        self.wrap_index = Some(self.sequence.len());
        self.sequence.push(cylinder);
    }

    pub fn finish(self, strategy: DiskStrategy, start: Cylinder, direction: Direction, requests_served: usize) -> DiskResult {
        DiskResult {
            strategy,
            start,
            direction,
            sequence: self.sequence,
            seek_distance: self.seek_distance,
            wrap_index: self.wrap_index,
            requests_served,
        }
    }
}

/// Full head path and metrics of one disk scheduling run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskResult {
    pub strategy: DiskStrategy,
    pub start: Cylinder,
    pub direction: Direction,
    /// Visited cylinders in service order, starting with the head position
    pub sequence: Vec<Cylinder>,
    pub seek_distance: SeekDistance,
    /// Index in `sequence` of the cylinder the free return stroke lands on
    pub wrap_index: Option<usize>,
    /// Requests visited by the head; requests at the start position are not counted
    pub requests_served: usize,
}

impl DiskResult {
    pub fn path(&self) -> Vec<DiskStep> {
        self.sequence
            .iter()
            .enumerate()
            .map(|(step, &cylinder)| DiskStep { step, cylinder })
            .collect()
    }

    pub fn moves(&self) -> Vec<HeadMove> {
        self.sequence
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let wrap = self.wrap_index == Some(i + 1);
                HeadMove {
                    from: pair[0],
                    to: pair[1],
                    distance: if wrap { 0 } else { SeekDistance::from(pair[0].abs_diff(pair[1])) },
                    wrap,
                }
            })
            .collect()
    }

    pub fn average_seek(&self) -> f64 {
        if self.requests_served == 0 {
            return 0.0;
        }
        self.seek_distance as f64 / self.requests_served as f64
    }

    /// Cylinders crossed by the uncounted return stroke
    pub fn wrap_distance(&self) -> SeekDistance {
        match self.wrap_index {
            Some(i) if i > 0 => SeekDistance::from(self.sequence[i - 1].abs_diff(self.sequence[i])),
            _ => 0,
        }
    }
}
