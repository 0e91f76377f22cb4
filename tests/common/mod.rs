#![allow(dead_code)]

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ossim::{Direction, DiskWorkload, MemoryWorkload, PageNumber};

/// Reference string used by most operating-systems textbooks
pub const TEXTBOOK_REFERENCES: [PageNumber; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];

/// Classic disk queue with the head at 50 on a 200-cylinder disk
pub const TEXTBOOK_QUEUE: [u32; 7] = [82, 170, 43, 140, 24, 16, 190];

pub fn textbook_memory_workload() -> Result<MemoryWorkload> {
    Ok(MemoryWorkload::new(3, TEXTBOOK_REFERENCES.to_vec())?)
}

pub fn textbook_disk_workload(direction: Direction) -> Result<DiskWorkload> {
    Ok(DiskWorkload::new(200, 50, TEXTBOOK_QUEUE.to_vec(), direction)?)
}

// Seeded generator so failures are reproducible
pub fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// Random memory workload with a small page universe so hits happen
pub fn random_memory_workload(rng: &mut StdRng) -> Result<MemoryWorkload> {
    let frames = rng.gen_range(1..=6);
    let pages = rng.gen_range(1..=10);
    let len = rng.gen_range(1..=40);
    let references = (0..len).map(|_| rng.gen_range(0..pages)).collect();
    Ok(MemoryWorkload::new(frames, references)?)
}

pub fn random_disk_workload(rng: &mut StdRng) -> Result<DiskWorkload> {
    let cylinders = rng.gen_range(1..=300);
    let start = rng.gen_range(0..cylinders);
    let len = rng.gen_range(1..=20);
    let requests = (0..len).map(|_| rng.gen_range(0..cylinders)).collect();
    let direction = Direction::from(rng.gen_bool(0.5));
    Ok(DiskWorkload::new(cylinders, start, requests, direction)?)
}
