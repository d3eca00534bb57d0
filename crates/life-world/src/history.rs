//! Recent-generation history for spotting still lifes and oscillators.

use crate::grid::Grid;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::warn;

pub const DEFAULT_HISTORY_LEN: usize = 10;

/// What the latest generation looks like compared to recent ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not seen within the history window
    Evolving,
    /// Identical to a generation `period` steps ago
    Cycle { period: u64 },
    /// No live cells remain
    Extinct,
}

/// Ring of the last few generations, keyed by grid hash
#[derive(Debug, Clone)]
pub struct GridHistory {
    entries: Vec<Entry>,
    capacity: usize,
    next: usize,
}

impl Default for GridHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LEN)
    }
}

impl GridHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            next: 0,
        }
    }

    /// Record `grid` as generation `generation` and classify it
    pub fn observe(&mut self, generation: u64, grid: &Grid) -> Outcome {
        if grid.live_count() == 0 {
            return Outcome::Extinct;
        }

        let hash = hash_grid(grid);
        // Equal hashes only count as a repeat when the grids match too
        let previous = self
            .entries
            .iter()
            .filter(|e| e.hash == hash && e.grid == *grid)
            .map(|e| e.generation)
            .max();

        let entry = Entry {
            hash,
            generation,
            grid: grid.clone(),
        };
        if self.entries.len() < self.capacity {
            self.entries.push(entry);
        } else {
            self.entries[self.next] = entry;
        }
        self.next = (self.next + 1) % self.capacity;

        match previous {
            Some(seen) if seen < generation => {
                let period = generation - seen;
                warn!(generation, period, "Grid repeats an earlier generation");
                Outcome::Cycle { period }
            }
            _ => Outcome::Evolving,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next = 0;
    }
}

#[derive(Debug, Clone)]
struct Entry {
    hash: u64,
    generation: u64,
    grid: Grid,
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}
