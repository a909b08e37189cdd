use crate::board::Move;
use crate::types::{Score, TT_CAPACITY};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TTFlag {
    Exact,
    LowerBound, // failed high: real score >= stored
    UpperBound, // failed low: real score <= stored
}

#[derive(Clone, Copy)]
pub struct TTEntry {
    pub key: u64,
    pub score: Score,
    pub depth: i16,
    pub flag: TTFlag,
    pub best_move: Option<Move>,
}

impl Default for TTEntry {
    fn default() -> Self {
        TTEntry {
            key: 0,
            score: 0,
            depth: -1, // below any real search depth, so the first store wins
            flag: TTFlag::Exact,
            best_move: None,
        }
    }
}

/// Direct-mapped transposition table: one slot per index, no chaining.
/// A probe hits only when the full key matches; a store replaces the
/// slot whenever the incoming depth is at least the resident depth.
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    mask: usize,
}

impl TranspositionTable {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity.is_power_of_two(), "capacity must be a power of two");
        TranspositionTable {
            entries: vec![TTEntry::default(); capacity],
            mask: capacity - 1,
        }
    }

    pub fn probe(&self, key: u64) -> Option<&TTEntry> {
        let entry = &self.entries[key as usize & self.mask];
        if entry.key == key {
            Some(entry)
        } else {
            None
        }
    }

    pub fn store(&mut self, key: u64, score: Score, depth: i16, flag: TTFlag, best_move: Option<Move>) {
        let entry = &mut self.entries[key as usize & self.mask];
        if depth >= entry.depth {
            *entry = TTEntry {
                key,
                score,
                depth,
                flag,
                best_move,
            };
        }
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = TTEntry::default();
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new(TT_CAPACITY)
    }
}
