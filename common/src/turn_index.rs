use crate::HashMap;
use std::{hash::BuildHasher, iter::FromIterator};

/// Lookup from a spoken value to the most recent turn it was spoken on.
///
/// Turns are 1-based, so a turn of `0` never appears as a recorded entry.
pub trait TurnIndex {
    /// Creates an empty index sized for values below `capacity`.
    fn with_capacity(capacity: usize) -> Self;

    /// Records `turn` for `value` and returns the turn it replaced, if any.
    ///
    /// The previous entry is read before the new one is written, which is
    /// the only ordering the recurrence is correct under.
    fn replace(&mut self, value: u32, turn: u32) -> Option<u32>;

    fn get(&self, value: u32) -> Option<u32>;

    /// Number of distinct values recorded.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `TurnIndex` backed by a flat table indexed by value.
///
/// Every value the recurrence produces is smaller than the target turn, so
/// a table of `target` slots never has to grow once the seed fits in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenseTable {
    /// `0` marks a value that was never spoken.
    turns: Vec<u32>,
    distinct: usize,
}

impl DenseTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently allocated.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.turns.len()
    }
}

impl TurnIndex for DenseTable {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            turns: vec![0; capacity],
            distinct: 0,
        }
    }

    fn replace(&mut self, value: u32, turn: u32) -> Option<u32> {
        debug_assert_ne!(turn, 0, "turns are numbered from 1");
        let slot = value as usize;
        if slot >= self.turns.len() {
            self.turns.resize(slot + 1, 0);
        }

        match std::mem::replace(&mut self.turns[slot], turn) {
            0 => {
                self.distinct += 1;
                None
            },
            prev => Some(prev),
        }
    }

    #[inline]
    fn get(&self, value: u32) -> Option<u32> {
        match self.turns.get(value as usize) {
            Some(&turn) if turn != 0 => Some(turn),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        self.distinct
    }
}

impl<S> TurnIndex for std::collections::HashMap<u32, u32, S>
where
    S: BuildHasher + Default,
{
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    #[inline]
    fn replace(&mut self, value: u32, turn: u32) -> Option<u32> {
        debug_assert_ne!(turn, 0, "turns are numbered from 1");
        self.insert(value, turn)
    }

    fn get(&self, value: u32) -> Option<u32> {
        std::collections::HashMap::get(self, &value).copied()
    }

    fn len(&self) -> usize {
        std::collections::HashMap::len(self)
    }
}

impl FromIterator<(u32, u32)> for DenseTable {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        let mut table = Self::new();
        iter.into_iter().for_each(|(value, turn)| {
            table.replace(value, turn);
        });
        table
    }
}

/// FNV-hashed `TurnIndex` for sparse value ranges.
pub type SparseTable = HashMap<u32, u32>;
