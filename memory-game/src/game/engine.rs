use super::{
    error::{InvalidInput, Result},
    seed::Seed,
};
use common::{DenseTable, TurnIndex};
use std::iter::FusedIterator;

/// Plays the memory game one turn at a time.
///
/// `T` records the turn each number was last spoken on, not counting the
/// most recent turn. The number spoken on the most recent turn is held
/// separately in `last_spoken` and only written to the table when the next
/// turn looks it up.
#[derive(Debug, Clone)]
pub struct SequenceEngine<T = DenseTable> {
    seed: Seed,
    last_seen: T,
    /// Turn on which `last_spoken` was spoken.
    turn: u32,
    last_spoken: u32,
}

impl<T: TurnIndex> SequenceEngine<T> {
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self::with_capacity(seed, 0)
    }

    /// Same as `new`, with the table pre-sized for numbers below `capacity`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn with_capacity(seed: Seed, capacity: usize) -> Self {
        let mut last_seen = T::with_capacity(capacity);
        let init = &seed.as_slice()[..seed.len() - 1];
        (1..).zip(init).for_each(|(turn, &value)| {
            last_seen.replace(value, turn);
        });

        Self {
            turn: seed.len() as u32,
            last_spoken: seed.last(),
            last_seen,
            seed,
        }
    }

    /// Number of turns spoken so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn last_spoken(&self) -> u32 {
        self.last_spoken
    }

    #[must_use]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    #[must_use]
    pub fn last_seen(&self) -> &T {
        &self.last_seen
    }

    /// Plays a single turn and returns the number spoken on it.
    ///
    /// Overflows once `turn` reaches `u32::MAX`; `run` and the `Iterator`
    /// impl stop before that.
    #[inline]
    pub fn advance(&mut self) -> u32 {
        let spoken = match self.last_seen.replace(self.last_spoken, self.turn) {
            Some(prev) => self.turn - prev,
            None => 0,
        };
        self.last_spoken = spoken;
        self.turn += 1;
        spoken
    }

    /// Plays until `target` and returns the number spoken on that turn.
    ///
    /// Seeded turns are answered from the seed. Any other turn the engine
    /// has already moved past can't be recovered.
    pub fn run(&mut self, target: u32) -> Result<u32> {
        if target == 0 {
            return Err(InvalidInput::ZeroTarget);
        }
        if let Some(spoken) = self.seed.get(target) {
            return Ok(spoken);
        }
        if target < self.turn {
            return Err(InvalidInput::TurnPassed {
                target,
                turn: self.turn,
            });
        }

        while self.turn < target {
            self.advance();
        }
        Ok(self.last_spoken)
    }
}

impl<T: TurnIndex> Iterator for SequenceEngine<T> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        (self.turn < u32::MAX).then(|| self.advance())
    }
}

impl<T: TurnIndex> FusedIterator for SequenceEngine<T> {}
