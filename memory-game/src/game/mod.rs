use crate::prelude::*;

pub mod engine;
pub mod error;
pub mod seed;

pub use engine::SequenceEngine;
pub use error::InvalidInput;
pub use seed::Seed;

pub const DEFAULT_TARGET: u32 = 30_000_000;

/// Upper bound on the number of entries a sparse table is pre-sized for.
const SPARSE_PRESIZE_LIMIT: usize = 1 << 20;

/// Plays a fresh game from `seed` and returns the number spoken on `target`.
///
/// When every starting number is below `target`, so is every number the game
/// will ever speak, and a flat table of `target` slots is used. Otherwise the
/// numbers go into a hash table.
pub fn play(seed: &Seed, target: u32) -> error::Result<u32> {
    if target == 0 {
        return Err(InvalidInput::ZeroTarget);
    }

    let spoken = if seed.max() < target {
        debug!(%seed, target, "playing with dense table");
        SequenceEngine::<DenseTable>::with_capacity(
            seed.clone(),
            target as usize,
        )
        .run(target)?
    } else {
        let capacity = (target as usize).min(SPARSE_PRESIZE_LIMIT);
        debug!(%seed, target, capacity, "playing with sparse table");
        SequenceEngine::<SparseTable>::with_capacity(seed.clone(), capacity)
            .run(target)?
    };

    info!(target, spoken, "game finished");
    Ok(spoken)
}

pub struct Answer {
    pub target: u32,
}

impl Default for Answer {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
        }
    }
}

impl Solver for Answer {
    type Input = Seed;
    type Output = u32;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        Ok(parse_string(r)?.parse()?)
    }

    /// Correct: `2424`
    fn solve(&self, input: &Self::Input) -> Result<Self::Output> {
        Ok(play(input, self.target)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn seed(s: &str) -> Seed {
        s.parse().unwrap()
    }

    #[test]
    fn example_games() {
        let expected = [
            ("0,3,6", 436),
            ("1,3,2", 1),
            ("2,1,3", 10),
            ("1,2,3", 27),
            ("2,3,1", 78),
            ("3,2,1", 438),
            ("3,1,2", 1836),
        ];
        for &(numbers, spoken) in &expected {
            assert_eq!(play(&seed(numbers), 2020), Ok(spoken), "{}", numbers);
        }
    }

    #[test]
    fn part_one() {
        assert_eq!(play(&Seed::default(), 2020), Ok(319));
    }

    #[test]
    fn part_two() {
        let input = Answer::default()
            .parse_input("13,16,0,12,15,1\n".as_bytes())
            .unwrap();
        assert_eq!(Answer::default().solve(&input).unwrap(), 2424);
    }

    #[test]
    fn large_starting_numbers() {
        // 4000000000 is larger than the target, so this plays on a hash table
        let numbers = seed("4000000000,0,4000000000");
        assert_eq!(play(&numbers, 3), Ok(4_000_000_000));
        assert_eq!(play(&numbers, 4), Ok(2));
        assert_eq!(play(&numbers, 5), Ok(0));
        assert_eq!(play(&numbers, 6), Ok(3));
    }

    #[test]
    fn invalid_input() {
        assert_eq!(play(&Seed::default(), 0), Err(InvalidInput::ZeroTarget));
        assert!(Answer::default().parse_input("1".as_bytes()).is_err());
        assert!(Answer { target: 0 }.solve(&Seed::default()).is_err());
    }

    fn widen<T: Into<u32>>(numbers: Vec<T>) -> Option<Seed> {
        Seed::new(numbers.into_iter().map(Into::into).collect()).ok()
    }

    quickcheck! {
        fn seeded_turns_come_from_seed(numbers: Vec<u32>, turn: usize) -> TestResult {
            let seed = match widen(numbers) {
                Some(seed) => seed,
                None => return TestResult::discard(),
            };
            let index = turn % seed.len();
            let target = index as u32 + 1;
            TestResult::from_bool(play(&seed, target) == Ok(seed.as_slice()[index]))
        }

        fn dense_and_sparse_agree(numbers: Vec<u16>, target: u16) -> TestResult {
            let seed = match widen(numbers) {
                Some(seed) => seed,
                None => return TestResult::discard(),
            };
            let target = u32::from(target) + 1;
            let dense =
                SequenceEngine::<DenseTable>::new(seed.clone()).run(target);
            let sparse =
                SequenceEngine::<SparseTable>::new(seed.clone()).run(target);
            TestResult::from_bool(dense == sparse && play(&seed, target) == dense)
        }

        fn replay_is_deterministic(numbers: Vec<u8>, target: u16) -> TestResult {
            let seed = match widen(numbers) {
                Some(seed) => seed,
                None => return TestResult::discard(),
            };
            let target = u32::from(target) + 1;
            TestResult::from_bool(play(&seed, target) == play(&seed, target))
        }
    }
}
