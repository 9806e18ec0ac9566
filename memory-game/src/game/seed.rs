use super::error::{InvalidInput, Result};
use itertools::Itertools;
use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
    num::IntErrorKind,
    str::FromStr,
};

/// Starting numbers of a game. Always holds at least two numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed(Vec<u32>);

#[allow(clippy::len_without_is_empty)]
impl Seed {
    pub fn new(numbers: Vec<u32>) -> Result<Self> {
        if numbers.len() < 2 {
            return Err(InvalidInput::SeedTooShort(numbers.len()));
        }
        Ok(Self(numbers))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The number spoken on the final seeded turn.
    #[must_use]
    pub fn last(&self) -> u32 {
        self.0[self.0.len() - 1]
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or_default()
    }

    /// The number spoken on `turn` (1-based), if it is a seeded turn.
    #[must_use]
    pub fn get(&self, turn: u32) -> Option<u32> {
        let index = usize::try_from(turn.checked_sub(1)?).ok()?;
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self(vec![13, 16, 0, 12, 15, 1])
    }
}

impl TryFrom<Vec<u32>> for Seed {
    type Error = InvalidInput;

    fn try_from(numbers: Vec<u32>) -> Result<Self> {
        Self::new(numbers)
    }
}

fn parse_number(token: &str) -> Result<u32> {
    let token = token.trim();
    match token.parse::<i64>() {
        Ok(n) if n < 0 => Err(InvalidInput::NegativeValue(token.to_owned())),
        Ok(n) => u32::try_from(n)
            .map_err(|_| InvalidInput::OutOfRange(token.to_owned())),
        Err(e) => Err(match e.kind() {
            IntErrorKind::NegOverflow => {
                InvalidInput::NegativeValue(token.to_owned())
            },
            IntErrorKind::PosOverflow => {
                InvalidInput::OutOfRange(token.to_owned())
            },
            _ => InvalidInput::NotANumber(token.to_owned()),
        }),
    }
}

impl FromStr for Seed {
    type Err = InvalidInput;

    /// Parses comma separated numbers, e.g. `0,3,6`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidInput::SeedTooShort(0));
        }
        s.split(',')
            .map(parse_number)
            .collect::<Result<_>>()
            .and_then(Self::new)
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}
