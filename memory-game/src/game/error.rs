use thiserror::Error;

pub type Result<T, E = InvalidInput> = std::result::Result<T, E>;

/// Every way a game can be rejected before the first turn is played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("invalid input: need at least 2 starting numbers, got {0}")]
    SeedTooShort(usize),

    #[error("invalid input: starting number `{0}` is negative")]
    NegativeValue(String),

    #[error("invalid input: `{0}` is not a number")]
    NotANumber(String),

    #[error("invalid input: starting number `{0}` does not fit in 32 bits")]
    OutOfRange(String),

    #[error("invalid input: target turn must be greater than zero")]
    ZeroTarget,

    #[error("invalid input: turn {target} already passed, game is at turn {turn}")]
    TurnPassed { target: u32, turn: u32 },
}
