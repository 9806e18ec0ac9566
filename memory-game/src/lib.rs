#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod game;
pub mod prelude;

pub use game::{play, Answer, InvalidInput, Seed, SequenceEngine};
