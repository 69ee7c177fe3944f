//! Core types: questions, prize ladder, RNG, configuration.
//!
//! Everything here is immutable for the life of a session. The mutable game
//! state lives in `game`.

pub mod config;
pub mod ladder;
pub mod question;
pub mod rng;

pub use config::GameConfig;
pub use ladder::{format_prize, PrizeLadder, SafeLevels, CLASSIC_PRIZES, CLASSIC_SAFE_LEVELS};
pub use question::{Difficulty, OptionIndex, Question, OPTION_COUNT};
pub use rng::GameRng;
