//! Error types.
//!
//! Configuration and content errors are ordinary `Result` errors. Session
//! commands never fail the process: an operation whose precondition does not
//! hold returns a [`Rejection`] and leaves the state untouched.

use thiserror::Error;

use crate::core::Difficulty;
use crate::lifelines::Lifeline;

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("prize ladder is empty")]
    EmptyLadder,

    #[error("prize ladder must be strictly increasing (rung {index} is {prize})")]
    LadderNotIncreasing { index: usize, prize: u32 },

    #[error("safe level {level} is outside the {len}-rung ladder")]
    SafeLevelOutOfRange { level: usize, len: usize },

    #[error("questions per tier must be at least 1")]
    NoQuestionsPerTier,

    #[error("bias range [{low}, {high}) is not within [0, 1]")]
    BiasOutOfRange { low: f64, high: f64 },
}

/// A question that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question {id} has an empty prompt")]
    EmptyPrompt { id: u32 },

    #[error("question {id} has an empty option {letter}")]
    EmptyOption { id: u32, letter: char },

    #[error("question {id} has answer key {key:?}, expected one of A-D")]
    InvalidAnswerKey { id: u32, key: String },
}

/// Failure to produce a question set.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("malformed question data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] QuestionError),

    #[error("not enough {difficulty} questions: need {needed}, have {available}")]
    NotEnoughQuestions {
        difficulty: Difficulty,
        needed: usize,
        available: usize,
    },
}

/// Why a session command was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is not in progress")]
    NotPlaying,

    #[error("the answer is locked in")]
    AnswerLocked,

    #[error("no option is selected")]
    NoSelection,

    #[error("option {0} does not exist")]
    OptionOutOfRange(usize),

    #[error("option {0} was eliminated")]
    OptionEliminated(usize),

    #[error("{0} has already been used")]
    LifelineUsed(Lifeline),

    #[error("{0} is still resolving")]
    LifelineResolving(Lifeline),
}
