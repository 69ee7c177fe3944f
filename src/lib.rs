//! # millionaire
//!
//! Game-state engine for a fifteen-question, climb-the-ladder trivia show.
//!
//! ## Design Principles
//!
//! 1. **Tagged States**: A game is playing, won, lost, or has no content.
//!    Transitions compute a whole new [`GameState`]; nothing is patched in place.
//!
//! 2. **Injected Randomness**: Every random draw goes through a seeded
//!    [`GameRng`], so a seed replays a session exactly.
//!
//! 3. **Virtual Time**: Pauses (answer reveal, slow lifelines) are scheduled
//!    on a clock the host advances. Every resolution carries the session
//!    token it was scheduled under and is dropped if the game has moved on.
//!
//! ## Modules
//!
//! - `core`: Questions, prize ladder, configuration, RNG
//! - `lifelines`: 50:50, Ask the Audience, Phone a Friend
//! - `game`: The session state machine, scheduler, events, snapshots
//! - `source`: Question banks and caching
//! - `error`: Error and rejection types

pub mod core;
pub mod error;
pub mod game;
pub mod lifelines;
pub mod source;

// Re-export commonly used types
pub use crate::core::{
    format_prize, Difficulty, GameConfig, GameRng, OptionIndex, PrizeLadder, Question, SafeLevels,
    OPTION_COUNT,
};

pub use crate::error::{ConfigError, QuestionError, Rejection, SourceError};

pub use crate::game::{GameState, Round, Session, SessionEvent, SessionToken, Snapshot, Status};

pub use crate::lifelines::{
    AudienceVotes, BiasTable, Confidence, FriendSuggestion, Lifeline, LifelineResult, LifelineStatus,
};

pub use crate::source::{CachedSource, QuestionBank, QuestionRecord, QuestionSet, QuestionSource};
