//! Question sources.
//!
//! A session only needs an ordered question list; how it is produced is up
//! to the [`QuestionSource`]. The crate ships an in-memory [`QuestionBank`]
//! (with the bundled seed questions) and a [`CachedSource`] wrapper that
//! reuses a fetched set for a minute.

pub mod bank;
pub mod cache;
pub mod record;

use im::Vector;

use crate::core::{GameConfig, GameRng, Question};
use crate::error::SourceError;

pub use bank::QuestionBank;
pub use cache::{CachedSource, TtlCache, DEFAULT_TTL};
pub use record::{parse_records, QuestionRecord, TieredResponse};

/// Ordered questions for one session. Cheap to clone.
pub type QuestionSet = Vector<Question>;

/// Produces the question list for a session.
pub trait QuestionSource {
    /// Fetch questions for a session: easy, then medium, then hard,
    /// `config.questions_per_tier` of each.
    fn fetch(&mut self, config: &GameConfig, rng: &mut GameRng) -> Result<QuestionSet, SourceError>;
}
