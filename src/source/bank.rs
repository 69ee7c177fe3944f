//! In-memory question bank.
//!
//! Questions are pooled by difficulty. A fetch draws `questions_per_tier`
//! questions from each tier in random order and concatenates easy, medium,
//! hard.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::record::{parse_records, QuestionRecord};
use super::{QuestionSet, QuestionSource};
use crate::core::{Difficulty, GameConfig, GameRng, Question};
use crate::error::SourceError;

/// Seed data shipped with the crate.
const BUILTIN_QUESTIONS: &str = include_str!("../../data/questions.json");

/// Pool of questions grouped by difficulty.
///
/// ```
/// use millionaire::core::{Difficulty, GameRng};
/// use millionaire::source::QuestionBank;
///
/// let bank = QuestionBank::builtin().unwrap();
/// assert_eq!(bank.count(Difficulty::Easy), 5);
///
/// let mut rng = GameRng::new(42);
/// let easy = bank.draw(Difficulty::Easy, 3, &mut rng).unwrap();
/// assert_eq!(easy.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuestionBank {
    tiers: FxHashMap<Difficulty, Vec<Question>>,
}

impl QuestionBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled 15-question bank.
    pub fn builtin() -> Result<Self, SourceError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Load a JSON array of question records.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Self::from_records(parse_records(json)?)
    }

    /// Build from records. Fails on the first invalid record.
    pub fn from_records(records: impl IntoIterator<Item = QuestionRecord>) -> Result<Self, SourceError> {
        let mut bank = Self::new();
        for record in records {
            bank.insert(Question::try_from(record)?);
        }
        Ok(bank)
    }

    /// Add a question to its tier.
    pub fn insert(&mut self, question: Question) {
        self.tiers.entry(question.difficulty).or_default().push(question);
    }

    /// Questions in a tier.
    #[must_use]
    pub fn count(&self, difficulty: Difficulty) -> usize {
        self.tiers.get(&difficulty).map_or(0, Vec::len)
    }

    /// Total questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw `count` distinct questions from a tier in random order.
    pub fn draw(&self, difficulty: Difficulty, count: usize, rng: &mut GameRng) -> Result<Vec<Question>, SourceError> {
        let pool = self.tiers.get(&difficulty).map_or(&[][..], Vec::as_slice);
        if pool.len() < count {
            return Err(SourceError::NotEnoughQuestions {
                difficulty,
                needed: count,
                available: pool.len(),
            });
        }
        let mut drawn = rng.sample(pool, count);
        rng.shuffle(&mut drawn);
        Ok(drawn)
    }
}

impl QuestionSource for QuestionBank {
    fn fetch(&mut self, config: &GameConfig, rng: &mut GameRng) -> Result<QuestionSet, SourceError> {
        let mut set = QuestionSet::new();
        for difficulty in Difficulty::ALL {
            set.extend(self.draw(difficulty, config.questions_per_tier, rng)?);
        }
        debug!(questions = set.len(), "drew question set");
        Ok(set)
    }
}
