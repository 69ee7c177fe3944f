//! Stored question rows and the question endpoint's response shape.
//!
//! Rows keep their four options in separate columns and the answer key as a
//! letter. [`QuestionRecord`] converts into a [`Question`]; [`TieredResponse`]
//! is the `{easy, medium, hard}` body the question endpoint returns.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, OptionIndex, Question};
use crate::error::{QuestionError, SourceError};

/// One stored question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default)]
    pub id: u32,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    /// `a`-`d`, either case.
    pub correct_answer: String,
    pub difficulty: Difficulty,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let key = record.correct_answer.trim();
        let mut chars = key.chars();
        let correct_option = match (chars.next(), chars.next()) {
            (Some(letter), None) => OptionIndex::from_letter(letter),
            _ => None,
        }
        .ok_or_else(|| QuestionError::InvalidAnswerKey {
            id: record.id,
            key: record.correct_answer.clone(),
        })?;

        let question = Question {
            id: record.id,
            prompt: record.question,
            options: [record.option_a, record.option_b, record.option_c, record.option_d],
            correct_option,
            difficulty: record.difficulty,
        };
        question.validate()?;
        Ok(question)
    }
}

/// Parse a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<QuestionRecord>, SourceError> {
    Ok(serde_json::from_str(json)?)
}

/// Question endpoint body: records grouped by tier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredResponse {
    #[serde(default)]
    pub easy: Vec<QuestionRecord>,
    #[serde(default)]
    pub medium: Vec<QuestionRecord>,
    #[serde(default)]
    pub hard: Vec<QuestionRecord>,
}

impl TieredResponse {
    /// Parse a response body.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Easy, then medium, then hard, converted to questions.
    pub fn into_questions(self) -> Result<Vec<Question>, SourceError> {
        self.easy
            .into_iter()
            .chain(self.medium)
            .chain(self.hard)
            .map(|record| Question::try_from(record).map_err(SourceError::from))
            .collect()
    }
}
