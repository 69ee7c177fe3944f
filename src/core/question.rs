//! Questions and answer options.
//!
//! A [`Question`] always has exactly four options, enforced by the type.
//! Options are addressed by [`OptionIndex`], a 0-based index that is only
//! constructible for values 0-3.

use serde::{Deserialize, Serialize};

use crate::error::QuestionError;

/// Number of answer options on every question.
pub const OPTION_COUNT: usize = 4;

/// Index of an answer option (0-3, displayed as A-D).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct OptionIndex(u8);

impl OptionIndex {
    /// All four options in display order.
    pub const ALL: [OptionIndex; OPTION_COUNT] =
        [OptionIndex(0), OptionIndex(1), OptionIndex(2), OptionIndex(3)];

    /// Create an option index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < OPTION_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Option from its display letter (`A`-`D`, case-insensitive).
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Self(0)),
            'B' => Some(Self(1)),
            'C' => Some(Self(2)),
            'D' => Some(Self(3)),
            _ => None,
        }
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Display letter.
    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    /// The three other options, in order.
    pub fn others(self) -> impl Iterator<Item = OptionIndex> {
        Self::ALL.into_iter().filter(move |&o| o != self)
    }
}

impl TryFrom<u8> for OptionIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize).ok_or_else(|| format!("option index {value} out of range"))
    }
}

impl From<OptionIndex> for u8 {
    fn from(option: OptionIndex) -> Self {
        option.0
    }
}

impl std::fmt::Display for OptionIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Difficulty tier. Sessions play the tiers in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tiers in play order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// A multiple-choice question. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct_option: OptionIndex,
    pub difficulty: Difficulty,
}

impl Question {
    /// Create a question.
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_option: OptionIndex,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options: options.map(str::to_string),
            correct_option,
            difficulty,
        }
    }

    /// Text of an option.
    #[must_use]
    pub fn option(&self, option: OptionIndex) -> &str {
        &self.options[option.index()]
    }

    /// Check that the prompt and every option have visible text.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id: self.id });
        }
        for option in OptionIndex::ALL {
            if self.option(option).trim().is_empty() {
                return Err(QuestionError::EmptyOption {
                    id: self.id,
                    letter: option.letter(),
                });
            }
        }
        Ok(())
    }

    /// Whether `option` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: OptionIndex) -> bool {
        self.correct_option == option
    }

    /// The three incorrect options, in order.
    pub fn wrong_options(&self) -> impl Iterator<Item = OptionIndex> {
        self.correct_option.others()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            1,
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            OptionIndex::ALL[2],
            Difficulty::Easy,
        )
    }

    #[test]
    fn test_option_index_range() {
        assert_eq!(OptionIndex::new(3).map(OptionIndex::index), Some(3));
        assert!(OptionIndex::new(4).is_none());
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(OptionIndex::from_letter('c'), OptionIndex::new(2));
        assert_eq!(OptionIndex::from_letter('D'), OptionIndex::new(3));
        assert!(OptionIndex::from_letter('e').is_none());
        assert_eq!(OptionIndex::ALL[1].letter(), 'B');
        assert_eq!(format!("{}", OptionIndex::ALL[0]), "A");
    }

    #[test]
    fn test_others_excludes_self() {
        let others: Vec<_> = OptionIndex::ALL[1].others().map(OptionIndex::index).collect();
        assert_eq!(others, vec![0, 2, 3]);
    }

    #[test]
    fn test_wrong_options() {
        let q = sample();
        assert!(q.is_correct(OptionIndex::ALL[2]));
        assert_eq!(q.wrong_options().count(), 3);
        assert!(q.wrong_options().all(|o| !q.is_correct(o)));
        assert_eq!(q.option(OptionIndex::ALL[2]), "Paris");
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());

        let mut blank = sample();
        blank.prompt = "  ".to_string();
        assert_eq!(blank.validate(), Err(QuestionError::EmptyPrompt { id: 1 }));

        let mut missing = sample();
        missing.options[3].clear();
        assert_eq!(
            missing.validate(),
            Err(QuestionError::EmptyOption { id: 1, letter: 'D' })
        );
    }

    #[test]
    fn test_option_index_serde_rejects_out_of_range() {
        let ok: OptionIndex = serde_json::from_str("2").unwrap();
        assert_eq!(ok.index(), 2);
        assert!(serde_json::from_str::<OptionIndex>("4").is_err());
    }

    #[test]
    fn test_difficulty_serde() {
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"medium\"");
        assert_eq!(format!("{}", Difficulty::Hard), "hard");
    }
}
