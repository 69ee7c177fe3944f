//! Game state: a tagged state with a payload only where it means something.
//!
//! ## GameState
//!
//! - `Playing(Round)`: the only variant with mutable sub-fields
//! - `Won` / `Lost`: terminal, carry only the final ladder rung
//! - `NoContent`: the question source gave nothing playable
//!
//! ## Transitions
//!
//! Every transition is a pure function from the current `Round` to a whole new
//! `GameState` (or `Round`). The session swaps the result in; nothing is ever
//! edited in place where an observer could see a half-applied change.

use serde::{Deserialize, Serialize};

use crate::core::{OptionIndex, Question, SafeLevels};
use crate::error::Rejection;
use crate::lifelines::{AudienceVotes, Eliminated, FriendSuggestion, Lifeline, LifelineResult, LifelineStatus};

/// Per-question state while a game is in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// 0-based question position; only ever increases within a session.
    pub question_index: usize,

    /// Option the player is leaning toward.
    pub selected: Option<OptionIndex>,

    /// Answer locked in; input is frozen until the next question.
    pub answer_revealed: bool,

    /// Options removed by 50:50 (zero or two).
    pub eliminated: Eliminated,

    /// Lifelines spent this session.
    pub used: LifelineStatus,

    /// Lifelines requested and waiting on their delay.
    pub resolving: LifelineStatus,

    /// Audience vote, once Ask the Audience resolves on this question.
    pub audience: Option<AudienceVotes>,

    /// Friend's suggestion, once Phone a Friend resolves on this question.
    pub friend: Option<FriendSuggestion>,
}

impl Round {
    /// Whether an option can currently be picked.
    #[must_use]
    pub fn is_selectable(&self, option: OptionIndex) -> bool {
        !self.answer_revealed && !self.eliminated.contains(&option)
    }

    /// Pick an option.
    pub fn select(&self, index: usize) -> Result<Round, Rejection> {
        if self.answer_revealed {
            return Err(Rejection::AnswerLocked);
        }
        let option = OptionIndex::new(index).ok_or(Rejection::OptionOutOfRange(index))?;
        if self.eliminated.contains(&option) {
            return Err(Rejection::OptionEliminated(index));
        }
        Ok(Round {
            selected: Some(option),
            ..self.clone()
        })
    }

    /// Lock in the selected option.
    pub fn lock_answer(&self) -> Result<Round, Rejection> {
        if self.answer_revealed {
            return Err(Rejection::AnswerLocked);
        }
        if self.selected.is_none() {
            return Err(Rejection::NoSelection);
        }
        Ok(Round {
            answer_revealed: true,
            ..self.clone()
        })
    }

    /// Evaluate the locked-in answer against `question`.
    ///
    /// A wrong answer banks the highest safe rung at or below this one.
    pub fn resolve_answer(&self, question: &Question, last_index: usize, safe: &SafeLevels) -> GameState {
        let correct = self.selected.is_some_and(|s| question.is_correct(s));
        if !correct {
            return GameState::Lost {
                final_score: safe.at_or_below(self.question_index).unwrap_or(0),
            };
        }
        if self.question_index >= last_index {
            GameState::Won {
                final_score: self.question_index,
            }
        } else {
            GameState::Playing(self.next_question())
        }
    }

    /// Fresh round for the following question. Lifeline usage carries over.
    #[must_use]
    pub fn next_question(&self) -> Round {
        Round {
            question_index: self.question_index + 1,
            used: self.used,
            ..Round::default()
        }
    }

    /// Take the winnings and leave.
    ///
    /// Banks the highest safe rung strictly below this one, or the previous
    /// rung if none, floored at rung 0.
    pub fn walk_away(&self, safe: &SafeLevels) -> Result<GameState, Rejection> {
        if self.answer_revealed {
            return Err(Rejection::AnswerLocked);
        }
        let final_score = safe
            .below(self.question_index)
            .unwrap_or_else(|| self.question_index.saturating_sub(1));
        Ok(GameState::Won { final_score })
    }

    /// Check a lifeline may be invoked now.
    pub fn check_lifeline(&self, lifeline: Lifeline) -> Result<(), Rejection> {
        if self.answer_revealed {
            return Err(Rejection::AnswerLocked);
        }
        if self.used.get(lifeline) {
            return Err(Rejection::LifelineUsed(lifeline));
        }
        if self.resolving.get(lifeline) {
            return Err(Rejection::LifelineResolving(lifeline));
        }
        Ok(())
    }

    /// Mark a lifeline as waiting on its delay.
    pub fn begin_lifeline(&self, lifeline: Lifeline) -> Result<Round, Rejection> {
        self.check_lifeline(lifeline)?;
        Ok(Round {
            resolving: self.resolving.with(lifeline),
            ..self.clone()
        })
    }

    /// Record a lifeline's result and spend it.
    #[must_use]
    pub fn apply_lifeline(&self, lifeline: Lifeline, result: LifelineResult) -> Round {
        let mut next = Round {
            used: self.used.with(lifeline),
            resolving: self.resolving.without(lifeline),
            ..self.clone()
        };
        match result {
            LifelineResult::Eliminated(options) => next.eliminated = options,
            LifelineResult::Audience(votes) => next.audience = Some(votes),
            LifelineResult::Friend(suggestion) => next.friend = Some(suggestion),
        }
        next
    }
}

/// Whole-session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum GameState {
    Playing(Round),
    #[serde(rename_all = "camelCase")]
    Won { final_score: usize },
    #[serde(rename_all = "camelCase")]
    Lost { final_score: usize },
    NoContent,
}

impl GameState {
    /// State at the start of a session: first question, nothing used.
    #[must_use]
    pub fn initial() -> Self {
        GameState::Playing(Round::default())
    }

    /// The in-progress round, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        match self {
            GameState::Playing(round) => Some(round),
            _ => None,
        }
    }

    /// Final ladder rung once the game is over.
    #[must_use]
    pub fn final_score(&self) -> Option<usize> {
        match self {
            GameState::Won { final_score } | GameState::Lost { final_score } => Some(*final_score),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Playing(_))
    }

    /// Won, lost, or nothing to play.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_playing()
    }
}
