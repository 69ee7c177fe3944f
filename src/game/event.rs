//! Notifications emitted by a session.
//!
//! Hosts use these to cue sound effects and animations; the core itself does
//! no audio or rendering.

use serde::{Deserialize, Serialize};

use super::scheduler::{SessionToken, TaskId};
use crate::core::OptionIndex;
use crate::lifelines::Lifeline;

/// Something that happened in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "event")]
pub enum SessionEvent {
    /// The player locked in an answer; the reveal is pending.
    #[serde(rename_all = "camelCase")]
    AnswerLocked { question_index: usize, option: OptionIndex },

    #[serde(rename_all = "camelCase")]
    AnswerCorrect { question_index: usize },

    #[serde(rename_all = "camelCase")]
    AnswerWrong { question_index: usize, correct: OptionIndex },

    /// Moved on to the next question.
    #[serde(rename_all = "camelCase")]
    Advanced { question_index: usize },

    /// Answered the final question.
    #[serde(rename_all = "camelCase")]
    Won { final_score: usize, prize: u32 },

    #[serde(rename_all = "camelCase")]
    Lost { final_score: usize, prize: u32 },

    /// Took the money.
    #[serde(rename_all = "camelCase")]
    WalkedAway { final_score: usize, prize: u32 },

    LifelineRequested { lifeline: Lifeline },

    LifelineResolved { lifeline: Lifeline },

    /// A deferred resolution fired after its session or question was gone.
    StaleDropped { task: TaskId },

    /// A new play-through started.
    Reset { token: SessionToken },
}
