//! Lifeline simulators.
//!
//! All three lifelines follow the same shape: guard, optional delay, a biased
//! random draw against the current question's correct option, then commit.
//! The session owns the guard, delay and commit; this module owns the draw.
//!
//! - [`simulate`]: the shared routine. Draws a probability from a
//!   [`BiasTable`] for the question number, rolls whether the outcome leans
//!   correct, then hands a [`Draw`] to an output-shape closure.
//! - [`fifty_fifty`], [`audience`], [`friend`]: the three output shapes.
//!
//! Results are informational. Nothing here touches the player's selection.

pub mod audience;
pub mod bias;
pub mod fifty_fifty;
pub mod friend;

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, OptionIndex};

pub use audience::AudienceVotes;
pub use bias::{BiasRange, BiasTable, BiasTier};
pub use fifty_fifty::Eliminated;
pub use friend::{Confidence, FriendSuggestion};

/// The three lifelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Lifeline {
    FiftyFifty,
    AskAudience,
    PhoneAFriend,
}

impl Lifeline {
    pub const ALL: [Lifeline; 3] = [Lifeline::FiftyFifty, Lifeline::AskAudience, Lifeline::PhoneAFriend];
}

impl std::fmt::Display for Lifeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Lifeline::FiftyFifty => "50:50",
            Lifeline::AskAudience => "Ask the Audience",
            Lifeline::PhoneAFriend => "Phone a Friend",
        };
        f.write_str(name)
    }
}

/// One flag per lifeline.
///
/// Flags only go from false to true; a new session starts from `default()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifelineStatus {
    pub fifty_fifty: bool,
    pub ask_audience: bool,
    pub phone_a_friend: bool,
}

impl LifelineStatus {
    #[must_use]
    pub fn get(&self, lifeline: Lifeline) -> bool {
        match lifeline {
            Lifeline::FiftyFifty => self.fifty_fifty,
            Lifeline::AskAudience => self.ask_audience,
            Lifeline::PhoneAFriend => self.phone_a_friend,
        }
    }

    /// Copy with one flag set.
    #[must_use]
    pub fn with(mut self, lifeline: Lifeline) -> Self {
        match lifeline {
            Lifeline::FiftyFifty => self.fifty_fifty = true,
            Lifeline::AskAudience => self.ask_audience = true,
            Lifeline::PhoneAFriend => self.phone_a_friend = true,
        }
        self
    }

    /// Copy with one flag cleared.
    #[must_use]
    pub fn without(mut self, lifeline: Lifeline) -> Self {
        match lifeline {
            Lifeline::FiftyFifty => self.fifty_fifty = false,
            Lifeline::AskAudience => self.ask_audience = false,
            Lifeline::PhoneAFriend => self.phone_a_friend = false,
        }
        self
    }
}

/// The random input an output shape works from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    /// Correct option of the current question.
    pub correct: OptionIndex,
    /// Whether this outcome should favour the correct option.
    pub leans_correct: bool,
}

/// Shared lifeline routine.
///
/// `question_index` is 0-based; tables are keyed by the 1-based number.
pub fn simulate<T>(
    rng: &mut GameRng,
    bias: &BiasTable,
    question_index: usize,
    correct: OptionIndex,
    shape: impl FnOnce(&mut GameRng, Draw) -> T,
) -> T {
    let p = bias.draw(rng, question_index + 1);
    let leans_correct = rng.gen_bool(p);
    shape(rng, Draw { correct, leans_correct })
}

/// Result of a resolved lifeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "result")]
pub enum LifelineResult {
    Eliminated(Eliminated),
    Audience(AudienceVotes),
    Friend(FriendSuggestion),
}

/// Run a lifeline with the tables from `config`.
pub fn resolve(
    lifeline: Lifeline,
    config: &GameConfig,
    rng: &mut GameRng,
    question_index: usize,
    correct: OptionIndex,
) -> LifelineResult {
    let bias = config.bias(lifeline);
    match lifeline {
        Lifeline::FiftyFifty => {
            LifelineResult::Eliminated(simulate(rng, bias, question_index, correct, fifty_fifty::shape))
        }
        Lifeline::AskAudience => {
            LifelineResult::Audience(simulate(rng, bias, question_index, correct, audience::shape))
        }
        Lifeline::PhoneAFriend => {
            LifelineResult::Friend(simulate(rng, bias, question_index, correct, friend::shape))
        }
    }
}
