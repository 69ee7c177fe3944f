//! Phone a Friend: one suggested option and how sure the friend sounds.

use serde::{Deserialize, Serialize};

use super::Draw;
use crate::core::{GameRng, OptionIndex};

/// How sure the friend sounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Confidence {
    Confident,
    PrettySure,
    Think,
    NotSure,
}

impl Confidence {
    /// Label as shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::Confident => "confident",
            Confidence::PrettySure => "pretty sure",
            Confidence::Think => "think",
            Confidence::NotSure => "not sure",
        }
    }
}

/// The friend's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendSuggestion {
    pub option: OptionIndex,
    pub confidence: Confidence,
}

impl FriendSuggestion {
    /// What the friend says on the phone.
    #[must_use]
    pub fn message(&self) -> String {
        let letter = self.option.letter();
        match self.confidence {
            Confidence::Confident => format!("I'm confident it's {letter}!"),
            Confidence::PrettySure => format!("I'm pretty sure it's {letter}."),
            Confidence::Think => format!("I think it might be {letter}, but I'm not certain."),
            Confidence::NotSure => format!("I'm really not sure, but maybe {letter}?"),
        }
    }
}

/// Suggest the correct option when the draw leans correct (sounding confident
/// 70% of the time), otherwise a uniformly random wrong option (sounding
/// unsure half the time).
pub fn shape(rng: &mut GameRng, draw: Draw) -> FriendSuggestion {
    if draw.leans_correct {
        let confidence = if rng.gen_bool(0.7) {
            Confidence::Confident
        } else {
            Confidence::PrettySure
        };
        FriendSuggestion { option: draw.correct, confidence }
    } else {
        let wrong: Vec<_> = draw.correct.others().collect();
        let option = rng.choose(&wrong).copied().unwrap_or(wrong[0]);
        let confidence = if rng.gen_bool(0.5) {
            Confidence::NotSure
        } else {
            Confidence::Think
        };
        FriendSuggestion { option, confidence }
    }
}
