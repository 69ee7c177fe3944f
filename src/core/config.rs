//! Game configuration.
//!
//! Hosts configure a session at startup by providing a `GameConfig`:
//! - The prize ladder and its safe levels
//! - Dramatic-pause delays for the answer reveal and the slow lifelines
//! - Bias tables for the audience and the friend
//! - How many questions the source draws per difficulty tier
//!
//! `GameConfig::classic()` is the televised format.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ladder::{PrizeLadder, SafeLevels};
use crate::error::ConfigError;
use crate::lifelines::{BiasTable, Lifeline};

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Prize per rung.
    pub ladder: PrizeLadder,

    /// Guaranteed rungs.
    pub safe_levels: SafeLevels,

    /// Pause between locking in an answer and revealing it.
    pub reveal_delay: Duration,

    /// Pause before Ask the Audience and Phone a Friend report back.
    pub lifeline_delay: Duration,

    /// Questions drawn per difficulty tier.
    pub questions_per_tier: usize,

    /// How often the audience leans toward the correct answer.
    pub audience_bias: BiasTable,

    /// How often the friend names the correct answer.
    pub friend_bias: BiasTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameConfig {
    /// The televised format: 15 rungs, safe at 5/10/15, 3 s reveal, 2 s lifelines.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            ladder: PrizeLadder::classic(),
            safe_levels: SafeLevels::classic(),
            reveal_delay: Duration::from_secs(3),
            lifeline_delay: Duration::from_secs(2),
            questions_per_tier: 5,
            audience_bias: BiasTable::classic_audience(),
            friend_bias: BiasTable::classic_friend(),
        }
    }

    /// Set the answer reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Set the lifeline delay.
    #[must_use]
    pub fn with_lifeline_delay(mut self, delay: Duration) -> Self {
        self.lifeline_delay = delay;
        self
    }

    /// Remove both dramatic pauses; every command resolves immediately.
    #[must_use]
    pub fn instant(self) -> Self {
        self.with_reveal_delay(Duration::ZERO)
            .with_lifeline_delay(Duration::ZERO)
    }

    /// Set the prize ladder.
    #[must_use]
    pub fn with_ladder(mut self, ladder: PrizeLadder) -> Self {
        self.ladder = ladder;
        self
    }

    /// Set the safe levels.
    #[must_use]
    pub fn with_safe_levels(mut self, safe_levels: SafeLevels) -> Self {
        self.safe_levels = safe_levels;
        self
    }

    /// Set how many questions are drawn per tier.
    #[must_use]
    pub fn with_questions_per_tier(mut self, count: usize) -> Self {
        self.questions_per_tier = count;
        self
    }

    /// Bias table for a lifeline. 50:50 is not biased.
    #[must_use]
    pub fn bias(&self, lifeline: Lifeline) -> &BiasTable {
        static CERTAIN: std::sync::OnceLock<BiasTable> = std::sync::OnceLock::new();
        match lifeline {
            Lifeline::FiftyFifty => CERTAIN.get_or_init(BiasTable::certain),
            Lifeline::AskAudience => &self.audience_bias,
            Lifeline::PhoneAFriend => &self.friend_bias,
        }
    }

    /// Delay before a lifeline reports back. 50:50 is immediate.
    #[must_use]
    pub fn lifeline_delay_for(&self, lifeline: Lifeline) -> Duration {
        match lifeline {
            Lifeline::FiftyFifty => Duration::ZERO,
            Lifeline::AskAudience | Lifeline::PhoneAFriend => self.lifeline_delay,
        }
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ladder.validate()?;
        self.safe_levels.validate(&self.ladder)?;
        if self.questions_per_tier == 0 {
            return Err(ConfigError::NoQuestionsPerTier);
        }
        self.audience_bias.validate()?;
        self.friend_bias.validate()
    }
}
