//! Question-number bias tables.
//!
//! A table maps the 1-based question number to a probability range. The
//! lifeline draws a probability uniformly from that range each time it runs,
//! then uses it to decide whether the outcome leans toward the correct answer.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::ConfigError;

/// Half-open probability range `[low, high)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiasRange {
    pub low: f64,
    pub high: f64,
}

impl BiasRange {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `p` falls inside the range. A degenerate range contains its bound.
    #[must_use]
    pub fn contains(&self, p: f64) -> bool {
        if self.high <= self.low {
            return p == self.low;
        }
        p >= self.low && p < self.high
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let in_unit = (0.0..=1.0).contains(&self.low) && (0.0..=1.0).contains(&self.high);
        if in_unit && self.low <= self.high {
            Ok(())
        } else {
            Err(ConfigError::BiasOutOfRange {
                low: self.low,
                high: self.high,
            })
        }
    }
}

/// Range used for every question number up to and including `through_question`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiasTier {
    pub through_question: usize,
    pub range: BiasRange,
}

/// Tiered bias ranges, checked in order; `beyond` covers the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiasTable {
    tiers: Vec<BiasTier>,
    beyond: BiasRange,
}

impl BiasTable {
    /// Create a table. Tiers should be sorted by `through_question`.
    #[must_use]
    pub fn new(tiers: Vec<BiasTier>, beyond: BiasRange) -> Self {
        Self { tiers, beyond }
    }

    /// A table that always yields probability 1.
    #[must_use]
    pub fn certain() -> Self {
        Self::new(Vec::new(), BiasRange::new(1.0, 1.0))
    }

    /// Crowd accuracy: reliable early, close to a coin flip late.
    #[must_use]
    pub fn classic_audience() -> Self {
        Self::new(
            vec![
                BiasTier { through_question: 5, range: BiasRange::new(0.70, 0.85) },
                BiasTier { through_question: 10, range: BiasRange::new(0.50, 0.70) },
            ],
            BiasRange::new(0.30, 0.50),
        )
    }

    /// Friend accuracy: usually right on easy questions.
    #[must_use]
    pub fn classic_friend() -> Self {
        Self::new(
            vec![
                BiasTier { through_question: 5, range: BiasRange::new(0.80, 0.90) },
                BiasTier { through_question: 10, range: BiasRange::new(0.60, 0.75) },
            ],
            BiasRange::new(0.40, 0.60),
        )
    }

    /// Range for a 1-based question number.
    #[must_use]
    pub fn range_for(&self, question_number: usize) -> BiasRange {
        self.tiers
            .iter()
            .find(|tier| question_number <= tier.through_question)
            .map_or(self.beyond, |tier| tier.range)
    }

    /// Draw a probability for a 1-based question number.
    pub fn draw(&self, rng: &mut GameRng, question_number: usize) -> f64 {
        let range = self.range_for(question_number);
        rng.gen_uniform(range.low, range.high)
    }

    /// Check every range lies within `[0, 1]` and is not inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tier in &self.tiers {
            tier.range.validate()?;
        }
        self.beyond.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_tiers() {
        let table = BiasTable::classic_audience();
        assert_eq!(table.range_for(1), BiasRange::new(0.70, 0.85));
        assert_eq!(table.range_for(5), BiasRange::new(0.70, 0.85));
        assert_eq!(table.range_for(6), BiasRange::new(0.50, 0.70));
        assert_eq!(table.range_for(10), BiasRange::new(0.50, 0.70));
        assert_eq!(table.range_for(11), BiasRange::new(0.30, 0.50));
        assert_eq!(table.range_for(15), BiasRange::new(0.30, 0.50));
    }

    #[test]
    fn test_friend_draws_stay_in_tier() {
        let table = BiasTable::classic_friend();
        let mut rng = GameRng::new(42);
        for question_number in 1..=15 {
            let range = table.range_for(question_number);
            for _ in 0..50 {
                assert!(range.contains(table.draw(&mut rng, question_number)));
            }
        }
    }

    #[test]
    fn test_certain_always_one() {
        let mut rng = GameRng::new(1);
        assert_eq!(BiasTable::certain().draw(&mut rng, 3), 1.0);
    }

    #[test]
    fn test_validate() {
        assert!(BiasTable::classic_audience().validate().is_ok());
        assert!(BiasTable::certain().validate().is_ok());

        let inverted = BiasTable::new(Vec::new(), BiasRange::new(0.6, 0.4));
        assert!(matches!(inverted.validate(), Err(ConfigError::BiasOutOfRange { .. })));

        let too_high = BiasTable::new(
            vec![BiasTier { through_question: 3, range: BiasRange::new(0.5, 1.5) }],
            BiasRange::new(0.1, 0.2),
        );
        assert!(too_high.validate().is_err());
    }
}
