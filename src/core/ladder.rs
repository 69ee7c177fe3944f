//! Prize ladder and safe levels.
//!
//! The ladder maps a question position (0-based rung) to the prize banked
//! for it. Safe levels are rungs below which a losing score cannot fall.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The canonical 15-rung ladder.
pub const CLASSIC_PRIZES: [u32; 15] = [
    100, 200, 300, 500, 1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000,
    500_000, 1_000_000,
];

/// The canonical safe rungs (after questions 5, 10 and 15).
pub const CLASSIC_SAFE_LEVELS: [usize; 3] = [4, 9, 14];

/// Ordered, strictly increasing prize amounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeLadder(Vec<u32>);

impl PrizeLadder {
    /// Create a ladder. Call [`PrizeLadder::validate`] before use.
    pub fn new(prizes: impl Into<Vec<u32>>) -> Self {
        Self(prizes.into())
    }

    /// The canonical $100 to $1,000,000 ladder.
    #[must_use]
    pub fn classic() -> Self {
        Self(CLASSIC_PRIZES.to_vec())
    }

    /// Number of rungs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prize for a rung, or `None` past the top.
    #[must_use]
    pub fn prize(&self, rung: usize) -> Option<u32> {
        self.0.get(rung).copied()
    }

    /// Index of the top rung.
    #[must_use]
    pub fn top(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// All prizes, bottom first.
    #[must_use]
    pub fn prizes(&self) -> &[u32] {
        &self.0
    }

    /// Check the ladder is non-empty and strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            return Err(ConfigError::EmptyLadder);
        }
        for (index, pair) in self.0.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ConfigError::LadderNotIncreasing {
                    index: index + 1,
                    prize: pair[1],
                });
            }
        }
        Ok(())
    }
}

impl Default for PrizeLadder {
    fn default() -> Self {
        Self::classic()
    }
}

/// Rungs at which winnings are guaranteed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeLevels(Vec<usize>);

impl SafeLevels {
    /// Create a safe-level set. Input order does not matter.
    pub fn new(levels: impl Into<Vec<usize>>) -> Self {
        let mut levels = levels.into();
        levels.sort_unstable();
        levels.dedup();
        Self(levels)
    }

    /// The canonical `{4, 9, 14}`.
    #[must_use]
    pub fn classic() -> Self {
        Self(CLASSIC_SAFE_LEVELS.to_vec())
    }

    /// Whether a rung is safe.
    #[must_use]
    pub fn contains(&self, rung: usize) -> bool {
        self.0.binary_search(&rung).is_ok()
    }

    /// Highest safe rung `<= rung`.
    ///
    /// Used when an answer is wrong: reaching a safe question banks it.
    #[must_use]
    pub fn at_or_below(&self, rung: usize) -> Option<usize> {
        self.0.iter().rev().copied().find(|&level| level <= rung)
    }

    /// Highest safe rung strictly `< rung`.
    ///
    /// Used when walking away: the current question is not yet answered.
    #[must_use]
    pub fn below(&self, rung: usize) -> Option<usize> {
        self.0.iter().rev().copied().find(|&level| level < rung)
    }

    /// Safe rungs, ascending.
    #[must_use]
    pub fn levels(&self) -> &[usize] {
        &self.0
    }

    /// Check every safe rung exists on `ladder`.
    pub fn validate(&self, ladder: &PrizeLadder) -> Result<(), ConfigError> {
        match self.0.iter().find(|&&level| level >= ladder.len()) {
            Some(&level) => Err(ConfigError::SafeLevelOutOfRange {
                level,
                len: ladder.len(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for SafeLevels {
    fn default() -> Self {
        Self::classic()
    }
}

/// Format a prize with thousands separators, e.g. `$1,000,000`.
#[must_use]
pub fn format_prize(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_ladder() {
        let ladder = PrizeLadder::classic();
        assert_eq!(ladder.len(), 15);
        assert_eq!(ladder.prize(0), Some(100));
        assert_eq!(ladder.prize(4), Some(1_000));
        assert_eq!(ladder.prize(9), Some(32_000));
        assert_eq!(ladder.prize(14), Some(1_000_000));
        assert_eq!(ladder.prize(15), None);
        assert_eq!(ladder.top(), 14);
        assert!(ladder.validate().is_ok());
    }

    #[test]
    fn test_ladder_must_increase() {
        assert_eq!(
            PrizeLadder::new(vec![100, 200, 200]).validate(),
            Err(ConfigError::LadderNotIncreasing { index: 2, prize: 200 })
        );
        assert_eq!(PrizeLadder::new(Vec::new()).validate(), Err(ConfigError::EmptyLadder));
    }

    #[test]
    fn test_safe_lookup_at_or_below() {
        let safe = SafeLevels::classic();
        assert_eq!(safe.at_or_below(3), None);
        assert_eq!(safe.at_or_below(4), Some(4));
        assert_eq!(safe.at_or_below(12), Some(9));
        assert_eq!(safe.at_or_below(14), Some(14));
    }

    #[test]
    fn test_safe_lookup_below() {
        let safe = SafeLevels::classic();
        assert_eq!(safe.below(0), None);
        assert_eq!(safe.below(4), None);
        assert_eq!(safe.below(5), Some(4));
        assert_eq!(safe.below(10), Some(9));
        assert_eq!(safe.below(14), Some(9));
    }

    #[test]
    fn test_safe_levels_sorted_and_validated() {
        let safe = SafeLevels::new(vec![9, 4, 9]);
        assert_eq!(safe.levels(), &[4, 9]);
        assert!(safe.contains(9));
        assert!(!safe.contains(5));

        let ladder = PrizeLadder::new(vec![1, 2, 3]);
        assert_eq!(
            safe.validate(&ladder),
            Err(ConfigError::SafeLevelOutOfRange { level: 4, len: 3 })
        );
    }

    #[test]
    fn test_format_prize() {
        assert_eq!(format_prize(100), "$100");
        assert_eq!(format_prize(1_000), "$1,000");
        assert_eq!(format_prize(32_000), "$32,000");
        assert_eq!(format_prize(125_000), "$125,000");
        assert_eq!(format_prize(1_000_000), "$1,000,000");
        assert_eq!(format_prize(0), "$0");
    }
}
