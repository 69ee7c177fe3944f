//! Ask the Audience: a simulated vote over the four options.
//!
//! One option takes a large block of the vote (the correct one when the draw
//! leans correct, a randomly chosen wrong one otherwise); the rest is split
//! across the other three options by successive uniform splits.

use serde::{Deserialize, Serialize};

use super::Draw;
use crate::core::{GameRng, OptionIndex, OPTION_COUNT};

/// Vote share of the correct option when the audience is right, `[35, 65)`.
const CORRECT_SHARE: std::ops::Range<u32> = 35..65;

/// Vote share of the popular wrong option when the audience is wrong, `[30, 55)`.
const POPULAR_WRONG_SHARE: std::ops::Range<u32> = 30..55;

/// Four vote percentages summing to exactly 100.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceVotes([u8; OPTION_COUNT]);

impl AudienceVotes {
    /// Percentages in option order.
    #[must_use]
    pub fn percentages(&self) -> [u8; OPTION_COUNT] {
        self.0
    }

    /// Share for one option.
    #[must_use]
    pub fn share(&self, option: OptionIndex) -> u8 {
        self.0[option.index()]
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&v| u32::from(v)).sum()
    }

    /// The option with the most votes (lowest index on ties).
    #[must_use]
    pub fn leader(&self) -> OptionIndex {
        let mut best = OptionIndex::ALL[0];
        for option in OptionIndex::ALL {
            if self.share(option) > self.share(best) {
                best = option;
            }
        }
        best
    }
}

/// Simulate the vote.
pub fn shape(rng: &mut GameRng, draw: Draw) -> AudienceVotes {
    let mut votes = [0u32; OPTION_COUNT];

    if draw.leans_correct {
        let share = rng.gen_range(CORRECT_SHARE);
        votes[draw.correct.index()] = share;
        let wrong: Vec<_> = draw.correct.others().collect();
        split_remaining(rng, &mut votes, &wrong, 100 - share);
    } else {
        let wrong: Vec<_> = draw.correct.others().collect();
        let popular = rng.choose(&wrong).copied().unwrap_or(wrong[0]);
        let share = rng.gen_range(POPULAR_WRONG_SHARE);
        votes[popular.index()] = share;
        let rest: Vec<_> = popular.others().collect();
        split_remaining(rng, &mut votes, &rest, 100 - share);
    }

    rebalance(&mut votes, draw.correct);
    // rebalance leaves every entry in 0..=100
    AudienceVotes(votes.map(|v| v as u8))
}

/// Hand out `remaining` across `recipients` in order. Each draws uniformly
/// from zero up to its fair share of what is left; the last takes the rest.
fn split_remaining(rng: &mut GameRng, votes: &mut [u32; OPTION_COUNT], recipients: &[OptionIndex], mut remaining: u32) {
    for (i, option) in recipients.iter().enumerate() {
        let left = recipients.len() - i;
        let share = if left == 1 {
            remaining
        } else {
            let fair = f64::from(remaining) / left as f64;
            ((rng.gen_unit() * fair).floor() as u32).min(remaining)
        };
        votes[option.index()] = share;
        remaining -= share;
    }
}

/// Force the total to 100 by adjusting the correct option.
///
/// Integer splits where the last recipient absorbs the remainder already sum
/// to 100, so this only fires if the split logic changes. Excess that would
/// drive the correct share below zero comes out of the largest other share.
fn rebalance(votes: &mut [u32; OPTION_COUNT], correct: OptionIndex) {
    let total: u32 = votes.iter().sum();
    if total < 100 {
        votes[correct.index()] += 100 - total;
    } else if total > 100 {
        let mut excess = total - 100;
        let from_correct = excess.min(votes[correct.index()]);
        votes[correct.index()] -= from_correct;
        excess -= from_correct;
        while excess > 0 {
            let Some(largest) = votes.iter_mut().max() else {
                break;
            };
            let take = excess.min(*largest);
            if take == 0 {
                break;
            }
            *largest -= take;
            excess -= take;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_votes_sum_to_100() {
        let mut rng = GameRng::new(42);
        for correct in OptionIndex::ALL {
            for leans_correct in [true, false] {
                for _ in 0..100 {
                    let votes = shape(&mut rng, Draw { correct, leans_correct });
                    assert_eq!(votes.total(), 100);
                }
            }
        }
    }

    #[test]
    fn test_correct_lean_gives_big_block() {
        let mut rng = GameRng::new(5);
        let correct = OptionIndex::ALL[1];
        for _ in 0..100 {
            let votes = shape(&mut rng, Draw { correct, leans_correct: true });
            assert!((35..65).contains(&votes.share(correct)));
        }
    }

    #[test]
    fn test_wrong_lean_has_popular_wrong_answer() {
        let mut rng = GameRng::new(6);
        let correct = OptionIndex::ALL[3];
        for _ in 0..100 {
            let votes = shape(&mut rng, Draw { correct, leans_correct: false });
            assert!(correct
                .others()
                .any(|o| (30..55).contains(&votes.share(o))));
        }
    }

    #[test]
    fn test_rebalance_shortfall_goes_to_correct() {
        let mut votes = [10, 20, 30, 30];
        rebalance(&mut votes, OptionIndex::ALL[0]);
        assert_eq!(votes, [20, 20, 30, 30]);
    }

    #[test]
    fn test_rebalance_excess_never_negative() {
        let mut votes = [5, 40, 40, 30];
        rebalance(&mut votes, OptionIndex::ALL[0]);
        assert_eq!(votes.iter().sum::<u32>(), 100);
        assert_eq!(votes[0], 0);
    }

    #[test]
    fn test_leader() {
        let votes = AudienceVotes([10, 60, 20, 10]);
        assert_eq!(votes.leader(), OptionIndex::ALL[1]);
    }
}
