//! 50:50: remove two wrong answers.

use smallvec::SmallVec;

use super::Draw;
use crate::core::{GameRng, OptionIndex};

/// Options removed by 50:50. Empty until the lifeline is used, then exactly two.
pub type Eliminated = SmallVec<[OptionIndex; 2]>;

/// Pick two of the three wrong options uniformly without replacement.
///
/// The lean of the draw is ignored: the correct option always survives.
pub fn shape(rng: &mut GameRng, draw: Draw) -> Eliminated {
    let wrong: SmallVec<[OptionIndex; 3]> = draw.correct.others().collect();
    let mut picked = rng.sample(&wrong, 2);
    picked.sort_unstable();
    SmallVec::from_vec(picked)
}
