use crate::{
    any::{Difficulty, ScoreState},
    model::{beatmap::Beatmap, mode::ConvertError},
    rain::RainGradualDifficulty,
};

use super::RainPerformanceAttributes;

/// Gradually calculate the performance attributes on catcher maps.
///
/// After each fruit or droplet you can call [`next`] and it will return the
/// resulting current [`RainPerformanceAttributes`]. To process multiple
/// objects at once, use [`nth`] instead.
///
/// Both methods require a [`ScoreState`] that contains the current
/// hitresults as well as the maximum combo so far.
///
/// [`next`]: RainGradualPerformance::next
/// [`nth`]: RainGradualPerformance::nth
pub struct RainGradualPerformance {
    difficulty: RainGradualDifficulty,
}

impl RainGradualPerformance {
    /// Create a new gradual performance calculator for catcher mode maps.
    pub fn new(difficulty: Difficulty, map: &Beatmap) -> Result<Self, ConvertError> {
        let difficulty = RainGradualDifficulty::new(difficulty, map)?;

        Ok(Self { difficulty })
    }

    /// Process the next hit object and calculate the performance attributes
    /// for the resulting score state.
    pub fn next(&mut self, state: ScoreState) -> Option<RainPerformanceAttributes> {
        self.nth(state, 0)
    }

    /// Process all remaining hit objects and calculate the final performance
    /// attributes.
    pub fn last(&mut self, state: ScoreState) -> Option<RainPerformanceAttributes> {
        self.nth(state, usize::MAX)
    }

    /// Process everything up to the next `n`th hit object and calculate the
    /// performance attributes for the resulting score state.
    ///
    /// Note that the count is zero-indexed, so `n=0` will process 1 object,
    /// `n=1` will process 2, and so on.
    pub fn nth(&mut self, state: ScoreState, n: usize) -> Option<RainPerformanceAttributes> {
        let attrs = self.difficulty.nth(n)?;

        attrs
            .performance()
            .difficulty(self.difficulty.difficulty.clone())
            .passed_objects(self.difficulty.idx as u32)
            .state(state)
            .calculate()
            .ok()
    }

    /// Returns the amount of remaining objects.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.difficulty.len()
    }
}
