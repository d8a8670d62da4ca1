use crate::{
    any::{Difficulty, ScoreState},
    drum::DrumGradualDifficulty,
    model::{beatmap::Beatmap, mode::ConvertError},
};

use super::DrumPerformanceAttributes;

/// Gradually calculate the performance attributes on percussion maps.
///
/// After each hit object you can call [`next`] and it will return the
/// resulting current [`DrumPerformanceAttributes`]. To process multiple
/// objects at once, use [`nth`] instead.
///
/// Both methods require a [`ScoreState`] that contains the current hitresults
/// as well as the maximum combo so far.
///
/// [`next`]: DrumGradualPerformance::next
/// [`nth`]: DrumGradualPerformance::nth
pub struct DrumGradualPerformance {
    difficulty: DrumGradualDifficulty,
}

impl DrumGradualPerformance {
    /// Create a new gradual performance calculator for percussion maps.
    pub fn new(difficulty: Difficulty, map: &Beatmap) -> Result<Self, ConvertError> {
        let difficulty = DrumGradualDifficulty::new(difficulty, map)?;

        Ok(Self { difficulty })
    }

    /// Process the next hit object and calculate the performance attributes
    /// for the resulting score state.
    pub fn next(&mut self, state: ScoreState) -> Option<DrumPerformanceAttributes> {
        self.nth(state, 0)
    }

    /// Process all remaining hit objects and calculate the final performance
    /// attributes.
    pub fn last(&mut self, state: ScoreState) -> Option<DrumPerformanceAttributes> {
        self.nth(state, usize::MAX)
    }

    /// Process everything up to the next `n`th hit object and calculate the
    /// performance attributes for the resulting score state.
    ///
    /// Note that the count is zero-indexed, so `n=0` will process 1 object,
    /// `n=1` will process 2, and so on.
    pub fn nth(&mut self, state: ScoreState, n: usize) -> Option<DrumPerformanceAttributes> {
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
