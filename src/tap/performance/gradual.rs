use crate::{
    any::{Difficulty, ScoreState},
    model::{beatmap::Beatmap, mode::ConvertError},
    tap::TapGradualDifficulty,
};

use super::super::attributes::TapPerformanceAttributes;

/// Gradually calculate the performance attributes of a cursor mode map.
///
/// After each hit object you can call [`next`] and it will return the
/// resulting current [`TapPerformanceAttributes`]. To process multiple
/// objects at once, use [`nth`] instead.
///
/// Both methods require a play's current score so far. Be sure the given
/// score is adjusted with respect to mods.
///
/// If you only want to calculate difficulty attributes use
/// [`TapGradualDifficulty`] instead.
///
/// [`next`]: TapGradualPerformance::next
/// [`nth`]: TapGradualPerformance::nth
pub struct TapGradualPerformance {
    difficulty: TapGradualDifficulty,
}

impl TapGradualPerformance {
    /// Create a new gradual performance calculator for cursor mode maps.
    pub fn new(difficulty: Difficulty, map: &Beatmap) -> Result<Self, ConvertError> {
        TapGradualDifficulty::new(difficulty, map).map(|difficulty| Self { difficulty })
    }

    /// Process the next hit object and calculate the performance attributes
    /// for the resulting score state.
    pub fn next(&mut self, state: ScoreState) -> Option<TapPerformanceAttributes> {
        self.nth(state, 0)
    }

    /// Process all remaining hit objects and calculate the final performance
    /// attributes.
    pub fn last(&mut self, state: ScoreState) -> Option<TapPerformanceAttributes> {
        self.nth(state, usize::MAX)
    }

    /// Process everything up to the next `n`th hitobject and calculate the
    /// performance attributes for the resulting score state.
    ///
    /// Note that the count is zero-indexed, so `n=0` will process 1 object,
    /// `n=1` will process 2, and so on.
    pub fn nth(&mut self, state: ScoreState, n: usize) -> Option<TapPerformanceAttributes> {
        self.difficulty
            .nth(n)?
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
