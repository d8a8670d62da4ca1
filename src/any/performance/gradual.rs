use crate::{
    drum::DrumGradualPerformance,
    keys::KeysGradualPerformance,
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
    rain::RainGradualPerformance,
    tap::TapGradualPerformance,
    Difficulty,
};

use super::super::{attributes::PerformanceAttributes, score_state::ScoreState};

/// Gradually calculate the performance attributes on maps of any mode.
///
/// After each hit object you can call [`next`] and it will return the
/// resulting current [`PerformanceAttributes`]. To process multiple objects
/// at once, use [`nth`] instead.
///
/// Both methods require a [`ScoreState`] that contains the current
/// hitresults as well as the maximum combo so far. Since the map could have
/// any mode, all fields of `ScoreState` could be of use and should be
/// updated properly.
///
/// Alternatively, you can match on the map's mode yourself and use the
/// gradual performance calculator for the corresponding mode, i.e.
/// [`TapGradualPerformance`], [`DrumGradualPerformance`],
/// [`RainGradualPerformance`], or [`KeysGradualPerformance`].
///
/// If you only want to calculate difficulty attributes use
/// [`GradualDifficulty`] instead.
///
/// [`next`]: GradualPerformance::next
/// [`nth`]: GradualPerformance::nth
/// [`GradualDifficulty`]: crate::GradualDifficulty
pub enum GradualPerformance {
    Tap(TapGradualPerformance),
    Drum(DrumGradualPerformance),
    Rain(RainGradualPerformance),
    Keys(KeysGradualPerformance),
}

impl GradualPerformance {
    /// Create a [`GradualPerformance`] for a map of any mode.
    pub fn new(difficulty: Difficulty, map: &Beatmap) -> Result<Self, ConvertError> {
        let mode = difficulty.get_mode().unwrap_or(map.mode);

        match mode {
            GameMode::Tap => TapGradualPerformance::new(difficulty, map).map(Self::Tap),
            GameMode::Drum => DrumGradualPerformance::new(difficulty, map).map(Self::Drum),
            GameMode::Rain => RainGradualPerformance::new(difficulty, map).map(Self::Rain),
            GameMode::Keys => KeysGradualPerformance::new(difficulty, map).map(Self::Keys),
        }
    }

    /// Process the next hit object and calculate the performance attributes
    /// for the resulting score state.
    pub fn next(&mut self, state: ScoreState) -> Option<PerformanceAttributes> {
        self.nth(state, 0)
    }

    /// Process all remaining hit objects and calculate the final performance
    /// attributes.
    pub fn last(&mut self, state: ScoreState) -> Option<PerformanceAttributes> {
        self.nth(state, usize::MAX)
    }

    /// Process everything up to the next `n`th hit object and calculate the
    /// performance attributes for the resulting score state.
    ///
    /// Note that the count is zero-indexed, so `n=0` will process 1 object,
    /// `n=1` will process 2, and so on.
    pub fn nth(&mut self, state: ScoreState, n: usize) -> Option<PerformanceAttributes> {
        match self {
            Self::Tap(gradual) => gradual.nth(state, n).map(PerformanceAttributes::Tap),
            Self::Drum(gradual) => gradual.nth(state, n).map(PerformanceAttributes::Drum),
            Self::Rain(gradual) => gradual.nth(state, n).map(PerformanceAttributes::Rain),
            Self::Keys(gradual) => gradual.nth(state, n).map(PerformanceAttributes::Keys),
        }
    }

    /// Amount of remaining objects.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Self::Tap(gradual) => gradual.len(),
            Self::Drum(gradual) => gradual.len(),
            Self::Rain(gradual) => gradual.len(),
            Self::Keys(gradual) => gradual.len(),
        }
    }
}
