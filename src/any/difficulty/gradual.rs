use crate::{
    drum::DrumGradualDifficulty,
    keys::KeysGradualDifficulty,
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
    rain::RainGradualDifficulty,
    tap::TapGradualDifficulty,
};

use super::{super::attributes::DifficultyAttributes, Difficulty};

/// Gradually calculate the difficulty attributes on maps of any mode.
///
/// Note that this type implements [`Iterator`]. On every call of
/// [`Iterator::next`], the next object will be processed and the
/// [`DifficultyAttributes`] will be updated and returned.
///
/// If you want to calculate performance attributes, use
/// [`GradualPerformance`] instead.
///
/// [`GradualPerformance`]: crate::GradualPerformance
// The Tap variant is the largest but also the most used one.
#[allow(clippy::large_enum_variant)]
pub enum GradualDifficulty {
    Tap(TapGradualDifficulty),
    Drum(DrumGradualDifficulty),
    Rain(RainGradualDifficulty),
    Keys(KeysGradualDifficulty),
}

impl GradualDifficulty {
    /// Create a [`GradualDifficulty`] for a map of any mode.
    pub fn new(difficulty: Difficulty, map: &Beatmap) -> Result<Self, ConvertError> {
        let mode = difficulty.get_mode().unwrap_or(map.mode);

        match mode {
            GameMode::Tap => TapGradualDifficulty::new(difficulty, map).map(Self::Tap),
            GameMode::Drum => DrumGradualDifficulty::new(difficulty, map).map(Self::Drum),
            GameMode::Rain => RainGradualDifficulty::new(difficulty, map).map(Self::Rain),
            GameMode::Keys => KeysGradualDifficulty::new(difficulty, map).map(Self::Keys),
        }
    }
}

impl Iterator for GradualDifficulty {
    type Item = DifficultyAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Tap(gradual) => gradual.next().map(DifficultyAttributes::Tap),
            Self::Drum(gradual) => gradual.next().map(DifficultyAttributes::Drum),
            Self::Rain(gradual) => gradual.next().map(DifficultyAttributes::Rain),
            Self::Keys(gradual) => gradual.next().map(DifficultyAttributes::Keys),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Tap(gradual) => gradual.size_hint(),
            Self::Drum(gradual) => gradual.size_hint(),
            Self::Rain(gradual) => gradual.size_hint(),
            Self::Keys(gradual) => gradual.size_hint(),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match self {
            Self::Tap(gradual) => gradual.nth(n).map(DifficultyAttributes::Tap),
            Self::Drum(gradual) => gradual.nth(n).map(DifficultyAttributes::Drum),
            Self::Rain(gradual) => gradual.nth(n).map(DifficultyAttributes::Rain),
            Self::Keys(gradual) => gradual.nth(n).map(DifficultyAttributes::Keys),
        }
    }
}

impl ExactSizeIterator for GradualDifficulty {
    fn len(&self) -> usize {
        match self {
            Self::Tap(gradual) => gradual.len(),
            Self::Drum(gradual) => gradual.len(),
            Self::Rain(gradual) => gradual.len(),
            Self::Keys(gradual) => gradual.len(),
        }
    }
}
