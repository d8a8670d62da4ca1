use serde::{Deserialize, Serialize};

use crate::{
    drum::{DrumDifficultyAttributes, DrumPerformanceAttributes},
    keys::{KeysDifficultyAttributes, KeysPerformanceAttributes},
    model::mode::GameMode,
    rain::{RainDifficultyAttributes, RainPerformanceAttributes},
    tap::{TapDifficultyAttributes, TapPerformanceAttributes},
};

use super::performance::Performance;

/// The result of a difficulty calculation based on the mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DifficultyAttributes {
    /// Difficulty calculation result of the cursor mode.
    Tap(TapDifficultyAttributes),
    /// Difficulty calculation result of the percussion mode.
    Drum(DrumDifficultyAttributes),
    /// Difficulty calculation result of the catcher mode.
    Rain(RainDifficultyAttributes),
    /// Difficulty calculation result of the scrolling mode.
    Keys(KeysDifficultyAttributes),
}

impl DifficultyAttributes {
    /// The star value.
    pub const fn stars(&self) -> f64 {
        match self {
            Self::Tap(attrs) => attrs.stars,
            Self::Drum(attrs) => attrs.stars,
            Self::Rain(attrs) => attrs.stars,
            Self::Keys(attrs) => attrs.stars,
        }
    }

    /// The maximum combo of the map.
    pub const fn max_combo(&self) -> u32 {
        match self {
            Self::Tap(attrs) => attrs.max_combo,
            Self::Drum(attrs) => attrs.max_combo,
            Self::Rain(attrs) => attrs.max_combo(),
            Self::Keys(attrs) => attrs.max_combo,
        }
    }

    /// The mode the attributes were calculated for.
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::Tap(_) => GameMode::Tap,
            Self::Drum(_) => GameMode::Drum,
            Self::Rain(_) => GameMode::Rain,
            Self::Keys(_) => GameMode::Keys,
        }
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> Performance<'a> {
        Performance::from_attributes(self)
    }
}

/// The result of a performance calculation based on the mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PerformanceAttributes {
    /// Performance calculation result of the cursor mode.
    Tap(TapPerformanceAttributes),
    /// Performance calculation result of the percussion mode.
    Drum(DrumPerformanceAttributes),
    /// Performance calculation result of the catcher mode.
    Rain(RainPerformanceAttributes),
    /// Performance calculation result of the scrolling mode.
    Keys(KeysPerformanceAttributes),
}

impl PerformanceAttributes {
    /// The pp value.
    pub const fn pp(&self) -> f64 {
        match self {
            Self::Tap(attrs) => attrs.pp,
            Self::Drum(attrs) => attrs.pp,
            Self::Rain(attrs) => attrs.pp,
            Self::Keys(attrs) => attrs.pp,
        }
    }

    /// The star value.
    pub const fn stars(&self) -> f64 {
        match self {
            Self::Tap(attrs) => attrs.difficulty.stars,
            Self::Drum(attrs) => attrs.difficulty.stars,
            Self::Rain(attrs) => attrs.difficulty.stars,
            Self::Keys(attrs) => attrs.difficulty.stars,
        }
    }

    /// The maximum combo of the map.
    pub const fn max_combo(&self) -> u32 {
        match self {
            Self::Tap(attrs) => attrs.difficulty.max_combo,
            Self::Drum(attrs) => attrs.difficulty.max_combo,
            Self::Rain(attrs) => attrs.difficulty.max_combo(),
            Self::Keys(attrs) => attrs.difficulty.max_combo,
        }
    }

    /// Difficulty attributes that were used for the performance calculation.
    pub fn difficulty_attributes(&self) -> DifficultyAttributes {
        match self {
            Self::Tap(attrs) => DifficultyAttributes::Tap(attrs.difficulty.clone()),
            Self::Drum(attrs) => DifficultyAttributes::Drum(attrs.difficulty.clone()),
            Self::Rain(attrs) => DifficultyAttributes::Rain(attrs.difficulty.clone()),
            Self::Keys(attrs) => DifficultyAttributes::Keys(attrs.difficulty.clone()),
        }
    }
}

impl From<PerformanceAttributes> for DifficultyAttributes {
    fn from(attrs: PerformanceAttributes) -> Self {
        match attrs {
            PerformanceAttributes::Tap(attrs) => Self::Tap(attrs.difficulty),
            PerformanceAttributes::Drum(attrs) => Self::Drum(attrs.difficulty),
            PerformanceAttributes::Rain(attrs) => Self::Rain(attrs.difficulty),
            PerformanceAttributes::Keys(attrs) => Self::Keys(attrs.difficulty),
        }
    }
}
