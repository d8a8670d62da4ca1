use serde::{Deserialize, Serialize};

use crate::{
    any::{DifficultyAttributes, PerformanceAttributes},
    model::mode::{ConvertError, GameMode},
};

use super::performance::DrumPerformance;

/// The result of a difficulty calculation on a percussion mode map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrumDifficultyAttributes {
    /// The difficulty of the stamina skill.
    pub stamina: f64,
    /// The difficulty of the rhythm skill.
    pub rhythm: f64,
    /// The great hit window.
    pub great_hit_window: f64,
    /// The ok hit window.
    pub ok_hit_window: f64,
    /// The final star rating.
    pub stars: f64,
    /// The maximum combo.
    pub max_combo: u32,
    /// Whether the map was a convert i.e. a cursor mode map.
    pub is_convert: bool,
}

impl DrumDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> DrumPerformance<'a> {
        self.into()
    }
}

/// The result of a performance calculation on a percussion mode map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrumPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation.
    pub difficulty: DrumDifficultyAttributes,
    /// The final performance points.
    pub pp: f64,
    /// The accuracy portion of the final pp.
    pub pp_acc: f64,
    /// The strain portion of the final pp.
    pub pp_difficulty: f64,
    /// Scaled miss count based on total hits.
    pub effective_miss_count: f64,
}

impl DrumPerformanceAttributes {
    /// Return the star value.
    pub const fn stars(&self) -> f64 {
        self.difficulty.stars
    }

    /// Return the performance point value.
    pub const fn pp(&self) -> f64 {
        self.pp
    }

    /// Return the maximum combo of the map.
    pub const fn max_combo(&self) -> u32 {
        self.difficulty.max_combo
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> DrumPerformance<'a> {
        self.difficulty.into()
    }
}

impl From<DrumPerformanceAttributes> for DrumDifficultyAttributes {
    fn from(attrs: DrumPerformanceAttributes) -> Self {
        attrs.difficulty
    }
}

impl TryFrom<DifficultyAttributes> for DrumDifficultyAttributes {
    type Error = ConvertError;

    fn try_from(attrs: DifficultyAttributes) -> Result<Self, Self::Error> {
        if let DifficultyAttributes::Drum(attrs) = attrs {
            Ok(attrs)
        } else {
            Err(ConvertError::AttributeMismatch {
                expected: GameMode::Drum,
                actual: attrs.mode(),
            })
        }
    }
}

impl TryFrom<PerformanceAttributes> for DrumPerformanceAttributes {
    type Error = ConvertError;

    fn try_from(attrs: PerformanceAttributes) -> Result<Self, Self::Error> {
        if let PerformanceAttributes::Drum(attrs) = attrs {
            Ok(attrs)
        } else {
            Err(ConvertError::AttributeMismatch {
                expected: GameMode::Drum,
                actual: attrs.difficulty_attributes().mode(),
            })
        }
    }
}
