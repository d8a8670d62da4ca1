use serde::{Deserialize, Serialize};

use crate::{
    any::{DifficultyAttributes, PerformanceAttributes},
    model::mode::{ConvertError, GameMode},
};

use super::performance::KeysPerformance;

/// The result of a difficulty calculation on a scrolling mode map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeysDifficultyAttributes {
    /// The final star rating.
    pub stars: f64,
    /// The perceived hit window for a great hit inclusive of rate-adjusting
    /// mods.
    pub hit_window: f64,
    /// The amount of hit objects in the map.
    pub n_objects: u32,
    /// The amount of hold notes in the map.
    pub n_hold_notes: u32,
    /// The maximum achievable combo.
    pub max_combo: u32,
    /// Whether the map was a convert i.e. a cursor mode map.
    pub is_convert: bool,
}

impl KeysDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Return the amount of hit objects.
    pub const fn n_objects(&self) -> u32 {
        self.n_objects
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> KeysPerformance<'a> {
        self.into()
    }
}

/// The result of a performance calculation on a scrolling mode map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeysPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation.
    pub difficulty: KeysDifficultyAttributes,
    /// The final performance points.
    pub pp: f64,
    /// The difficulty portion of the final pp.
    pub pp_difficulty: f64,
}

impl KeysPerformanceAttributes {
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
    pub fn performance<'a>(self) -> KeysPerformance<'a> {
        self.difficulty.into()
    }
}

impl From<KeysPerformanceAttributes> for KeysDifficultyAttributes {
    fn from(attrs: KeysPerformanceAttributes) -> Self {
        attrs.difficulty
    }
}

impl TryFrom<DifficultyAttributes> for KeysDifficultyAttributes {
    type Error = ConvertError;

    fn try_from(attrs: DifficultyAttributes) -> Result<Self, Self::Error> {
        if let DifficultyAttributes::Keys(attrs) = attrs {
            Ok(attrs)
        } else {
            Err(ConvertError::AttributeMismatch {
                expected: GameMode::Keys,
                actual: attrs.mode(),
            })
        }
    }
}

impl TryFrom<PerformanceAttributes> for KeysPerformanceAttributes {
    type Error = ConvertError;

    fn try_from(attrs: PerformanceAttributes) -> Result<Self, Self::Error> {
        if let PerformanceAttributes::Keys(attrs) = attrs {
            Ok(attrs)
        } else {
            Err(ConvertError::AttributeMismatch {
                expected: GameMode::Keys,
                actual: attrs.difficulty_attributes().mode(),
            })
        }
    }
}
