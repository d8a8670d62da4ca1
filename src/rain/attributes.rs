use serde::{Deserialize, Serialize};

use crate::{
    any::{DifficultyAttributes, PerformanceAttributes},
    model::mode::{ConvertError, GameMode},
};

use super::performance::RainPerformance;

/// The result of a difficulty calculation on a catcher mode map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RainDifficultyAttributes {
    /// The difficulty of the movement skill.
    pub movement: f64,
    /// The approach rate.
    pub ar: f64,
    /// The amount of fruits.
    pub n_fruits: u32,
    /// The amount of droplets.
    pub n_droplets: u32,
    /// The amount of tiny droplets.
    pub n_tiny_droplets: u32,
    /// The final star rating.
    pub stars: f64,
    /// Whether the map was a convert i.e. a cursor mode map.
    pub is_convert: bool,
}

impl RainDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.n_fruits + self.n_droplets
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> RainPerformance<'a> {
        self.into()
    }
}

/// The result of a performance calculation on a catcher mode map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RainPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation.
    pub difficulty: RainDifficultyAttributes,
    /// The final performance points.
    pub pp: f64,
}

impl RainPerformanceAttributes {
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
        self.difficulty.max_combo()
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> RainPerformance<'a> {
        self.difficulty.into()
    }
}

impl From<RainPerformanceAttributes> for RainDifficultyAttributes {
    fn from(attrs: RainPerformanceAttributes) -> Self {
        attrs.difficulty
    }
}

impl TryFrom<DifficultyAttributes> for RainDifficultyAttributes {
    type Error = ConvertError;

    fn try_from(attrs: DifficultyAttributes) -> Result<Self, Self::Error> {
        if let DifficultyAttributes::Rain(attrs) = attrs {
            Ok(attrs)
        } else {
            Err(ConvertError::AttributeMismatch {
                expected: GameMode::Rain,
                actual: attrs.mode(),
            })
        }
    }
}

impl TryFrom<PerformanceAttributes> for RainPerformanceAttributes {
    type Error = ConvertError;

    fn try_from(attrs: PerformanceAttributes) -> Result<Self, Self::Error> {
        if let PerformanceAttributes::Rain(attrs) = attrs {
            Ok(attrs)
        } else {
            Err(ConvertError::AttributeMismatch {
                expected: GameMode::Rain,
                actual: attrs.difficulty_attributes().mode(),
            })
        }
    }
}
