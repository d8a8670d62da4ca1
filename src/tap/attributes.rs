use serde::{Deserialize, Serialize};

use crate::{
    any::{DifficultyAttributes, PerformanceAttributes},
    model::mode::{ConvertError, GameMode},
};

use super::performance::TapPerformance;

/// The result of a difficulty calculation on a cursor mode map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TapDifficultyAttributes {
    /// The difficulty of the aim skill.
    pub aim: f64,
    /// The difficulty of the speed skill.
    pub speed: f64,
    /// The number of clickable objects weighted by difficulty.
    pub speed_note_count: f64,
    /// Weighted sum of aim strains.
    pub aim_difficult_strain_count: f64,
    /// Weighted sum of speed strains.
    pub speed_difficult_strain_count: f64,
    /// The approach rate.
    pub ar: f64,
    /// The great hit window.
    pub great_hit_window: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The amount of circles.
    pub n_circles: u32,
    /// The amount of sliders.
    pub n_sliders: u32,
    /// The amount of slider ticks and repeat points.
    pub n_slider_ticks: u32,
    /// The amount of spinners.
    pub n_spinners: u32,
    /// The final star rating.
    pub stars: f64,
    /// The maximum combo.
    pub max_combo: u32,
}

impl TapDifficultyAttributes {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// The amount of hitobjects.
    pub const fn n_objects(&self) -> u32 {
        self.n_circles + self.n_sliders + self.n_spinners
    }

    /// Returns a builder for performance calculation.
    pub fn performance<'a>(self) -> TapPerformance<'a> {
        self.into()
    }
}

/// The result of a performance calculation on a cursor mode map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TapPerformanceAttributes {
    /// The difficulty attributes that were used for the performance calculation.
    pub difficulty: TapDifficultyAttributes,
    /// The final performance points.
    pub pp: f64,
    /// The accuracy portion of the final pp.
    pub pp_acc: f64,
    /// The aim portion of the final pp.
    pub pp_aim: f64,
    /// The speed portion of the final pp.
    pub pp_speed: f64,
    /// Misses including an approximated amount of slider breaks.
    pub effective_miss_count: f64,
}

impl TapPerformanceAttributes {
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
    pub fn performance<'a>(self) -> TapPerformance<'a> {
        self.difficulty.into()
    }
}

impl From<TapPerformanceAttributes> for TapDifficultyAttributes {
    fn from(attrs: TapPerformanceAttributes) -> Self {
        attrs.difficulty
    }
}

impl TryFrom<DifficultyAttributes> for TapDifficultyAttributes {
    type Error = ConvertError;

    fn try_from(attrs: DifficultyAttributes) -> Result<Self, Self::Error> {
        if let DifficultyAttributes::Tap(attrs) = attrs {
            Ok(attrs)
        } else {
            Err(ConvertError::AttributeMismatch {
                expected: GameMode::Tap,
                actual: attrs.mode(),
            })
        }
    }
}

impl TryFrom<PerformanceAttributes> for TapPerformanceAttributes {
    type Error = ConvertError;

    fn try_from(attrs: PerformanceAttributes) -> Result<Self, Self::Error> {
        if let PerformanceAttributes::Tap(attrs) = attrs {
            Ok(attrs)
        } else {
            Err(ConvertError::AttributeMismatch {
                expected: GameMode::Tap,
                actual: attrs.difficulty_attributes().mode(),
            })
        }
    }
}
