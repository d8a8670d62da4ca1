use std::borrow::Cow;

use crate::{
    any::{Difficulty, GradualDifficulty, GradualPerformance, Performance},
    drum, keys, rain,
};

pub use self::{
    attributes::{BeatmapAttributes, BeatmapAttributesBuilder, HitWindows, ModsDependent},
    suspicious::TooSuspicious,
};

use super::{hit_object::HitObject, mode::ConvertError, mode::GameMode};

mod attributes;
mod suspicious;

/// The latest beatmap format version this crate is aware of.
pub const LATEST_FORMAT_VERSION: i32 = 14;

/// All beatmap data that is relevant for difficulty and performance
/// calculation.
///
/// Decoding beatmap files is the job of an external decoder; the calculators
/// only require the fields below.
#[derive(Clone, Debug, PartialEq)]
pub struct Beatmap {
    pub version: i32,
    pub is_convert: bool,
    pub mode: GameMode,

    pub stack_leniency: f32,

    // Difficulty settings
    pub ar: f32,
    pub cs: f32,
    pub hp: f32,
    pub od: f32,
    pub slider_multiplier: f64,
    pub slider_tick_rate: f64,

    /// The dominant beats per minute of the map.
    pub bpm: f64,

    pub breaks: Vec<BreakPeriod>,

    /// Hit objects sorted ascendingly by start time.
    pub hit_objects: Vec<HitObject>,
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            version: LATEST_FORMAT_VERSION,
            is_convert: false,
            mode: GameMode::Tap,
            stack_leniency: 0.7,
            ar: 5.0,
            cs: 5.0,
            hp: 5.0,
            od: 5.0,
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
            bpm: 120.0,
            breaks: Vec::new(),
            hit_objects: Vec::new(),
        }
    }
}

/// A break period of a beatmap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BreakPeriod {
    /// Start timestamp in milliseconds.
    pub start_time: f64,
    /// End timestamp in milliseconds.
    pub end_time: f64,
}

impl BreakPeriod {
    /// The duration of the break in milliseconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

impl Beatmap {
    /// Returns a [`BeatmapAttributesBuilder`] to calculate modified beatmap
    /// attributes.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new().map(self)
    }

    /// The beats per minute of the map.
    pub const fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Sum up the duration of all breaks (in milliseconds).
    pub fn total_break_time(&self) -> f64 {
        self.breaks.iter().map(BreakPeriod::duration).sum()
    }

    /// The interval between slider ticks in map-clock milliseconds.
    pub(crate) fn slider_tick_interval(&self) -> f64 {
        let beat_len = 60_000.0 / self.bpm.max(f64::EPSILON);

        beat_len / self.slider_tick_rate.max(f64::EPSILON)
    }

    /// Create a performance calculator for this [`Beatmap`].
    pub fn performance(&self) -> Performance<'_> {
        Performance::new(self)
    }

    /// Create a gradual difficulty calculator for this [`Beatmap`].
    pub fn gradual_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<GradualDifficulty, ConvertError> {
        GradualDifficulty::new(difficulty, self)
    }

    /// Create a gradual performance calculator for this [`Beatmap`].
    pub fn gradual_performance(
        &self,
        difficulty: Difficulty,
    ) -> Result<GradualPerformance, ConvertError> {
        GradualPerformance::new(difficulty, self)
    }

    /// Attempt to convert a [`Beatmap`] to the specified mode.
    pub fn convert(mut self, mode: GameMode) -> Result<Self, ConvertError> {
        self.convert_mut(mode)?;

        Ok(self)
    }

    /// Attempt to convert a [`&Beatmap`] to the specified mode.
    ///
    /// [`&Beatmap`]: Beatmap
    pub fn convert_ref(&self, mode: GameMode) -> Result<Cow<'_, Self>, ConvertError> {
        if self.mode == mode {
            return Ok(Cow::Borrowed(self));
        }

        let mut map = self.to_owned();
        map.convert_mut(mode)?;

        Ok(Cow::Owned(map))
    }

    /// Attempt to convert a [`&mut Beatmap`] to the specified mode.
    ///
    /// Only maps of the native [`GameMode::Tap`] mode can be converted.
    ///
    /// [`&mut Beatmap`]: Beatmap
    pub fn convert_mut(&mut self, mode: GameMode) -> Result<(), ConvertError> {
        if self.mode == mode {
            return Ok(());
        } else if self.is_convert {
            return Err(ConvertError::AlreadyConverted);
        } else if self.mode != GameMode::Tap {
            return Err(ConvertError::Convert {
                from: self.mode,
                to: mode,
            });
        }

        match mode {
            GameMode::Drum => drum::convert(self),
            GameMode::Rain => rain::convert(self),
            GameMode::Keys => keys::convert(self),
            GameMode::Tap => unreachable!(),
        }

        Ok(())
    }

    /// Check whether the hit objects appear too suspicious for further
    /// calculation.
    ///
    /// Sometimes a map isn't created for gameplay but rather to test the
    /// limits of the game or the calculators themselves. This scan is
    /// advisory; calculation still works on a flagged map, it may just be
    /// expensive.
    pub fn check_suspicion(&self) -> Result<(), TooSuspicious> {
        match TooSuspicious::new(self) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}
