use crate::{
    drum, keys,
    model::{
        beatmap::{Beatmap, ModsDependent},
        mode::{ConvertError, GameMode},
        mods::GameMods,
    },
    rain, tap,
};

use super::{attributes::DifficultyAttributes, Strains};

pub mod gradual;
pub(crate) mod object;
pub(crate) mod skills;

/// Difficulty calculator on maps of any mode.
///
/// Set up the configuration through the builder methods, then call
/// [`calculate`] with the map to process.
///
/// [`calculate`]: Difficulty::calculate
#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct Difficulty {
    mods: GameMods,
    mode: Option<GameMode>,
    passed_objects: Option<u32>,
    clock_rate: Option<f64>,
    ar: Option<ModsDependent>,
    od: Option<ModsDependent>,
    cs: Option<ModsDependent>,
    hp: Option<ModsDependent>,
    hardrock_offsets: Option<bool>,
    lazer: Option<bool>,
}

impl Difficulty {
    /// Create a new difficulty calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify mods.
    pub fn mods(self, mods: GameMods) -> Self {
        Self { mods, ..self }
    }

    /// Specify the mode to calculate for.
    ///
    /// If the map's mode differs, it will be converted first; incompatible
    /// conversions make [`calculate`] fail.
    ///
    /// [`calculate`]: Difficulty::calculate
    pub fn mode(self, mode: GameMode) -> Self {
        Self {
            mode: Some(mode),
            ..self
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub fn passed_objects(self, passed_objects: u32) -> Self {
        Self {
            passed_objects: Some(passed_objects),
            ..self
        }
    }

    /// Adjust the clock rate used in the calculation, overriding the rate
    /// derived from the mods.
    ///
    /// If none is specified, the mods' rate is used, i.e. 1.5 for DT, 0.75
    /// for HT, and 1.0 otherwise.
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Override a beatmap's set AR.
    ///
    /// `with_mods` determines if the given value should be used before or
    /// after accounting for mods.
    pub fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: Some(ModsDependent {
                value: ar,
                with_mods,
            }),
            ..self
        }
    }

    /// Override a beatmap's set OD.
    ///
    /// `with_mods` determines if the given value should be used before or
    /// after accounting for mods.
    pub fn od(self, od: f32, with_mods: bool) -> Self {
        Self {
            od: Some(ModsDependent {
                value: od,
                with_mods,
            }),
            ..self
        }
    }

    /// Override a beatmap's set CS.
    ///
    /// `with_mods` determines if the given value should be used before or
    /// after accounting for mods.
    pub fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: Some(ModsDependent {
                value: cs,
                with_mods,
            }),
            ..self
        }
    }

    /// Override a beatmap's set HP.
    ///
    /// `with_mods` determines if the given value should be used before or
    /// after accounting for mods.
    pub fn hp(self, hp: f32, with_mods: bool) -> Self {
        Self {
            hp: Some(ModsDependent {
                value: hp,
                with_mods,
            }),
            ..self
        }
    }

    /// Whether the alternate hardrock spatial transform should be applied,
    /// overriding what the mods specify.
    ///
    /// Only relevant for [`GameMode::Tap`] and [`GameMode::Rain`].
    pub fn hardrock_offsets(self, hardrock_offsets: bool) -> Self {
        Self {
            hardrock_offsets: Some(hardrock_offsets),
            ..self
        }
    }

    /// Whether the calculated attributes belong to a lazer or stable score.
    ///
    /// Defaults to `true`. Modes that make no difference between the two
    /// silently ignore this.
    pub fn lazer(self, lazer: bool) -> Self {
        Self {
            lazer: Some(lazer),
            ..self
        }
    }

    /// Perform the difficulty calculation.
    ///
    /// The returned attributes depend on the resolved mode.
    pub fn calculate(&self, map: &Beatmap) -> Result<DifficultyAttributes, ConvertError> {
        match self.resolve_mode(map) {
            GameMode::Tap => tap::difficulty(self, map).map(DifficultyAttributes::Tap),
            GameMode::Drum => drum::difficulty(self, map).map(DifficultyAttributes::Drum),
            GameMode::Rain => rain::difficulty(self, map).map(DifficultyAttributes::Rain),
            GameMode::Keys => keys::difficulty(self, map).map(DifficultyAttributes::Keys),
        }
    }

    /// Perform the difficulty calculation but instead of evaluating the
    /// skill strains, return them as is.
    ///
    /// Suitable to plot the difficulty of a map over time.
    pub fn strains(&self, map: &Beatmap) -> Result<Strains, ConvertError> {
        match self.resolve_mode(map) {
            GameMode::Tap => tap::strains(self, map).map(Strains::Tap),
            GameMode::Drum => drum::strains(self, map).map(Strains::Drum),
            GameMode::Rain => rain::strains(self, map).map(Strains::Rain),
            GameMode::Keys => keys::strains(self, map).map(Strains::Keys),
        }
    }

    fn resolve_mode(&self, map: &Beatmap) -> GameMode {
        self.mode.unwrap_or(map.mode)
    }

    pub(crate) const fn get_mods(&self) -> &GameMods {
        &self.mods
    }

    pub(crate) const fn get_mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub(crate) fn get_clock_rate(&self) -> f64 {
        self.clock_rate
            .unwrap_or_else(|| self.mods.clock_rate().unwrap_or(1.0))
    }

    pub(crate) fn get_passed_objects(&self) -> usize {
        self.passed_objects.map_or(usize::MAX, |n| n as usize)
    }

    pub(crate) fn get_hardrock_offsets(&self) -> bool {
        self.hardrock_offsets
            .unwrap_or_else(|| self.mods.hardrock_offsets())
    }

    pub(crate) fn get_lazer(&self) -> bool {
        self.lazer.unwrap_or(true)
    }

    /// Resolve the map's attributes with this configuration applied.
    pub(crate) fn map_attributes(
        &self,
        map: &Beatmap,
    ) -> crate::model::beatmap::BeatmapAttributes {
        let mut builder = map.attributes().mods(self.mods.clone()).lazer(self.get_lazer());

        if let Some(clock_rate) = self.clock_rate {
            builder = builder.clock_rate(clock_rate);
        }

        if let Some(ar) = self.ar {
            builder = builder.ar(ar.value, ar.with_mods);
        }

        if let Some(od) = self.od {
            builder = builder.od(od.value, od.with_mods);
        }

        if let Some(cs) = self.cs {
            builder = builder.cs(cs.value, cs.with_mods);
        }

        if let Some(hp) = self.hp {
            builder = builder.hp(hp.value, hp.with_mods);
        }

        builder.build()
    }
}
