use crate::{
    drum::{DrumDifficultyAttributes, DrumPerformance, DrumPerformanceAttributes},
    keys::{KeysDifficultyAttributes, KeysPerformance, KeysPerformanceAttributes},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
        mods::GameMods,
    },
    rain::{RainDifficultyAttributes, RainPerformance, RainPerformanceAttributes},
    tap::{TapDifficultyAttributes, TapPerformance, TapPerformanceAttributes},
    Difficulty,
};

use super::{attributes::PerformanceAttributes, score_state::ScoreState, DifficultyAttributes};

pub mod gradual;

/// Performance calculator on maps of any mode.
///
/// Create one through [`Performance::new`] from a [`Beatmap`] or from
/// previously calculated attributes, configure it through the builder
/// methods, then finish with [`calculate`].
///
/// If a map is given, difficulty attributes will be calculated internally
/// which is a costly operation. Hence, passing attributes should be prefered
/// whenever they are available for the same map and settings.
///
/// [`calculate`]: Performance::calculate
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Performance<'map> {
    Tap(TapPerformance<'map>),
    Drum(DrumPerformance<'map>),
    Rain(RainPerformance<'map>),
    Keys(KeysPerformance<'map>),
}

impl<'map> Performance<'map> {
    /// Create a new performance calculator based on the map's mode.
    pub fn new(map: &'map Beatmap) -> Self {
        match map.mode {
            GameMode::Tap => Self::Tap(TapPerformance::new(map)),
            GameMode::Drum => Self::Drum(DrumPerformance::new(map)),
            GameMode::Rain => Self::Rain(RainPerformance::new(map)),
            GameMode::Keys => Self::Keys(KeysPerformance::new(map)),
        }
    }

    pub(crate) fn from_attributes(attrs: DifficultyAttributes) -> Self {
        match attrs {
            DifficultyAttributes::Tap(attrs) => Self::Tap(attrs.into()),
            DifficultyAttributes::Drum(attrs) => Self::Drum(attrs.into()),
            DifficultyAttributes::Rain(attrs) => Self::Rain(attrs.into()),
            DifficultyAttributes::Keys(attrs) => Self::Keys(attrs.into()),
        }
    }

    /// Consume the performance calculator and calculate performance
    /// attributes for the given parameters.
    pub fn calculate(self) -> Result<PerformanceAttributes, ConvertError> {
        match self {
            Self::Tap(t) => t.calculate().map(PerformanceAttributes::Tap),
            Self::Drum(d) => d.calculate().map(PerformanceAttributes::Drum),
            Self::Rain(r) => r.calculate().map(PerformanceAttributes::Rain),
            Self::Keys(k) => k.calculate().map(PerformanceAttributes::Keys),
        }
    }

    /// Attempt to convert the map to the specified mode.
    ///
    /// Returns `Err(self)` if the conversion is incompatible or no beatmap is
    /// contained, i.e. if this [`Performance`] was created through attributes
    /// or [`generate_state`] was called.
    ///
    /// If the given mode should be ignored in case of an error, use
    /// [`mode_or_ignore`] instead.
    ///
    /// [`generate_state`]: Self::generate_state
    /// [`mode_or_ignore`]: Self::mode_or_ignore
    pub fn try_mode(self, mode: GameMode) -> Result<Self, Self> {
        match (self, mode) {
            (Self::Tap(t), _) => t.try_mode(mode).map_err(Self::Tap),
            (this @ Self::Drum(_), GameMode::Drum)
            | (this @ Self::Rain(_), GameMode::Rain)
            | (this @ Self::Keys(_), GameMode::Keys) => Ok(this),
            (this, _) => Err(this),
        }
    }

    /// Attempt to convert the map to the specified mode.
    ///
    /// If the conversion is incompatible or if the internal beatmap was
    /// already replaced with difficulty attributes, the map won't be
    /// modified.
    ///
    /// To see whether the given mode is incompatible or the internal beatmap
    /// was replaced, use [`try_mode`] instead.
    ///
    /// [`try_mode`]: Self::try_mode
    pub fn mode_or_ignore(self, mode: GameMode) -> Self {
        if let Self::Tap(tap) = self {
            tap.mode_or_ignore(mode)
        } else {
            self
        }
    }

    /// Specify mods.
    pub fn mods(self, mods: GameMods) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.mods(mods)),
            Self::Drum(d) => Self::Drum(d.mods(mods)),
            Self::Rain(r) => Self::Rain(r.mods(mods)),
            Self::Keys(k) => Self::Keys(k.mods(mods)),
        }
    }

    /// Use the specified settings of the given [`Difficulty`].
    pub fn difficulty(self, difficulty: Difficulty) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.difficulty(difficulty)),
            Self::Drum(d) => Self::Drum(d.difficulty(difficulty)),
            Self::Rain(r) => Self::Rain(r.difficulty(difficulty)),
            Self::Keys(k) => Self::Keys(k.difficulty(difficulty)),
        }
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    ///
    /// If you want to calculate the performance after every few objects,
    /// instead of using [`Performance`] multiple times with different
    /// `passed_objects`, you should use [`GradualPerformance`].
    ///
    /// [`GradualPerformance`]: crate::GradualPerformance
    pub fn passed_objects(self, passed_objects: u32) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.passed_objects(passed_objects)),
            Self::Drum(d) => Self::Drum(d.passed_objects(passed_objects)),
            Self::Rain(r) => Self::Rain(r.passed_objects(passed_objects)),
            Self::Keys(k) => Self::Keys(k.passed_objects(passed_objects)),
        }
    }

    /// Adjust the clock rate used in the calculation, overriding the rate
    /// derived from the mods.
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.clock_rate(clock_rate)),
            Self::Drum(d) => Self::Drum(d.clock_rate(clock_rate)),
            Self::Rain(r) => Self::Rain(r.clock_rate(clock_rate)),
            Self::Keys(k) => Self::Keys(k.clock_rate(clock_rate)),
        }
    }

    /// Override a beatmap's set AR.
    ///
    /// Only relevant for the cursor and the catcher mode.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn ar(self, ar: f32, with_mods: bool) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.ar(ar, with_mods)),
            Self::Rain(r) => Self::Rain(r.ar(ar, with_mods)),
            Self::Drum(_) | Self::Keys(_) => self,
        }
    }

    /// Override a beatmap's set OD.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods.
    pub fn od(self, od: f32, with_mods: bool) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.od(od, with_mods)),
            Self::Drum(d) => Self::Drum(d.od(od, with_mods)),
            Self::Rain(r) => Self::Rain(r.od(od, with_mods)),
            Self::Keys(k) => Self::Keys(k.od(od, with_mods)),
        }
    }

    /// Override a beatmap's set CS.
    ///
    /// Only relevant for the cursor and the catcher mode.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods.
    pub fn cs(self, cs: f32, with_mods: bool) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.cs(cs, with_mods)),
            Self::Rain(r) => Self::Rain(r.cs(cs, with_mods)),
            Self::Drum(_) | Self::Keys(_) => self,
        }
    }

    /// Override a beatmap's set HP.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods.
    pub fn hp(self, hp: f32, with_mods: bool) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.hp(hp, with_mods)),
            Self::Drum(d) => Self::Drum(d.hp(hp, with_mods)),
            Self::Rain(r) => Self::Rain(r.hp(hp, with_mods)),
            Self::Keys(k) => Self::Keys(k.hp(hp, with_mods)),
        }
    }

    /// Adjust patterns as if the HR mod is enabled.
    ///
    /// Only relevant for the catcher mode.
    pub fn hardrock_offsets(self, hardrock_offsets: bool) -> Self {
        if let Self::Rain(rain) = self {
            Self::Rain(rain.hardrock_offsets(hardrock_offsets))
        } else {
            self
        }
    }

    /// Whether the calculated attributes belong to a score on the current
    /// or the legacy client.
    ///
    /// Defaults to `true`.
    ///
    /// Only relevant for the cursor and the scrolling mode.
    pub fn lazer(self, lazer: bool) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.lazer(lazer)),
            Self::Keys(k) => Self::Keys(k.lazer(lazer)),
            Self::Drum(_) | Self::Rain(_) => self,
        }
    }

    /// Provide parameters through a [`ScoreState`].
    pub fn state(self, state: ScoreState) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.state(state)),
            Self::Drum(d) => Self::Drum(d.state(state)),
            Self::Rain(r) => Self::Rain(r.state(state)),
            Self::Keys(k) => Self::Keys(k.state(state)),
        }
    }

    /// Set the accuracy between `0.0` and `100.0`.
    pub fn accuracy(self, acc: f64) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.accuracy(acc)),
            Self::Drum(d) => Self::Drum(d.accuracy(acc)),
            Self::Rain(r) => Self::Rain(r.accuracy(acc)),
            Self::Keys(k) => Self::Keys(k.accuracy(acc)),
        }
    }

    /// Specify the amount of misses of a play.
    pub fn misses(self, misses: u32) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.misses(misses)),
            Self::Drum(d) => Self::Drum(d.misses(misses)),
            Self::Rain(r) => Self::Rain(r.misses(misses)),
            Self::Keys(k) => Self::Keys(k.misses(misses)),
        }
    }

    /// Specify the max combo of the play.
    ///
    /// Irrelevant for the scrolling mode.
    pub fn combo(self, combo: u32) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.combo(combo)),
            Self::Drum(d) => Self::Drum(d.combo(combo)),
            Self::Rain(r) => Self::Rain(r.combo(combo)),
            Self::Keys(_) => self,
        }
    }

    /// Specify how hitresults should be generated.
    ///
    /// Defaults to [`HitResultPriority::BestCase`].
    pub fn hitresult_priority(self, priority: HitResultPriority) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.hitresult_priority(priority)),
            Self::Drum(d) => Self::Drum(d.hitresult_priority(priority)),
            Self::Keys(k) => Self::Keys(k.hitresult_priority(priority)),
            Self::Rain(_) => self,
        }
    }

    /// Specify the amount of hit slider ticks.
    ///
    /// Only relevant for the cursor mode.
    pub fn slider_tick_hits(self, slider_tick_hits: u32) -> Self {
        if let Self::Tap(tap) = self {
            Self::Tap(tap.slider_tick_hits(slider_tick_hits))
        } else {
            self
        }
    }

    /// Specify the amount of hit slider ends.
    ///
    /// Only relevant for the cursor mode.
    pub fn slider_end_hits(self, slider_end_hits: u32) -> Self {
        if let Self::Tap(tap) = self {
            Self::Tap(tap.slider_end_hits(slider_end_hits))
        } else {
            self
        }
    }

    /// Specify the amount of 300s of a play.
    ///
    /// For the catcher mode this repesents the amount of caught fruits.
    pub fn n300(self, n300: u32) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.n300(n300)),
            Self::Drum(d) => Self::Drum(d.n300(n300)),
            Self::Rain(r) => Self::Rain(r.fruits(n300)),
            Self::Keys(k) => Self::Keys(k.n300(n300)),
        }
    }

    /// Specify the amount of 100s of a play.
    ///
    /// For the catcher mode this repesents the amount of caught droplets.
    pub fn n100(self, n100: u32) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.n100(n100)),
            Self::Drum(d) => Self::Drum(d.n100(n100)),
            Self::Rain(r) => Self::Rain(r.droplets(n100)),
            Self::Keys(k) => Self::Keys(k.n100(n100)),
        }
    }

    /// Specify the amount of 50s of a play.
    ///
    /// Irrelevant for the percussion mode. For the catcher mode this
    /// repesents the amount of caught tiny droplets.
    pub fn n50(self, n50: u32) -> Self {
        match self {
            Self::Tap(t) => Self::Tap(t.n50(n50)),
            Self::Drum(_) => self,
            Self::Rain(r) => Self::Rain(r.tiny_droplets(n50)),
            Self::Keys(k) => Self::Keys(k.n50(n50)),
        }
    }

    /// Specify the amount of katus of a play.
    ///
    /// Only relevant for the catcher mode for which it represents the amount
    /// of tiny droplet misses and the scrolling mode for which it repesents
    /// the amount of n200.
    pub fn n_katu(self, n_katu: u32) -> Self {
        match self {
            Self::Tap(_) | Self::Drum(_) => self,
            Self::Rain(r) => Self::Rain(r.tiny_droplet_misses(n_katu)),
            Self::Keys(k) => Self::Keys(k.n_katu(n_katu)),
        }
    }

    /// Specify the amount of gekis of a play.
    ///
    /// Only relevant for the scrolling mode for which it repesents the
    /// amount of n320.
    pub fn n_geki(self, n_geki: u32) -> Self {
        match self {
            Self::Tap(_) | Self::Drum(_) | Self::Rain(_) => self,
            Self::Keys(k) => Self::Keys(k.n_geki(n_geki)),
        }
    }

    /// Create the [`ScoreState`] that will be used for performance
    /// calculation.
    pub fn generate_state(&mut self) -> Result<ScoreState, ConvertError> {
        match self {
            Self::Tap(t) => t.generate_state(),
            Self::Drum(d) => d.generate_state(),
            Self::Rain(r) => r.generate_state(),
            Self::Keys(k) => k.generate_state(),
        }
    }
}

/// While generating remaining hitresults, decide how they should be
/// distributed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum HitResultPriority {
    /// Prioritize good hitresults over bad ones.
    #[default]
    BestCase,
    /// Prioritize bad hitresults over good ones.
    WorstCase,
    /// Skip any optimization and fill in hitresults as fast as possible.
    ///
    /// The resulting distribution may match the accuracy only loosely.
    Fastest,
}

impl HitResultPriority {
    pub(crate) const DEFAULT: Self = Self::BestCase;
}

impl<'map> From<&'map Beatmap> for Performance<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::new(map)
    }
}

impl From<DifficultyAttributes> for Performance<'_> {
    fn from(attrs: DifficultyAttributes) -> Self {
        Self::from_attributes(attrs)
    }
}

impl From<PerformanceAttributes> for Performance<'_> {
    fn from(attrs: PerformanceAttributes) -> Self {
        Self::from_attributes(attrs.into())
    }
}

macro_rules! impl_from_mode {
    ( $mode:ident: $performance:ident, $diff_attrs:ident, $perf_attrs:ident ) => {
        impl<'map> From<$performance<'map>> for Performance<'map> {
            fn from(performance: $performance<'map>) -> Self {
                Self::$mode(performance)
            }
        }

        impl From<$diff_attrs> for Performance<'_> {
            fn from(attrs: $diff_attrs) -> Self {
                Self::$mode(attrs.into())
            }
        }

        impl From<$perf_attrs> for Performance<'_> {
            fn from(attrs: $perf_attrs) -> Self {
                Self::$mode(attrs.into())
            }
        }
    };
}

impl_from_mode!(Tap: TapPerformance, TapDifficultyAttributes, TapPerformanceAttributes);
impl_from_mode!(Drum: DrumPerformance, DrumDifficultyAttributes, DrumPerformanceAttributes);
impl_from_mode!(Rain: RainPerformance, RainDifficultyAttributes, RainPerformanceAttributes);
impl_from_mode!(Keys: KeysPerformance, KeysDifficultyAttributes, KeysPerformanceAttributes);

#[cfg(test)]
mod tests {
    use crate::{
        any::{DifficultyAttributes, PerformanceAttributes},
        drum::DrumDifficultyAttributes,
        keys::KeysPerformanceAttributes,
        model::beatmap::Beatmap,
        tap::TapDifficultyAttributes,
    };

    use super::*;

    #[test]
    fn create() {
        let map = Beatmap::default();

        let _ = Performance::new(&map);
        let _ = Performance::from(&map);

        let _ = Performance::from(TapDifficultyAttributes::default());
        let _ = Performance::from(DrumDifficultyAttributes::default());
        let _ = Performance::from(KeysPerformanceAttributes::default());

        let _ = Performance::from(DifficultyAttributes::Tap(TapDifficultyAttributes::default()));
        let _ = Performance::from(PerformanceAttributes::Keys(
            KeysPerformanceAttributes::default(),
        ));

        let _ = DifficultyAttributes::Drum(DrumDifficultyAttributes::default()).performance();
    }

    #[test]
    fn mode_switch_requires_convertible_map() {
        let map = Beatmap::default();

        let tap = Performance::new(&map);
        assert!(matches!(
            tap.try_mode(GameMode::Keys),
            Ok(Performance::Keys(_))
        ));

        let from_attrs = Performance::from(DrumDifficultyAttributes::default());
        assert!(from_attrs.try_mode(GameMode::Keys).is_err());
    }
}
