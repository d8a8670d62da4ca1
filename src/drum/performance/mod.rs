use std::cmp;

use crate::{
    any::{Difficulty, HitResultPriority, ScoreState},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
        mods::GameMods,
    },
    tap::TapPerformance,
    util::map_or_attrs::MapOrAttrs,
};

use super::attributes::{DrumDifficultyAttributes, DrumPerformanceAttributes};

pub mod gradual;

/// Performance calculator on percussion mode maps.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct DrumPerformance<'map> {
    pub(crate) map_or_attrs: MapOrAttrs<'map, DrumDifficultyAttributes>,
    pub(crate) difficulty: Difficulty,
    pub(crate) acc: Option<f64>,
    pub(crate) combo: Option<u32>,
    pub(crate) n300: Option<u32>,
    pub(crate) n100: Option<u32>,
    pub(crate) misses: Option<u32>,
    pub(crate) hitresult_priority: HitResultPriority,
}

impl<'map> DrumPerformance<'map> {
    /// Create a new performance calculator for percussion mode maps.
    pub fn new(map: &'map Beatmap) -> Self {
        map.into()
    }

    /// Specify mods.
    pub fn mods(mut self, mods: GameMods) -> Self {
        self.difficulty = self.difficulty.mods(mods);

        self
    }

    /// Use the specified settings of the given [`Difficulty`].
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;

        self
    }

    /// Amount of passed objects for partial plays, e.g. a fail.
    pub fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.difficulty = self.difficulty.passed_objects(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    pub fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.difficulty = self.difficulty.clock_rate(clock_rate);

        self
    }

    /// Override a beatmap's set OD.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn od(mut self, od: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.od(od, with_mods);

        self
    }

    /// Override a beatmap's set HP.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods.
    pub fn hp(mut self, hp: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.hp(hp, with_mods);

        self
    }

    /// Set the accuracy between `0.0` and `100.0`.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc.clamp(0.0, 100.0) / 100.0);

        self
    }

    /// Specify the max combo of the play.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the amount of greats of a play.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of oks of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of misses of a play.
    pub const fn misses(mut self, misses: u32) -> Self {
        self.misses = Some(misses);

        self
    }

    /// Specify how hitresults should be generated when they're not given
    /// explicitly.
    ///
    /// Defaults to [`HitResultPriority::BestCase`].
    pub const fn hitresult_priority(mut self, priority: HitResultPriority) -> Self {
        self.hitresult_priority = priority;

        self
    }

    /// Provide parameters through a [`ScoreState`].
    #[allow(clippy::needless_pass_by_value)]
    pub fn state(mut self, state: ScoreState) -> Self {
        self.combo = Some(state.max_combo);
        self.n300 = Some(state.n300);
        self.n100 = Some(state.n100);
        self.misses = Some(state.misses);

        self
    }

    /// Create the [`ScoreState`] that will be used for performance calculation.
    pub fn generate_state(&mut self) -> Result<ScoreState, ConvertError> {
        let attrs = match self.map_or_attrs {
            MapOrAttrs::Map(ref map) => {
                let attrs = crate::drum::difficulty(&self.difficulty, map)?;

                self.map_or_attrs.insert_attrs(attrs)
            }
            MapOrAttrs::Attrs(ref attrs) => attrs,
        };

        let n_objects = cmp::min(
            self.difficulty.get_passed_objects() as u32,
            attrs.max_combo,
        );
        let misses = self.misses.map_or(0, |n| cmp::min(n, n_objects));
        let n_remaining = n_objects - misses;

        let mut n300 = self.n300.map_or(0, |n| cmp::min(n, n_remaining));
        let mut n100 = self.n100.map_or(0, |n| cmp::min(n, n_remaining));

        if let Some(acc) = self.acc {
            match (self.n300, self.n100) {
                (Some(_), Some(_)) => {
                    let remaining = n_remaining.saturating_sub(n300 + n100);

                    match self.hitresult_priority {
                        HitResultPriority::BestCase => n300 += remaining,
                        HitResultPriority::WorstCase | HitResultPriority::Fastest => {
                            n100 += remaining;
                        }
                    }
                }
                (None, Some(_)) => n300 = n_remaining.saturating_sub(n100),
                (Some(_), None) => n100 = n_remaining.saturating_sub(n300),
                // A great weighs 2 and an ok 1, so turning a great into an
                // ok costs a single unit.
                (None, None) => {
                    let target = (acc * f64::from(2 * n_objects)).round() as u32;
                    n100 = cmp::min((2 * n_remaining).saturating_sub(target), n_remaining);
                    n300 = n_remaining - n100;
                }
            }
        } else {
            let remaining = n_remaining.saturating_sub(n300 + n100);

            match (self.n300, self.n100) {
                (None, _) => n300 += remaining,
                (_, None) => n100 += remaining,
                _ => match self.hitresult_priority {
                    HitResultPriority::BestCase => n300 += remaining,
                    HitResultPriority::WorstCase | HitResultPriority::Fastest => n100 += remaining,
                },
            }
        }

        let max_combo = self.combo.map_or_else(
            || n_remaining,
            |combo| cmp::min(combo, attrs.max_combo),
        );

        Ok(ScoreState {
            max_combo,
            slider_tick_hits: 0,
            slider_end_hits: 0,
            n_geki: 0,
            n_katu: 0,
            n300,
            n100,
            n50: 0,
            misses,
        })
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(mut self) -> Result<DrumPerformanceAttributes, ConvertError> {
        let state = self.generate_state()?;

        let attrs = match self.map_or_attrs {
            MapOrAttrs::Attrs(attrs) => attrs,
            MapOrAttrs::Map(_) => unreachable!("generate_state inserts attrs"),
        };

        let inner = DrumPerformanceInner {
            mods: self.difficulty.get_mods().clone(),
            attrs,
            state,
        };

        Ok(inner.calculate())
    }

    pub(crate) fn from_map_or_attrs(
        map_or_attrs: MapOrAttrs<'map, DrumDifficultyAttributes>,
    ) -> Self {
        Self {
            map_or_attrs,
            difficulty: Difficulty::new(),
            acc: None,
            combo: None,
            n300: None,
            n100: None,
            misses: None,
            hitresult_priority: HitResultPriority::DEFAULT,
        }
    }
}

impl<'map> From<&'map Beatmap> for DrumPerformance<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::from_map_or_attrs(MapOrAttrs::Map(std::borrow::Cow::Borrowed(map)))
    }
}

impl From<DrumDifficultyAttributes> for DrumPerformance<'_> {
    fn from(attrs: DrumDifficultyAttributes) -> Self {
        Self::from_map_or_attrs(MapOrAttrs::Attrs(attrs))
    }
}

impl From<DrumPerformanceAttributes> for DrumPerformance<'_> {
    fn from(attrs: DrumPerformanceAttributes) -> Self {
        attrs.difficulty.into()
    }
}

impl<'map> TryFrom<TapPerformance<'map>> for DrumPerformance<'map> {
    type Error = TapPerformance<'map>;

    /// Try to create a [`DrumPerformance`] through a [`TapPerformance`].
    ///
    /// Returns `Err` if the calculator does not contain a convertible
    /// beatmap, i.e. if it was constructed through attributes or
    /// [`TapPerformance::generate_state`] was called.
    fn try_from(mut tap: TapPerformance<'map>) -> Result<Self, Self::Error> {
        let MapOrAttrs::Map(map) = tap.map_or_attrs else {
            return Err(tap);
        };

        if !matches!(map.mode, GameMode::Tap | GameMode::Drum) {
            tap.map_or_attrs = MapOrAttrs::Map(map);

            return Err(tap);
        }

        let TapPerformance {
            map_or_attrs: _,
            difficulty,
            acc,
            combo,
            slider_tick_hits: _,
            slider_end_hits: _,
            n300,
            n100,
            n50: _,
            misses,
            hitresult_priority,
        } = tap;

        Ok(Self {
            map_or_attrs: MapOrAttrs::Map(map),
            difficulty,
            acc,
            combo,
            n300,
            n100,
            misses,
            hitresult_priority,
        })
    }
}

struct DrumPerformanceInner {
    attrs: DrumDifficultyAttributes,
    mods: GameMods,
    state: ScoreState,
}

impl DrumPerformanceInner {
    const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.1;

    fn calculate(self) -> DrumPerformanceAttributes {
        let total_hits = f64::from(self.state.n300 + self.state.n100 + self.state.misses);

        if total_hits == 0.0 {
            return DrumPerformanceAttributes {
                difficulty: self.attrs,
                ..Default::default()
            };
        }

        let acc = f64::from(2 * self.state.n300 + self.state.n100) / (2.0 * total_hits);
        let effective_miss_count = f64::from(self.state.misses);

        let mut multiplier = Self::PERFORMANCE_BASE_MULTIPLIER;

        if self.mods.nf() {
            multiplier *= 0.9;
        }

        if self.mods.hd() {
            multiplier *= 1.1;
        }

        let diff_value = self.difficulty_value(total_hits, acc, effective_miss_count);
        let acc_value = self.acc_value(total_hits, acc);

        let pp = (diff_value.powf(1.1) + acc_value.powf(1.1)).powf(1.0 / 1.1) * multiplier;

        DrumPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_acc: acc_value,
            pp_difficulty: diff_value,
            effective_miss_count,
        }
    }

    fn difficulty_value(&self, total_hits: f64, acc: f64, effective_miss_count: f64) -> f64 {
        let mut diff_value =
            (5.0 * (self.attrs.stars / 0.0075).max(1.0) - 4.0).powi(2) / 100_000.0;

        diff_value *= 1.0 + 0.1 * (total_hits / 1500.0).min(1.0);
        diff_value *= 0.985_f64.powf(effective_miss_count);

        if self.attrs.max_combo > 0 {
            diff_value *= (f64::from(self.state.max_combo).sqrt()
                / f64::from(self.attrs.max_combo).sqrt())
            .min(1.0);
        }

        diff_value * acc
    }

    fn acc_value(&self, total_hits: f64, acc: f64) -> f64 {
        if self.attrs.great_hit_window <= 0.0 {
            return 0.0;
        }

        (150.0 / self.attrs.great_hit_window).powf(1.1)
            * acc.powi(15)
            * 22.0
            * (total_hits / 1500.0).powf(0.3).min(1.15)
    }
}
