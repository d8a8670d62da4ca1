use std::cmp;

use crate::{
    any::{Difficulty, HitResultPriority, Performance, ScoreState},
    drum::DrumPerformance,
    keys::KeysPerformance,
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
        mods::GameMods,
    },
    rain::RainPerformance,
    util::map_or_attrs::MapOrAttrs,
};

use super::attributes::{TapDifficultyAttributes, TapPerformanceAttributes};

pub mod gradual;

/// Performance calculator on cursor mode maps.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct TapPerformance<'map> {
    pub(crate) map_or_attrs: MapOrAttrs<'map, TapDifficultyAttributes>,
    pub(crate) difficulty: Difficulty,
    pub(crate) acc: Option<f64>,
    pub(crate) combo: Option<u32>,
    pub(crate) slider_tick_hits: Option<u32>,
    pub(crate) slider_end_hits: Option<u32>,
    pub(crate) n300: Option<u32>,
    pub(crate) n100: Option<u32>,
    pub(crate) n50: Option<u32>,
    pub(crate) misses: Option<u32>,
    pub(crate) hitresult_priority: HitResultPriority,
}

impl<'map> TapPerformance<'map> {
    /// Create a new performance calculator for cursor mode maps.
    pub fn new(map: &'map Beatmap) -> Self {
        map.into()
    }

    /// Attempt to convert the calculator to the specified mode.
    ///
    /// Returns `Err(self)` if the internal beatmap was already replaced with
    /// difficulty attributes, i.e. if this calculator was constructed through
    /// attributes or [`generate_state`] was called.
    ///
    /// [`generate_state`]: Self::generate_state
    pub fn try_mode(self, mode: GameMode) -> Result<Performance<'map>, Self> {
        match mode {
            GameMode::Tap => Ok(Performance::Tap(self)),
            GameMode::Drum => DrumPerformance::try_from(self).map(Performance::Drum),
            GameMode::Rain => RainPerformance::try_from(self).map(Performance::Rain),
            GameMode::Keys => KeysPerformance::try_from(self).map(Performance::Keys),
        }
    }

    /// Convert the calculator to the specified mode.
    ///
    /// If the internal beatmap was already replaced with difficulty
    /// attributes, the mode is kept as is.
    ///
    /// To notice whether the beatmap was replaced, use [`try_mode`] instead.
    ///
    /// [`try_mode`]: Self::try_mode
    pub fn mode_or_ignore(self, mode: GameMode) -> Performance<'map> {
        match mode {
            GameMode::Tap => Performance::Tap(self),
            GameMode::Drum => {
                DrumPerformance::try_from(self).map_or_else(Performance::Tap, Performance::Drum)
            }
            GameMode::Rain => {
                RainPerformance::try_from(self).map_or_else(Performance::Tap, Performance::Rain)
            }
            GameMode::Keys => {
                KeysPerformance::try_from(self).map_or_else(Performance::Tap, Performance::Keys)
            }
        }
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

    /// Whether the score originates from the current or the legacy client.
    ///
    /// Defaults to `true`.
    pub fn lazer(mut self, lazer: bool) -> Self {
        self.difficulty = self.difficulty.lazer(lazer);

        self
    }

    /// Override a beatmap's set AR.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub fn ar(mut self, ar: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.ar(ar, with_mods);

        self
    }

    /// Override a beatmap's set OD.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods.
    pub fn od(mut self, od: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.od(od, with_mods);

        self
    }

    /// Override a beatmap's set CS.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods.
    pub fn cs(mut self, cs: f32, with_mods: bool) -> Self {
        self.difficulty = self.difficulty.cs(cs, with_mods);

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

    /// Specify the amount of hit slider ticks and repeats.
    ///
    /// Only relevant for lazer scores.
    pub const fn slider_tick_hits(mut self, slider_tick_hits: u32) -> Self {
        self.slider_tick_hits = Some(slider_tick_hits);

        self
    }

    /// Specify the amount of hit slider ends.
    ///
    /// Only relevant for lazer scores.
    pub const fn slider_end_hits(mut self, slider_end_hits: u32) -> Self {
        self.slider_end_hits = Some(slider_end_hits);

        self
    }

    /// Specify the amount of 300s of a play.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 100s of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of 50s of a play.
    pub const fn n50(mut self, n50: u32) -> Self {
        self.n50 = Some(n50);

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
        let ScoreState {
            max_combo,
            slider_tick_hits,
            slider_end_hits,
            n_geki: _,
            n_katu: _,
            n300,
            n100,
            n50,
            misses,
        } = state;

        self.combo = Some(max_combo);
        self.slider_tick_hits = Some(slider_tick_hits);
        self.slider_end_hits = Some(slider_end_hits);
        self.n300 = Some(n300);
        self.n100 = Some(n100);
        self.n50 = Some(n50);
        self.misses = Some(misses);

        self
    }

    /// Create the [`ScoreState`] that will be used for performance calculation.
    pub fn generate_state(&mut self) -> Result<ScoreState, ConvertError> {
        let attrs = match self.map_or_attrs {
            MapOrAttrs::Map(ref map) => {
                let attrs = crate::tap::difficulty(&self.difficulty, map)?;

                self.map_or_attrs.insert_attrs(attrs)
            }
            MapOrAttrs::Attrs(ref attrs) => attrs,
        };

        let priority = self.hitresult_priority;

        let n_objects = cmp::min(
            self.difficulty.get_passed_objects() as u32,
            attrs.n_objects(),
        );
        let misses = self.misses.map_or(0, |n| cmp::min(n, n_objects));
        let n_remaining = n_objects - misses;

        let mut n300 = self.n300.map_or(0, |n| cmp::min(n, n_remaining));
        let mut n100 = self.n100.map_or(0, |n| cmp::min(n, n_remaining));
        let mut n50 = self.n50.map_or(0, |n| cmp::min(n, n_remaining));

        if let Some(acc) = self.acc {
            match (self.n300, self.n100, self.n50) {
                (Some(_), Some(_), Some(_)) => {
                    let remaining = n_remaining.saturating_sub(n300 + n100 + n50);

                    match priority {
                        HitResultPriority::BestCase => n300 += remaining,
                        HitResultPriority::WorstCase | HitResultPriority::Fastest => {
                            n50 += remaining;
                        }
                    }
                }
                (None, Some(_), Some(_)) => n300 = n_remaining.saturating_sub(n100 + n50),
                (Some(_), None, Some(_)) => n100 = n_remaining.saturating_sub(n300 + n50),
                (Some(_), Some(_), None) => n50 = n_remaining.saturating_sub(n300 + n100),
                // Distribute the accuracy deficit over the free hitresults.
                // A great weighs 6, an ok 2, and a meh 1, so turning a great
                // into an ok costs 4 units and into a meh 5 units.
                _ => {
                    let target = (acc * f64::from(6 * n_objects)).round() as u32;
                    let deficit = (6 * n_remaining).saturating_sub(target);

                    match priority {
                        HitResultPriority::BestCase => {
                            n100 = cmp::min(deficit / 4, n_remaining);
                            let trade = cmp::min(deficit - 4 * n100, n100);
                            n100 -= trade;
                            n50 = trade;
                        }
                        HitResultPriority::WorstCase => {
                            n50 = cmp::min(deficit / 5, n_remaining);
                            n100 = cmp::min(
                                deficit.saturating_sub(5 * n50).div_ceil(4),
                                n_remaining - n50,
                            );
                        }
                        HitResultPriority::Fastest => {
                            n100 = cmp::min(deficit.div_ceil(4), n_remaining);
                        }
                    }

                    n300 = n_remaining.saturating_sub(n100 + n50);
                }
            }
        } else {
            let remaining = n_remaining.saturating_sub(n300 + n100 + n50);

            match (self.n300, self.n100, self.n50) {
                (None, ..) => n300 += remaining,
                (_, None, _) => n100 += remaining,
                (.., None) => n50 += remaining,
                _ => match priority {
                    HitResultPriority::BestCase => n300 += remaining,
                    HitResultPriority::WorstCase | HitResultPriority::Fastest => n50 += remaining,
                },
            }
        }

        let max_combo = self
            .combo
            .map_or_else(
                || attrs.max_combo.saturating_sub(misses),
                |combo| cmp::min(combo, attrs.max_combo),
            );

        let slider_end_hits = self
            .slider_end_hits
            .map_or(attrs.n_sliders, |n| cmp::min(n, attrs.n_sliders));
        let slider_tick_hits = self
            .slider_tick_hits
            .map_or(attrs.n_slider_ticks, |n| cmp::min(n, attrs.n_slider_ticks));

        Ok(ScoreState {
            max_combo,
            slider_tick_hits,
            slider_end_hits,
            n_geki: 0,
            n_katu: 0,
            n300,
            n100,
            n50,
            misses,
        })
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(mut self) -> Result<TapPerformanceAttributes, ConvertError> {
        let state = self.generate_state()?;

        let attrs = match self.map_or_attrs {
            MapOrAttrs::Attrs(attrs) => attrs,
            MapOrAttrs::Map(_) => unreachable!("generate_state inserts attrs"),
        };

        let inner = TapPerformanceInner {
            mods: self.difficulty.get_mods().clone(),
            lazer: self.difficulty.get_lazer(),
            attrs,
            state,
        };

        Ok(inner.calculate())
    }

    pub(crate) fn from_map_or_attrs(
        map_or_attrs: MapOrAttrs<'map, TapDifficultyAttributes>,
    ) -> Self {
        Self {
            map_or_attrs,
            difficulty: Difficulty::new(),
            acc: None,
            combo: None,
            slider_tick_hits: None,
            slider_end_hits: None,
            n300: None,
            n100: None,
            n50: None,
            misses: None,
            hitresult_priority: HitResultPriority::DEFAULT,
        }
    }
}

impl<'map> From<&'map Beatmap> for TapPerformance<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::from_map_or_attrs(MapOrAttrs::Map(std::borrow::Cow::Borrowed(map)))
    }
}

impl From<TapDifficultyAttributes> for TapPerformance<'_> {
    fn from(attrs: TapDifficultyAttributes) -> Self {
        Self::from_map_or_attrs(MapOrAttrs::Attrs(attrs))
    }
}

impl From<TapPerformanceAttributes> for TapPerformance<'_> {
    fn from(attrs: TapPerformanceAttributes) -> Self {
        attrs.difficulty.into()
    }
}

struct TapPerformanceInner {
    attrs: TapDifficultyAttributes,
    mods: GameMods,
    lazer: bool,
    state: ScoreState,
}

impl TapPerformanceInner {
    const PERFORMANCE_BASE_MULTIPLIER: f64 = 1.12;

    fn calculate(self) -> TapPerformanceAttributes {
        let total_hits = self.total_hits();

        if total_hits == 0.0 {
            return TapPerformanceAttributes {
                difficulty: self.attrs,
                ..Default::default()
            };
        }

        let acc = self.accuracy();
        let effective_miss_count = self.effective_miss_count();

        let mut multiplier = Self::PERFORMANCE_BASE_MULTIPLIER;

        if self.mods.nf() {
            multiplier *= (1.0 - 0.02 * effective_miss_count).max(0.9);
        }

        if self.mods.so() && total_hits > 0.0 {
            multiplier *=
                1.0 - (f64::from(self.attrs.n_spinners) / total_hits).powf(0.85);
        }

        let aim_value = self.aim_value(acc, effective_miss_count);
        let speed_value = self.speed_value(acc, effective_miss_count);
        let acc_value = self.acc_value(acc);

        let pp = (aim_value.powf(1.1) + speed_value.powf(1.1) + acc_value.powf(1.1))
            .powf(1.0 / 1.1)
            * multiplier;

        TapPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_acc: acc_value,
            pp_aim: aim_value,
            pp_speed: speed_value,
            effective_miss_count,
        }
    }

    fn aim_value(&self, acc: f64, effective_miss_count: f64) -> f64 {
        let attrs = &self.attrs;
        let total_hits = self.total_hits();

        let mut aim_value = (5.0 * (attrs.aim / 0.0675).max(1.0) - 4.0).powi(3) / 100_000.0;

        let len_bonus = 0.95
            + 0.4 * (total_hits / 2000.0).min(1.0)
            + f64::from(u8::from(total_hits > 2000.0)) * 0.5 * (total_hits / 2000.0).log10();
        aim_value *= len_bonus;

        if effective_miss_count > 0.0 {
            aim_value *= 0.97_f64.powf(effective_miss_count);
        }

        if attrs.max_combo > 0 {
            aim_value *= (f64::from(self.state.max_combo).powf(0.8)
                / f64::from(attrs.max_combo).powf(0.8))
            .min(1.0);
        }

        let ar_factor = if attrs.ar > 10.33 {
            0.3 * (attrs.ar - 10.33)
        } else if attrs.ar < 8.0 {
            0.05 * (8.0 - attrs.ar)
        } else {
            0.0
        };
        aim_value *= 1.0 + ar_factor;

        if self.mods.hd() {
            aim_value *= 1.0 + 0.04 * (12.0 - attrs.ar);
        }

        aim_value *= 0.5 + acc / 2.0;
        aim_value *= 0.98 + self.od().powi(2) / 2500.0;

        aim_value
    }

    fn speed_value(&self, acc: f64, effective_miss_count: f64) -> f64 {
        let attrs = &self.attrs;
        let total_hits = self.total_hits();

        let mut speed_value = (5.0 * (attrs.speed / 0.0675).max(1.0) - 4.0).powi(3) / 100_000.0;

        let len_bonus = 0.95
            + 0.4 * (total_hits / 2000.0).min(1.0)
            + f64::from(u8::from(total_hits > 2000.0)) * 0.5 * (total_hits / 2000.0).log10();
        speed_value *= len_bonus;

        if effective_miss_count > 0.0 {
            speed_value *= 0.97_f64.powf(effective_miss_count);
        }

        if attrs.max_combo > 0 {
            speed_value *= (f64::from(self.state.max_combo).powf(0.8)
                / f64::from(attrs.max_combo).powf(0.8))
            .min(1.0);
        }

        if self.mods.hd() {
            speed_value *= 1.0 + 0.04 * (12.0 - attrs.ar);
        }

        let od = self.od();
        speed_value *= (0.95 + od.powi(2) / 750.0) * acc.powf((14.5 - od.max(8.0)) / 2.0);

        speed_value
    }

    fn acc_value(&self, acc: f64) -> f64 {
        let mut acc_value = 1.52163_f64.powf(self.od()) * acc.powi(24) * 2.83;

        acc_value *= (f64::from(self.attrs.n_circles) / 1000.0)
            .powf(0.3)
            .min(1.15);

        if self.mods.hd() {
            acc_value *= 1.08;
        }

        if self.mods.fl() {
            acc_value *= 1.02;
        }

        acc_value
    }

    fn accuracy(&self) -> f64 {
        let state = &self.state;
        let attrs = &self.attrs;

        let mut numerator =
            f64::from(300 * state.n300 + 100 * state.n100 + 50 * state.n50);
        let mut denominator = 300.0 * self.total_hits();

        // Lazer scores judge slider ends and ticks separately
        if self.lazer {
            numerator +=
                f64::from(150 * state.slider_end_hits + 30 * state.slider_tick_hits);
            denominator +=
                f64::from(150 * attrs.n_sliders + 30 * attrs.n_slider_ticks);
        }

        if denominator > 0.0 {
            numerator / denominator
        } else {
            0.0
        }
    }

    fn effective_miss_count(&self) -> f64 {
        let mut combo_based = 0.0;

        if self.attrs.n_sliders > 0 {
            let full_combo_threshold =
                f64::from(self.attrs.max_combo) - 0.1 * f64::from(self.attrs.n_sliders);

            if f64::from(self.state.max_combo) < full_combo_threshold {
                combo_based =
                    full_combo_threshold / f64::from(self.state.max_combo.max(1));
            }
        }

        combo_based = combo_based
            .min(f64::from(self.state.n100 + self.state.n50 + self.state.misses));

        combo_based.max(f64::from(self.state.misses))
    }

    fn od(&self) -> f64 {
        (80.0 - self.attrs.great_hit_window) / 6.0
    }

    fn total_hits(&self) -> f64 {
        f64::from(self.state.n300 + self.state.n100 + self.state.n50 + self.state.misses)
    }
}
