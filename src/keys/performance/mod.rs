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

use super::attributes::{KeysDifficultyAttributes, KeysPerformanceAttributes};

pub mod gradual;

/// Performance calculator on scrolling mode maps.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct KeysPerformance<'map> {
    pub(crate) map_or_attrs: MapOrAttrs<'map, KeysDifficultyAttributes>,
    pub(crate) difficulty: Difficulty,
    pub(crate) acc: Option<f64>,
    pub(crate) combo: Option<u32>,
    pub(crate) n_geki: Option<u32>,
    pub(crate) n300: Option<u32>,
    pub(crate) n_katu: Option<u32>,
    pub(crate) n100: Option<u32>,
    pub(crate) n50: Option<u32>,
    pub(crate) misses: Option<u32>,
    pub(crate) hitresult_priority: HitResultPriority,
}

impl<'map> KeysPerformance<'map> {
    /// Create a new performance calculator for scrolling mode maps.
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

    /// Whether the calculated attributes belong to a lazer or stable score.
    ///
    /// Defaults to `true`. For lazer scores, hold note ends are judged on
    /// their own.
    pub fn lazer(mut self, lazer: bool) -> Self {
        self.difficulty = self.difficulty.lazer(lazer);

        self
    }

    /// Set the accuracy between `0.0` and `100.0`.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some(acc.clamp(0.0, 100.0) / 100.0);

        self
    }

    /// Specify the max combo of the play.
    ///
    /// Irrelevant for the final pp value but passed through into the score
    /// state.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the amount of perfect hits.
    pub const fn n_geki(mut self, n_geki: u32) -> Self {
        self.n_geki = Some(n_geki);

        self
    }

    /// Specify the amount of greats of a play.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of goods of a play.
    pub const fn n_katu(mut self, n_katu: u32) -> Self {
        self.n_katu = Some(n_katu);

        self
    }

    /// Specify the amount of oks of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of mehs of a play.
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
        self.combo = Some(state.max_combo);
        self.n_geki = Some(state.n_geki);
        self.n300 = Some(state.n300);
        self.n_katu = Some(state.n_katu);
        self.n100 = Some(state.n100);
        self.n50 = Some(state.n50);
        self.misses = Some(state.misses);

        self
    }

    /// Create the [`ScoreState`] that will be used for performance calculation.
    #[allow(clippy::too_many_lines)]
    pub fn generate_state(&mut self) -> Result<ScoreState, ConvertError> {
        let attrs = match self.map_or_attrs {
            MapOrAttrs::Map(ref map) => {
                let attrs = crate::keys::difficulty(&self.difficulty, map)?;

                self.map_or_attrs.insert_attrs(attrs)
            }
            MapOrAttrs::Attrs(ref attrs) => attrs,
        };

        let mut n_objects = cmp::min(
            self.difficulty.get_passed_objects() as u32,
            attrs.n_objects,
        );

        // Lazer judges hold note ends on their own
        if self.difficulty.get_lazer() {
            n_objects += attrs.n_hold_notes;
        }

        let priority = self.hitresult_priority;
        let misses = self.misses.map_or(0, |n| cmp::min(n, n_objects));
        let n_remaining = n_objects - misses;

        let min_remaining = |n: u32| cmp::min(n, n_remaining);

        let mut n_geki = self.n_geki.map_or(0, min_remaining);
        let mut n300 = self.n300.map_or(0, min_remaining);
        let mut n_katu = self.n_katu.map_or(0, min_remaining);
        let mut n100 = self.n100.map_or(0, min_remaining);
        let mut n50 = self.n50.map_or(0, min_remaining);

        if let Some(acc) = self.acc {
            match (self.n_geki, self.n300, self.n_katu, self.n100, self.n50) {
                // All hitresults given; only fill up the leftover
                (Some(_), Some(_), Some(_), Some(_), Some(_)) => {
                    let remaining =
                        n_remaining.saturating_sub(n_geki + n300 + n_katu + n100 + n50);

                    match priority {
                        HitResultPriority::BestCase => n_geki += remaining,
                        HitResultPriority::WorstCase | HitResultPriority::Fastest => {
                            n50 += remaining;
                        }
                    }
                }
                // All but one given; the leftover determines the last one
                (None, Some(_), Some(_), Some(_), Some(_)) => {
                    n_geki = n_remaining.saturating_sub(n300 + n_katu + n100 + n50);
                }
                (Some(_), None, Some(_), Some(_), Some(_)) => {
                    n300 = n_remaining.saturating_sub(n_geki + n_katu + n100 + n50);
                }
                (Some(_), Some(_), None, Some(_), Some(_)) => {
                    n_katu = n_remaining.saturating_sub(n_geki + n300 + n100 + n50);
                }
                (Some(_), Some(_), Some(_), None, Some(_)) => {
                    n100 = n_remaining.saturating_sub(n_geki + n300 + n_katu + n50);
                }
                (Some(_), Some(_), Some(_), Some(_), None) => {
                    n50 = n_remaining.saturating_sub(n_geki + n300 + n_katu + n100);
                }
                // At least two unknown; distribute the accuracy deficit in
                // 300-scale units: a good loses 100, an ok 200, a meh 250
                // and a miss the full 300.
                _ => {
                    let target = (acc * f64::from(300 * n_objects)).round() as u32;
                    let deficit = (300 * n_remaining)
                        .saturating_sub(target)
                        .saturating_sub(100 * n_katu + 200 * n100 + 250 * n50);

                    let fillable =
                        n_remaining.saturating_sub(n_geki + n300 + n_katu + n100 + n50);

                    match priority {
                        HitResultPriority::BestCase => {
                            let mut new_katu = 0;
                            let mut new100 = 0;
                            let mut new50 = 0;

                            if self.n_katu.is_none() {
                                new_katu = cmp::min(deficit / 100, fillable);
                            }

                            let mut residual = deficit - 100 * new_katu;

                            if self.n100.is_none() {
                                let up = cmp::min(residual / 100, new_katu);
                                new_katu -= up;
                                new100 += up;
                                residual -= 100 * up;
                            }

                            if self.n50.is_none() {
                                let up = cmp::min(residual / 50, new100);
                                new100 -= up;
                                new50 += up;
                            }

                            n_katu += new_katu;
                            n100 += new100;
                            n50 += new50;

                            let rest = n_remaining
                                .saturating_sub(n_geki + n300 + n_katu + n100 + n50);

                            if self.n_geki.is_none() {
                                n_geki += rest;
                            } else {
                                n300 += rest;
                            }
                        }
                        HitResultPriority::WorstCase => {
                            let mut residual = deficit;

                            if self.n50.is_none() {
                                let new50 = cmp::min(residual / 250, fillable);
                                n50 += new50;
                                residual -= 250 * new50;
                            }

                            let fillable = n_remaining
                                .saturating_sub(n_geki + n300 + n_katu + n100 + n50);

                            if self.n100.is_none() {
                                let new100 = cmp::min(residual / 200, fillable);
                                n100 += new100;
                                residual -= 200 * new100;
                            }

                            let fillable = n_remaining
                                .saturating_sub(n_geki + n300 + n_katu + n100 + n50);

                            if self.n_katu.is_none() {
                                n_katu += cmp::min(residual.div_ceil(100), fillable);
                            }

                            let rest = n_remaining
                                .saturating_sub(n_geki + n300 + n_katu + n100 + n50);

                            if self.n300.is_none() {
                                n300 += rest;
                            } else {
                                n_geki += rest;
                            }
                        }
                        HitResultPriority::Fastest => {
                            if self.n_katu.is_none() {
                                n_katu += cmp::min(deficit.div_ceil(100), fillable);
                            }

                            let rest = n_remaining
                                .saturating_sub(n_geki + n300 + n_katu + n100 + n50);

                            if self.n_geki.is_none() {
                                n_geki += rest;
                            } else {
                                n300 += rest;
                            }
                        }
                    }
                }
            }
        } else {
            let remaining = n_remaining.saturating_sub(n_geki + n300 + n_katu + n100 + n50);

            match priority {
                HitResultPriority::BestCase | HitResultPriority::Fastest => {
                    if self.n_geki.is_none() {
                        n_geki += remaining;
                    } else if self.n300.is_none() {
                        n300 += remaining;
                    } else if self.n_katu.is_none() {
                        n_katu += remaining;
                    } else if self.n100.is_none() {
                        n100 += remaining;
                    } else if self.n50.is_none() {
                        n50 += remaining;
                    } else {
                        n_geki += remaining;
                    }
                }
                HitResultPriority::WorstCase => {
                    if self.n50.is_none() {
                        n50 += remaining;
                    } else if self.n100.is_none() {
                        n100 += remaining;
                    } else if self.n_katu.is_none() {
                        n_katu += remaining;
                    } else if self.n300.is_none() {
                        n300 += remaining;
                    } else {
                        n50 += remaining;
                    }
                }
            }
        }

        let max_combo = self
            .combo
            .map_or_else(|| attrs.max_combo.saturating_sub(misses), |combo| combo);

        Ok(ScoreState {
            max_combo,
            slider_tick_hits: 0,
            slider_end_hits: 0,
            n_geki,
            n_katu,
            n300,
            n100,
            n50,
            misses,
        })
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(mut self) -> Result<KeysPerformanceAttributes, ConvertError> {
        let state = self.generate_state()?;

        let attrs = match self.map_or_attrs {
            MapOrAttrs::Attrs(attrs) => attrs,
            MapOrAttrs::Map(_) => unreachable!("generate_state inserts attrs"),
        };

        let inner = KeysPerformanceInner {
            mods: self.difficulty.get_mods().clone(),
            attrs,
            state,
        };

        Ok(inner.calculate())
    }

    pub(crate) fn from_map_or_attrs(
        map_or_attrs: MapOrAttrs<'map, KeysDifficultyAttributes>,
    ) -> Self {
        Self {
            map_or_attrs,
            difficulty: Difficulty::new(),
            acc: None,
            combo: None,
            n_geki: None,
            n300: None,
            n_katu: None,
            n100: None,
            n50: None,
            misses: None,
            hitresult_priority: HitResultPriority::DEFAULT,
        }
    }
}

impl<'map> From<&'map Beatmap> for KeysPerformance<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::from_map_or_attrs(MapOrAttrs::Map(std::borrow::Cow::Borrowed(map)))
    }
}

impl From<KeysDifficultyAttributes> for KeysPerformance<'_> {
    fn from(attrs: KeysDifficultyAttributes) -> Self {
        Self::from_map_or_attrs(MapOrAttrs::Attrs(attrs))
    }
}

impl From<KeysPerformanceAttributes> for KeysPerformance<'_> {
    fn from(attrs: KeysPerformanceAttributes) -> Self {
        attrs.difficulty.into()
    }
}

impl<'map> TryFrom<TapPerformance<'map>> for KeysPerformance<'map> {
    type Error = TapPerformance<'map>;

    /// Try to create a [`KeysPerformance`] through a [`TapPerformance`].
    ///
    /// Returns `Err` if the calculator does not contain a convertible
    /// beatmap, i.e. if it was constructed through attributes or
    /// [`TapPerformance::generate_state`] was called.
    fn try_from(mut tap: TapPerformance<'map>) -> Result<Self, Self::Error> {
        let MapOrAttrs::Map(map) = tap.map_or_attrs else {
            return Err(tap);
        };

        if !matches!(map.mode, GameMode::Tap | GameMode::Keys) {
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
            n50,
            misses,
            hitresult_priority,
        } = tap;

        Ok(Self {
            map_or_attrs: MapOrAttrs::Map(map),
            difficulty,
            acc,
            combo,
            n_geki: None,
            n300,
            n_katu: None,
            n100,
            n50,
            misses,
            hitresult_priority,
        })
    }
}

struct KeysPerformanceInner {
    attrs: KeysDifficultyAttributes,
    mods: GameMods,
    state: ScoreState,
}

impl KeysPerformanceInner {
    fn calculate(self) -> KeysPerformanceAttributes {
        let mut multiplier = 1.0;

        if self.mods.nf() {
            multiplier *= 0.75;
        }

        if self.mods.ez() {
            multiplier *= 0.5;
        }

        let difficulty_value = self.difficulty_value();
        let pp = difficulty_value * multiplier;

        KeysPerformanceAttributes {
            difficulty: self.attrs,
            pp,
            pp_difficulty: difficulty_value,
        }
    }

    fn difficulty_value(&self) -> f64 {
        let total_hits = self.total_hits();

        // Star rating to pp curve; from 80% accuracy on, a 20th of the total
        // pp is awarded per additional percent
        8.0 * (self.attrs.stars - 0.15).max(0.05).powf(2.2)
            * (5.0 * self.custom_accuracy() - 4.0).max(0.0)
            * (1.0 + 0.1 * (total_hits / 1500.0).min(1.0))
    }

    fn total_hits(&self) -> f64 {
        f64::from(
            self.state.n_geki
                + self.state.n300
                + self.state.n_katu
                + self.state.n100
                + self.state.n50
                + self.state.misses,
        )
    }

    fn custom_accuracy(&self) -> f64 {
        let numerator = 32 * self.state.n_geki
            + 30 * self.state.n300
            + 20 * self.state.n_katu
            + 10 * self.state.n100
            + 5 * self.state.n50;
        let denominator = (self.total_hits() as u32) * 32;

        if denominator == 0 {
            return 0.0;
        }

        f64::from(numerator) / f64::from(denominator)
    }
}
