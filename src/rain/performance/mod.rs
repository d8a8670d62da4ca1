use std::cmp::{self, Ordering};

use crate::{
    any::{Difficulty, ScoreState},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
        mods::GameMods,
    },
    tap::TapPerformance,
    util::map_or_attrs::MapOrAttrs,
};

use super::attributes::{RainDifficultyAttributes, RainPerformanceAttributes};

pub mod gradual;

/// Performance calculator on catcher mode maps.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct RainPerformance<'map> {
    pub(crate) map_or_attrs: MapOrAttrs<'map, RainDifficultyAttributes>,
    pub(crate) difficulty: Difficulty,
    pub(crate) acc: Option<f64>,
    pub(crate) combo: Option<u32>,
    pub(crate) fruits: Option<u32>,
    pub(crate) droplets: Option<u32>,
    pub(crate) tiny_droplets: Option<u32>,
    pub(crate) tiny_droplet_misses: Option<u32>,
    pub(crate) misses: Option<u32>,
}

impl<'map> RainPerformance<'map> {
    /// Create a new performance calculator for catcher mode maps.
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
    ///
    /// Note that for this mode fruits and droplets both count as passed
    /// objects while tiny droplets don't.
    pub fn passed_objects(mut self, passed_objects: u32) -> Self {
        self.difficulty = self.difficulty.passed_objects(passed_objects);

        self
    }

    /// Adjust the clock rate used in the calculation.
    pub fn clock_rate(mut self, clock_rate: f64) -> Self {
        self.difficulty = self.difficulty.clock_rate(clock_rate);

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

    /// Adjust patterns as if the HR mod is enabled.
    pub fn hardrock_offsets(mut self, hardrock_offsets: bool) -> Self {
        self.difficulty = self.difficulty.hardrock_offsets(hardrock_offsets);

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

    /// Specify the amount of caught fruits i.e. n300.
    pub const fn fruits(mut self, n_fruits: u32) -> Self {
        self.fruits = Some(n_fruits);

        self
    }

    /// Specify the amount of caught droplets i.e. n100.
    pub const fn droplets(mut self, n_droplets: u32) -> Self {
        self.droplets = Some(n_droplets);

        self
    }

    /// Specify the amount of caught tiny droplets i.e. n50.
    pub const fn tiny_droplets(mut self, n_tiny_droplets: u32) -> Self {
        self.tiny_droplets = Some(n_tiny_droplets);

        self
    }

    /// Specify the amount of missed tiny droplets i.e. `n_katu`.
    pub const fn tiny_droplet_misses(mut self, n_tiny_droplet_misses: u32) -> Self {
        self.tiny_droplet_misses = Some(n_tiny_droplet_misses);

        self
    }

    /// Specify the amount of fruit and droplet misses of the play.
    pub const fn misses(mut self, misses: u32) -> Self {
        self.misses = Some(misses);

        self
    }

    /// Provide parameters through a [`ScoreState`].
    #[allow(clippy::needless_pass_by_value)]
    pub fn state(mut self, state: ScoreState) -> Self {
        self.combo = Some(state.max_combo);
        self.fruits = Some(state.n300);
        self.droplets = Some(state.n100);
        self.tiny_droplets = Some(state.n50);
        self.tiny_droplet_misses = Some(state.n_katu);
        self.misses = Some(state.misses);

        self
    }

    /// Create the [`ScoreState`] that will be used for performance calculation.
    #[allow(clippy::too_many_lines)]
    pub fn generate_state(&mut self) -> Result<ScoreState, ConvertError> {
        let attrs = match self.map_or_attrs {
            MapOrAttrs::Map(ref map) => {
                let attrs = crate::rain::difficulty(&self.difficulty, map)?;

                self.map_or_attrs.insert_attrs(attrs)
            }
            MapOrAttrs::Attrs(ref attrs) => attrs,
        };

        let misses = self
            .misses
            .map_or(0, |n| cmp::min(n, attrs.n_fruits + attrs.n_droplets));

        let max_combo = self.combo.unwrap_or_else(|| attrs.max_combo() - misses);

        let mut best_state = ScoreState {
            max_combo,
            misses,
            ..Default::default()
        };

        let mut best_dist = f64::INFINITY;

        let (n_fruits, n_droplets) = match (self.fruits, self.droplets) {
            (Some(mut n_fruits), Some(mut n_droplets)) => {
                let n_remaining = (attrs.n_fruits + attrs.n_droplets)
                    .saturating_sub(n_fruits + n_droplets + misses);

                let new_droplets =
                    cmp::min(n_remaining, attrs.n_droplets.saturating_sub(n_droplets));
                n_droplets += new_droplets;
                n_fruits += n_remaining - new_droplets;

                n_fruits = cmp::min(
                    n_fruits,
                    (attrs.n_fruits + attrs.n_droplets).saturating_sub(n_droplets + misses),
                );
                n_droplets = cmp::min(
                    n_droplets,
                    attrs.n_fruits + attrs.n_droplets - n_fruits - misses,
                );

                (n_fruits, n_droplets)
            }
            (Some(mut n_fruits), None) => {
                let n_droplets = attrs.n_droplets.saturating_sub(
                    misses.saturating_sub(attrs.n_fruits.saturating_sub(n_fruits)),
                );

                n_fruits = attrs.n_fruits + attrs.n_droplets - misses - n_droplets;

                (n_fruits, n_droplets)
            }
            (None, Some(mut n_droplets)) => {
                let n_fruits = attrs.n_fruits.saturating_sub(
                    misses.saturating_sub(attrs.n_droplets.saturating_sub(n_droplets)),
                );

                n_droplets = attrs.n_fruits + attrs.n_droplets - misses - n_fruits;

                (n_fruits, n_droplets)
            }
            (None, None) => {
                let n_droplets = attrs.n_droplets.saturating_sub(misses);
                let n_fruits =
                    attrs.n_fruits - (misses - (attrs.n_droplets.saturating_sub(n_droplets)));

                (n_fruits, n_droplets)
            }
        };

        best_state.n300 = n_fruits;
        best_state.n100 = n_droplets;

        let mut find_best_tiny_droplets = |acc: f64| {
            let raw_tiny_droplets = acc
                * f64::from(attrs.n_fruits + attrs.n_droplets + attrs.n_tiny_droplets)
                - f64::from(n_fruits + n_droplets);
            let min_tiny_droplets =
                cmp::min(attrs.n_tiny_droplets, raw_tiny_droplets.floor() as u32);
            let max_tiny_droplets =
                cmp::min(attrs.n_tiny_droplets, raw_tiny_droplets.ceil() as u32);

            for n_tiny_droplets in min_tiny_droplets..=max_tiny_droplets {
                let n_tiny_droplet_misses = attrs.n_tiny_droplets - n_tiny_droplets;

                let curr_acc = accuracy(
                    n_fruits,
                    n_droplets,
                    n_tiny_droplets,
                    n_tiny_droplet_misses,
                    misses,
                );
                let curr_dist = (acc - curr_acc).abs();

                if curr_dist < best_dist {
                    best_dist = curr_dist;
                    best_state.n50 = n_tiny_droplets;
                    best_state.n_katu = n_tiny_droplet_misses;
                }
            }
        };

        #[allow(clippy::single_match_else)]
        match (self.tiny_droplets, self.tiny_droplet_misses) {
            (Some(n_tiny_droplets), Some(n_tiny_droplet_misses)) => match self.acc {
                Some(acc) => {
                    match (n_tiny_droplets + n_tiny_droplet_misses).cmp(&attrs.n_tiny_droplets) {
                        Ordering::Equal => {
                            best_state.n50 = n_tiny_droplets;
                            best_state.n_katu = n_tiny_droplet_misses;
                        }
                        Ordering::Less | Ordering::Greater => find_best_tiny_droplets(acc),
                    }
                }
                None => {
                    let n_remaining = attrs
                        .n_tiny_droplets
                        .saturating_sub(n_tiny_droplets + n_tiny_droplet_misses);

                    best_state.n50 = n_tiny_droplets + n_remaining;
                    best_state.n_katu = n_tiny_droplet_misses;
                }
            },
            (Some(n_tiny_droplets), None) => {
                best_state.n50 = cmp::min(attrs.n_tiny_droplets, n_tiny_droplets);
                best_state.n_katu = attrs.n_tiny_droplets.saturating_sub(n_tiny_droplets);
            }
            (None, Some(n_tiny_droplet_misses)) => {
                best_state.n50 = attrs.n_tiny_droplets.saturating_sub(n_tiny_droplet_misses);
                best_state.n_katu = cmp::min(attrs.n_tiny_droplets, n_tiny_droplet_misses);
            }
            (None, None) => match self.acc {
                Some(acc) => find_best_tiny_droplets(acc),
                None => best_state.n50 = attrs.n_tiny_droplets,
            },
        }

        self.combo = Some(best_state.max_combo);
        self.fruits = Some(best_state.n300);
        self.droplets = Some(best_state.n100);
        self.tiny_droplets = Some(best_state.n50);
        self.tiny_droplet_misses = Some(best_state.n_katu);
        self.misses = Some(best_state.misses);

        Ok(best_state)
    }

    /// Calculate all performance related values, including pp and stars.
    pub fn calculate(mut self) -> Result<RainPerformanceAttributes, ConvertError> {
        let state = self.generate_state()?;

        let attrs = match self.map_or_attrs {
            MapOrAttrs::Attrs(attrs) => attrs,
            MapOrAttrs::Map(_) => unreachable!("generate_state inserts attrs"),
        };

        let inner = RainPerformanceInner {
            mods: self.difficulty.get_mods().clone(),
            attrs,
            state,
        };

        Ok(inner.calculate())
    }

    pub(crate) fn from_map_or_attrs(
        map_or_attrs: MapOrAttrs<'map, RainDifficultyAttributes>,
    ) -> Self {
        Self {
            map_or_attrs,
            difficulty: Difficulty::new(),
            acc: None,
            combo: None,
            fruits: None,
            droplets: None,
            tiny_droplets: None,
            tiny_droplet_misses: None,
            misses: None,
        }
    }
}

impl<'map> From<&'map Beatmap> for RainPerformance<'map> {
    fn from(map: &'map Beatmap) -> Self {
        Self::from_map_or_attrs(MapOrAttrs::Map(std::borrow::Cow::Borrowed(map)))
    }
}

impl From<RainDifficultyAttributes> for RainPerformance<'_> {
    fn from(attrs: RainDifficultyAttributes) -> Self {
        Self::from_map_or_attrs(MapOrAttrs::Attrs(attrs))
    }
}

impl From<RainPerformanceAttributes> for RainPerformance<'_> {
    fn from(attrs: RainPerformanceAttributes) -> Self {
        attrs.difficulty.into()
    }
}

impl<'map> TryFrom<TapPerformance<'map>> for RainPerformance<'map> {
    type Error = TapPerformance<'map>;

    /// Try to create a [`RainPerformance`] through a [`TapPerformance`].
    ///
    /// Returns `Err` if the calculator does not contain a convertible
    /// beatmap, i.e. if it was constructed through attributes or
    /// [`TapPerformance::generate_state`] was called.
    fn try_from(mut tap: TapPerformance<'map>) -> Result<Self, Self::Error> {
        let MapOrAttrs::Map(map) = tap.map_or_attrs else {
            return Err(tap);
        };

        if !matches!(map.mode, GameMode::Tap | GameMode::Rain) {
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
            hitresult_priority: _,
        } = tap;

        Ok(Self {
            map_or_attrs: MapOrAttrs::Map(map),
            difficulty,
            acc,
            combo,
            fruits: n300,
            droplets: n100,
            tiny_droplets: n50,
            tiny_droplet_misses: None,
            misses,
        })
    }
}

struct RainPerformanceInner {
    attrs: RainDifficultyAttributes,
    mods: GameMods,
    state: ScoreState,
}

impl RainPerformanceInner {
    fn calculate(self) -> RainPerformanceAttributes {
        let attrs = &self.attrs;
        let stars = attrs.stars;
        let max_combo = attrs.max_combo();

        let mut pp = (5.0 * (stars / 0.0049).max(1.0) - 4.0).powi(2) / 100_000.0;

        let mut combo_hits = self.combo_hits();

        if combo_hits == 0 {
            combo_hits = max_combo;
        }

        let mut len_bonus = 0.95 + 0.3 * (f64::from(combo_hits) / 2500.0).min(1.0);

        if combo_hits > 2500 {
            len_bonus += (f64::from(combo_hits) / 2500.0).log10() * 0.475;
        }

        pp *= len_bonus;
        pp *= 0.97_f64.powf(f64::from(self.state.misses));

        if self.state.max_combo > 0 {
            pp *= (f64::from(self.state.max_combo).powf(0.8) / f64::from(max_combo).powf(0.8))
                .min(1.0);
        }

        let ar = attrs.ar;
        let mut ar_factor = 1.0;

        if ar > 9.0 {
            ar_factor += 0.1 * (ar - 9.0) + f64::from(u8::from(ar > 10.0)) * 0.1 * (ar - 10.0);
        } else if ar < 8.0 {
            ar_factor += 0.025 * (8.0 - ar);
        }

        pp *= ar_factor;

        if self.mods.hd() {
            if ar <= 10.0 {
                pp *= 1.05 + 0.075 * (10.0 - ar);
            } else {
                pp *= 1.01 + 0.04 * (11.0 - ar.min(11.0));
            }
        }

        if self.mods.fl() {
            pp *= 1.35 * len_bonus;
        }

        pp *= self.accuracy().powf(5.5);

        if self.mods.nf() {
            pp *= (1.0 - 0.02 * f64::from(self.state.misses)).max(0.9);
        }

        RainPerformanceAttributes {
            difficulty: self.attrs,
            pp,
        }
    }

    fn accuracy(&self) -> f64 {
        accuracy(
            self.state.n300,
            self.state.n100,
            self.state.n50,
            self.state.n_katu,
            self.state.misses,
        )
    }

    const fn combo_hits(&self) -> u32 {
        self.state.n300 + self.state.n100 + self.state.misses
    }
}

fn accuracy(
    n_fruits: u32,
    n_droplets: u32,
    n_tiny_droplets: u32,
    n_tiny_droplet_misses: u32,
    misses: u32,
) -> f64 {
    let numerator = n_fruits + n_droplets + n_tiny_droplets;
    let denominator = numerator + n_tiny_droplet_misses + misses;

    if denominator == 0 {
        return 0.0;
    }

    f64::from(numerator) / f64::from(denominator)
}
