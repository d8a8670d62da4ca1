use crate::{
    model::{mode::GameMode, mods::GameMods},
    util::difficulty::difficulty_range,
};

use super::Beatmap;

/// Summary struct for a [`Beatmap`]'s attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
    /// The resolved hit windows.
    pub hit_windows: HitWindows,
}

/// Resolved hit windows in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    /// Time from appearing on screen until the hit, i.e. the approach rate
    /// window.
    pub preempt: f64,
    /// Time to hit a *great* judgement.
    pub great: f64,
    /// Time to hit an *ok* judgement, if the mode has one.
    pub ok: Option<f64>,
    /// Time to hit a *meh* judgement, if the mode has one.
    pub meh: Option<f64>,
}

/// A difficulty setting that is either applied before or after mods.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModsDependent {
    /// The raw value.
    pub value: f32,
    /// Whether the value is used as is (`true`) or still gets modified by
    /// mods (`false`).
    pub with_mods: bool,
}

impl ModsDependent {
    /// A value that mods still get applied to.
    pub const fn new(value: f32) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

/// A builder for [`BeatmapAttributes`] and [`HitWindows`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    mode: GameMode,
    is_convert: bool,
    ar: ModsDependent,
    od: ModsDependent,
    cs: ModsDependent,
    hp: ModsDependent,
    mods: GameMods,
    clock_rate: Option<f64>,
    lazer: bool,
}

impl BeatmapAttributesBuilder {
    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// The mode will be [`GameMode::Tap`] and attributes are set to `5.0`.
    pub fn new() -> Self {
        Self {
            mode: GameMode::Tap,
            is_convert: false,
            ar: ModsDependent::new(5.0),
            od: ModsDependent::new(5.0),
            cs: ModsDependent::new(5.0),
            hp: ModsDependent::new(5.0),
            mods: GameMods::default(),
            clock_rate: None,
            lazer: true,
        }
    }

    /// Use the given [`Beatmap`]'s attributes, mode, and convert status.
    pub fn map(self, map: &Beatmap) -> Self {
        Self {
            mode: map.mode,
            is_convert: map.is_convert,
            ar: ModsDependent::new(map.ar),
            od: ModsDependent::new(map.od),
            cs: ModsDependent::new(map.cs),
            hp: ModsDependent::new(map.hp),
            ..self
        }
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before or
    /// after accounting for mods.
    pub fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: ModsDependent {
                value: ar,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the overall difficulty.
    ///
    /// `with_mods` determines if the given value should be used before or
    /// after accounting for mods.
    pub fn od(self, od: f32, with_mods: bool) -> Self {
        Self {
            od: ModsDependent {
                value: od,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the circle size.
    ///
    /// `with_mods` determines if the given value should be used before or
    /// after accounting for mods.
    pub fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: ModsDependent {
                value: cs,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the drain rate.
    ///
    /// `with_mods` determines if the given value should be used before or
    /// after accounting for mods.
    pub fn hp(self, hp: f32, with_mods: bool) -> Self {
        Self {
            hp: ModsDependent {
                value: hp,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the mods.
    pub fn mods(self, mods: GameMods) -> Self {
        Self { mods, ..self }
    }

    /// Specify a custom clock rate, overriding the mods' rate.
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Specify a [`GameMode`] and whether it's a converted map.
    pub fn mode(self, mode: GameMode, is_convert: bool) -> Self {
        Self {
            mode,
            is_convert,
            ..self
        }
    }

    /// Specify whether the map is played on lazer.
    ///
    /// Only relevant for [`GameMode::Keys`] hit windows which don't scale
    /// with the clock rate on stable.
    pub fn lazer(self, lazer: bool) -> Self {
        Self { lazer, ..self }
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let clock_rate = self
            .clock_rate
            .unwrap_or_else(|| self.mods.clock_rate().unwrap_or(1.0));

        let multiplier = self.mods.od_ar_hp_multiplier();

        let apply = |setting: ModsDependent, multiplier: f64| -> f64 {
            let value = f64::from(setting.value);

            if setting.with_mods {
                value
            } else {
                (value * multiplier).clamp(0.0, 10.0)
            }
        };

        let cs_multiplier = if self.mods.hr() {
            1.3
        } else if self.mods.ez() {
            0.5
        } else {
            1.0
        };

        let ar = apply(self.ar, multiplier);
        let od = apply(self.od, multiplier);
        let cs = apply(self.cs, cs_multiplier);
        let hp = apply(self.hp, multiplier);

        let hit_windows = self.hit_windows(ar, od, clock_rate);

        // Report the effective values i.e. scale them back through the
        // mode's window formulas.
        let ar = if hit_windows.preempt > 1200.0 {
            (1800.0 - hit_windows.preempt) / 120.0
        } else {
            (1200.0 - hit_windows.preempt) / 150.0 + 5.0
        };

        let od = match self.mode {
            GameMode::Tap | GameMode::Rain => (80.0 - hit_windows.great) / 6.0,
            GameMode::Drum => {
                let great = hit_windows.great;

                if great > 35.0 {
                    5.0 + 5.0 * (great - 35.0) / (35.0 - 50.0)
                } else {
                    5.0 + 5.0 * (great - 35.0) / (35.0 - 20.0)
                }
            }
            // Keys windows are legacy and not fed back into OD
            GameMode::Keys => od,
        };

        BeatmapAttributes {
            ar,
            od,
            cs,
            hp,
            clock_rate,
            hit_windows,
        }
    }

    fn hit_windows(&self, ar: f64, od: f64, clock_rate: f64) -> HitWindows {
        let preempt = difficulty_range(ar, 1800.0, 1200.0, 450.0) / clock_rate;

        match self.mode {
            GameMode::Tap | GameMode::Rain => HitWindows {
                preempt,
                great: (80.0 - 6.0 * od) / clock_rate,
                ok: Some((140.0 - 8.0 * od) / clock_rate),
                meh: Some((200.0 - 10.0 * od) / clock_rate),
            },
            GameMode::Drum => HitWindows {
                preempt,
                great: difficulty_range(od, 50.0, 35.0, 20.0) / clock_rate,
                ok: Some(difficulty_range(od, 120.0, 80.0, 50.0) / clock_rate),
                meh: None,
            },
            GameMode::Keys => {
                // Stable's keys windows ignore the clock rate entirely.
                let scale = if self.lazer { clock_rate } else { 1.0 };

                HitWindows {
                    preempt,
                    great: (64.0 - 3.0 * od) / scale,
                    ok: Some((97.0 - 3.0 * od) / scale),
                    meh: Some((127.0 - 3.0 * od) / scale),
                }
            }
        }
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Beatmap> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap) -> Self {
        Self::new().map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_rate_override_beats_mods() {
        let mods = GameMods::from_bits(1 << 6, GameMode::Tap);

        let attrs = BeatmapAttributesBuilder::new()
            .mods(mods)
            .clock_rate(1.2)
            .build();

        assert_eq!(attrs.clock_rate, 1.2);
    }

    #[test]
    fn hardrock_scales_settings() {
        let mods = GameMods::from_bits(1 << 4, GameMode::Tap);
        let attrs = BeatmapAttributesBuilder::new().mods(mods).build();

        // 5.0 * 1.4
        assert!((attrs.od - 7.0).abs() < 0.01);
        assert!((attrs.cs - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn with_mods_value_is_used_as_is() {
        let mods = GameMods::from_bits(1 << 4, GameMode::Tap);

        let attrs = BeatmapAttributesBuilder::new()
            .mods(mods)
            .ar(9.0, true)
            .build();

        assert!((attrs.ar - 9.0).abs() < 1e-9);
    }
}
