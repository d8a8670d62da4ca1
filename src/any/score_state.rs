use serde::{Deserialize, Serialize};

use crate::model::mode::GameMode;

/// Aggregation for a score's current state.
///
/// Fields are interpreted based on the mode the score was set on.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Maximum combo that the score has had so far. **Not** the maximum
    /// possible combo of the map so far.
    ///
    /// Note that for [`GameMode::Rain`] only fruits and droplets are
    /// considered for combo. Irrelevant for [`GameMode::Keys`].
    pub max_combo: u32,
    /// Amount of successfully hit slider ticks and repeats.
    ///
    /// Only relevant for [`GameMode::Tap`] in lazer.
    pub slider_tick_hits: u32,
    /// Amount of successfully hit slider ends.
    ///
    /// Only relevant for [`GameMode::Tap`] in lazer.
    pub slider_end_hits: u32,
    /// Amount of current perfect hits (n320 for [`GameMode::Keys`]).
    pub n_geki: u32,
    /// Amount of current good hits (n200 for [`GameMode::Keys`], tiny
    /// droplet misses for [`GameMode::Rain`]).
    pub n_katu: u32,
    /// Amount of current greats (fruits for [`GameMode::Rain`]).
    pub n300: u32,
    /// Amount of current oks (droplets for [`GameMode::Rain`]).
    pub n100: u32,
    /// Amount of current mehs (tiny droplets for [`GameMode::Rain`]).
    pub n50: u32,
    /// Amount of current misses (fruits + droplets for [`GameMode::Rain`]).
    pub misses: u32,
}

/// The scoring convention that a score's accuracy is derived with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreOrigin {
    /// The legacy client.
    Stable,
    /// The current client with the classic mod enabled.
    WithClassicMod,
    /// The current client.
    #[default]
    Lazer,
}

impl ScoreState {
    /// Create a new empty score state.
    pub const fn new() -> Self {
        Self {
            max_combo: 0,
            slider_tick_hits: 0,
            slider_end_hits: 0,
            n_geki: 0,
            n_katu: 0,
            n300: 0,
            n100: 0,
            n50: 0,
            misses: 0,
        }
    }

    /// Return the total amount of hits by adding up everything the given
    /// mode judges.
    pub fn total_hits(&self, mode: GameMode) -> u32 {
        let mut amount = self.n300 + self.n100 + self.misses;

        if mode != GameMode::Drum {
            amount += self.n50;

            if mode != GameMode::Tap {
                amount += self.n_katu;
                amount += u32::from(mode != GameMode::Rain) * self.n_geki;
            }
        }

        amount
    }

    /// The accuracy between `0.0` and `1.0` under the given scoring
    /// convention.
    ///
    /// For [`GameMode::Tap`], lazer's slider accounting requires map totals
    /// and is handled by the performance calculator; this method uses the
    /// plain judgement weights.
    pub fn accuracy(&self, mode: GameMode, origin: ScoreOrigin) -> f64 {
        let (numerator, denominator) = match mode {
            GameMode::Tap => (
                6 * self.n300 + 2 * self.n100 + self.n50,
                6 * self.total_hits(mode),
            ),
            GameMode::Drum => (2 * self.n300 + self.n100, 2 * self.total_hits(mode)),
            GameMode::Rain => (self.n300 + self.n100 + self.n50, self.total_hits(mode)),
            GameMode::Keys => match origin {
                ScoreOrigin::Stable | ScoreOrigin::WithClassicMod => (
                    300 * (self.n_geki + self.n300)
                        + 200 * self.n_katu
                        + 100 * self.n100
                        + 50 * self.n50,
                    300 * self.total_hits(mode),
                ),
                ScoreOrigin::Lazer => (
                    305 * self.n_geki
                        + 300 * self.n300
                        + 200 * self.n_katu
                        + 100 * self.n100
                        + 50 * self.n50,
                    305 * self.total_hits(mode),
                ),
            },
        };

        if denominator == 0 {
            return 0.0;
        }

        f64::from(numerator) / f64::from(denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_zero_accuracy() {
        let state = ScoreState::new();
        assert_eq!(state.accuracy(GameMode::Tap, ScoreOrigin::Lazer), 0.0);
    }

    #[test]
    fn perfect_keys_accuracy_depends_on_origin() {
        let state = ScoreState {
            n_geki: 50,
            n300: 50,
            ..ScoreState::new()
        };

        let stable = state.accuracy(GameMode::Keys, ScoreOrigin::Stable);
        let lazer = state.accuracy(GameMode::Keys, ScoreOrigin::Lazer);

        assert_eq!(stable, 1.0);
        assert!(lazer < 1.0);
        assert!(lazer > 0.99);
    }

    #[test]
    fn drum_ignores_small_judgements() {
        let state = ScoreState {
            n300: 10,
            n50: 99,
            ..ScoreState::new()
        };

        assert_eq!(state.total_hits(GameMode::Drum), 10);
        assert_eq!(state.accuracy(GameMode::Drum, ScoreOrigin::Stable), 1.0);
    }
}
