use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The mode of a beatmap.
#[derive(
    Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum GameMode {
    /// Arpeggio's cursor mode: aim at circles, follow sliders, spin spinners.
    #[default]
    Tap = 0,
    /// The percussion mode: a single lane of timed hits.
    Drum = 1,
    /// The catcher mode: move a tray along the bottom of the playfield.
    Rain = 2,
    /// The vertical scrolling mode: notes and hold notes across columns.
    Keys = 3,
}

impl From<u8> for GameMode {
    fn from(mode: u8) -> Self {
        match mode {
            1 => Self::Drum,
            2 => Self::Rain,
            3 => Self::Keys,
            _ => Self::Tap,
        }
    }
}

/// Error when a calculation requires a gamemode that the map cannot provide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The map is already a convert and cannot be converted again.
    #[error("the map is already a convert")]
    AlreadyConverted,
    /// The requested conversion is not defined.
    #[error("cannot convert a {from:?} map to {to:?}")]
    Convert {
        /// The map's current mode.
        from: GameMode,
        /// The requested mode.
        to: GameMode,
    },
    /// Precalculated attributes of one mode were passed to a calculation of
    /// a different mode.
    #[error("expected {expected:?} attributes, got {actual:?} attributes")]
    AttributeMismatch {
        /// The mode the calculation was configured for.
        expected: GameMode,
        /// The mode the given attributes belong to.
        actual: GameMode,
    },
}
