use crate::{
    drum::DrumStrains, keys::KeysStrains, model::mode::GameMode, rain::RainStrains,
    tap::TapStrains,
};

/// The strain values of a difficulty calculation based on the mode.
///
/// Suitable to plot the difficulty over time.
#[derive(Clone, Debug, PartialEq)]
pub enum Strains {
    /// Strain values of the cursor mode.
    Tap(TapStrains),
    /// Strain values of the percussion mode.
    Drum(DrumStrains),
    /// Strain values of the catcher mode.
    Rain(RainStrains),
    /// Strain values of the scrolling mode.
    Keys(KeysStrains),
}

impl Strains {
    /// Time inbetween two strains in ms.
    pub const fn section_len(&self) -> f64 {
        match self {
            Self::Tap(strains) => strains.section_len,
            Self::Drum(strains) => strains.section_len,
            Self::Rain(strains) => strains.section_len,
            Self::Keys(strains) => strains.section_len,
        }
    }

    /// The mode the strains were calculated for.
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::Tap(_) => GameMode::Tap,
            Self::Drum(_) => GameMode::Drum,
            Self::Rain(_) => GameMode::Rain,
            Self::Keys(_) => GameMode::Keys,
        }
    }
}

macro_rules! from_mode_strains {
    ( $mode:ident: $strains:ident ) => {
        impl From<$strains> for Strains {
            fn from(strains: $strains) -> Self {
                Self::$mode(strains)
            }
        }
    };
}

from_mode_strains!(Tap: TapStrains);
from_mode_strains!(Drum: DrumStrains);
from_mode_strains!(Rain: RainStrains);
from_mode_strains!(Keys: KeysStrains);
