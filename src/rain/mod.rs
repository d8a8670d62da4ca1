pub use self::{
    attributes::{RainDifficultyAttributes, RainPerformanceAttributes},
    difficulty::gradual::RainGradualDifficulty,
    performance::{gradual::RainGradualPerformance, RainPerformance},
    strains::RainStrains,
};

pub(crate) use self::{convert::convert, difficulty::difficulty, strains::strains};

mod attributes;
mod convert;
pub(crate) mod difficulty;
mod object;
pub mod performance;
mod strains;

pub(crate) const PLAYFIELD_WIDTH: f32 = 512.0;
