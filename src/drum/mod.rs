pub use self::{
    attributes::{DrumDifficultyAttributes, DrumPerformanceAttributes},
    difficulty::gradual::DrumGradualDifficulty,
    performance::{gradual::DrumGradualPerformance, DrumPerformance},
    strains::DrumStrains,
};

pub(crate) use self::{convert::convert, difficulty::difficulty, strains::strains};

mod attributes;
mod convert;
pub(crate) mod difficulty;
pub mod performance;
mod strains;
