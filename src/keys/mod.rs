pub use self::{
    attributes::{KeysDifficultyAttributes, KeysPerformanceAttributes},
    difficulty::gradual::KeysGradualDifficulty,
    performance::{gradual::KeysGradualPerformance, KeysPerformance},
    strains::KeysStrains,
};

pub(crate) use self::{convert::convert, difficulty::difficulty, strains::strains};

mod attributes;
mod convert;
pub(crate) mod difficulty;
mod object;
pub mod performance;
mod strains;
