pub use self::{
    attributes::{TapDifficultyAttributes, TapPerformanceAttributes},
    difficulty::gradual::TapGradualDifficulty,
    performance::{gradual::TapGradualPerformance, TapPerformance},
    strains::TapStrains,
};

pub(crate) use self::{difficulty::difficulty, strains::strains};

mod attributes;
pub(crate) mod difficulty;
pub(crate) mod object;
pub mod performance;
mod strains;

/// The height of the playfield, relevant for the hardrock reflection.
pub(crate) const PLAYFIELD_HEIGHT: f32 = 384.0;
