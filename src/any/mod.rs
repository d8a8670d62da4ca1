pub use self::{
    attributes::{DifficultyAttributes, PerformanceAttributes},
    difficulty::{gradual::GradualDifficulty, Difficulty},
    performance::{gradual::GradualPerformance, HitResultPriority, Performance},
    score_state::{ScoreOrigin, ScoreState},
    strains::Strains,
};

mod attributes;
mod score_state;
mod strains;

/// Difficulty calculation on maps of any mode.
pub mod difficulty;

/// Performance calculation on maps of any mode.
pub mod performance;
