use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
};

use super::difficulty::{skills::movement::Movement, DifficultyValues};

/// The result of calculating the strains on a catcher mode map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub struct RainStrains {
    /// Time between two strains in ms.
    pub section_len: f64,
    /// Strain peaks of the movement skill.
    pub movement: Vec<f64>,
}

pub(crate) fn strains(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<RainStrains, ConvertError> {
    let map = map.convert_ref(GameMode::Rain)?;
    let values = DifficultyValues::calculate(difficulty, &map);

    Ok(RainStrains {
        section_len: <Movement as Skill>::SECTION_LEN,
        movement: values.movement.state().peaks_with_current(),
    })
}
