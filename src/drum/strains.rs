use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
};

use super::difficulty::{skills::stamina::Stamina, DifficultyValues};

/// The result of calculating the strains on a percussion mode map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub struct DrumStrains {
    /// Time between two strains in ms.
    pub section_len: f64,
    /// Strain peaks of the stamina skill.
    pub stamina: Vec<f64>,
    /// Strain peaks of the rhythm skill.
    pub rhythm: Vec<f64>,
}

pub(crate) fn strains(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<DrumStrains, ConvertError> {
    let map = map.convert_ref(GameMode::Drum)?;
    let values = DifficultyValues::calculate(difficulty, &map);

    Ok(DrumStrains {
        section_len: <Stamina as Skill>::SECTION_LEN,
        stamina: values.stamina.state().peaks_with_current(),
        rhythm: values.rhythm.state().peaks_with_current(),
    })
}
