use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
};

use super::difficulty::{skills::strain::Strain, DifficultyValues};

/// The result of calculating the strains on a scrolling mode map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub struct KeysStrains {
    /// Time between two strains in ms.
    pub section_len: f64,
    /// Strain peaks of the strain skill.
    pub strains: Vec<f64>,
}

pub(crate) fn strains(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<KeysStrains, ConvertError> {
    let map = map.convert_ref(GameMode::Keys)?;
    let values = DifficultyValues::calculate(difficulty, &map);

    Ok(KeysStrains {
        section_len: <Strain as Skill>::SECTION_LEN,
        strains: values.strain.state().peaks_with_current(),
    })
}
