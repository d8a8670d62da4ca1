use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
};

use super::difficulty::{skills::aim::Aim, DifficultyValues};

/// The result of calculating the strains on a cursor mode map.
///
/// Suitable to plot the difficulty of a map over time.
#[derive(Clone, Debug, PartialEq)]
pub struct TapStrains {
    /// Time between two strains in ms.
    pub section_len: f64,
    /// Strain peaks of the aim skill.
    pub aim: Vec<f64>,
    /// Strain peaks of the speed skill.
    pub speed: Vec<f64>,
}

pub(crate) fn strains(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<TapStrains, ConvertError> {
    let map = map.convert_ref(GameMode::Tap)?;
    let values = DifficultyValues::calculate(difficulty, &map);

    Ok(TapStrains {
        section_len: <Aim as Skill>::SECTION_LEN,
        aim: values.aim.state().peaks_with_current(),
        speed: values.speed.state().peaks_with_current(),
    })
}
