use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
    util::difficulty::norm,
};

use self::{
    object::DrumDifficultyObject,
    skills::{rhythm::Rhythm, stamina::Stamina},
};

use super::attributes::DrumDifficultyAttributes;

pub mod gradual;
pub(crate) mod object;
pub(crate) mod skills;

const STAMINA_MULTIPLIER: f64 = 0.04125;
const RHYTHM_MULTIPLIER: f64 = 0.034;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<DrumDifficultyAttributes, ConvertError> {
    let map = map.convert_ref(GameMode::Drum)?;

    let values = DifficultyValues::calculate(difficulty, &map);
    let mut attrs = values.attrs;

    DifficultyValues::eval(&mut attrs, &values.stamina, &values.rhythm);

    Ok(attrs)
}

/// All state after running the skills over a map, before the skill values
/// are evaluated into final ratings.
pub(crate) struct DifficultyValues {
    pub stamina: Stamina,
    pub rhythm: Rhythm,
    pub attrs: DrumDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let take = difficulty.get_passed_objects();
        let clock_rate = difficulty.get_clock_rate();
        let map_attrs = difficulty.map_attributes(map);

        let diff_objects = Self::create_difficulty_objects(map, take, clock_rate);

        let mut stamina = Stamina::new();
        let mut rhythm = Rhythm::new();

        for curr in diff_objects.iter() {
            stamina.process(curr, &diff_objects);
            rhythm.process(curr, &diff_objects);
        }

        let attrs = DrumDifficultyAttributes {
            great_hit_window: map_attrs.hit_windows.great,
            ok_hit_window: map_attrs.hit_windows.ok.unwrap_or(0.0),
            max_combo: map.hit_objects.len().min(take) as u32,
            is_convert: map.is_convert,
            ..Default::default()
        };

        Self {
            stamina,
            rhythm,
            attrs,
        }
    }

    /// Evaluate the skills into the final attribute values.
    pub fn eval(attrs: &mut DrumDifficultyAttributes, stamina: &Stamina, rhythm: &Rhythm) {
        let stamina_rating = stamina.difficulty_value() * STAMINA_MULTIPLIER;
        let rhythm_rating = rhythm.difficulty_value() * RHYTHM_MULTIPLIER;

        attrs.stamina = stamina_rating;
        attrs.rhythm = rhythm_rating;
        attrs.stars = norm(1.5, [stamina_rating, rhythm_rating]);
    }

    pub fn create_difficulty_objects(
        map: &Beatmap,
        take: usize,
        clock_rate: f64,
    ) -> Box<[DrumDifficultyObject]> {
        let mut last_delta = 0.0;

        map.hit_objects
            .iter()
            .take(take)
            .skip(1)
            .zip(map.hit_objects.iter())
            .enumerate()
            .map(|(idx, (curr, last))| {
                let diff_object =
                    DrumDifficultyObject::new(curr, last, last_delta, clock_rate, idx);
                last_delta = diff_object.strain_time;

                diff_object
            })
            .collect()
    }
}
