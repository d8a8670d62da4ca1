use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
    rain::object::{palpable_objects, RainObject},
};

use self::{object::RainDifficultyObject, skills::movement::Movement};

use super::attributes::RainDifficultyAttributes;

pub mod gradual;
pub(crate) mod object;
pub(crate) mod skills;

const STAR_SCALING_FACTOR: f64 = 0.153;

const BASE_CATCHER_SIZE: f32 = 106.75;
const ALLOWED_CATCH_RANGE: f32 = 0.8;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<RainDifficultyAttributes, ConvertError> {
    let map = map.convert_ref(GameMode::Rain)?;

    let values = DifficultyValues::calculate(difficulty, &map);
    let mut attrs = values.attrs;

    DifficultyValues::eval(&mut attrs, &values.movement);

    Ok(attrs)
}

/// Half the width of the catcher plate after applying the circle size.
pub(crate) fn half_catcher_width(cs: f64) -> f32 {
    let scale = 1.0 - 0.7 * ((cs as f32) - 5.0) / 5.0;
    let mut half_width = BASE_CATCHER_SIZE * scale.abs() * ALLOWED_CATCH_RANGE * 0.5;
    half_width *= 1.0 - ((cs as f32) - 5.5).max(0.0) * 0.0625;

    half_width
}

/// All state after running the skill over a map, before the skill value is
/// evaluated into final ratings.
pub(crate) struct DifficultyValues {
    pub movement: Movement,
    pub attrs: RainDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let take = difficulty.get_passed_objects();
        let clock_rate = difficulty.get_clock_rate();
        let map_attrs = difficulty.map_attributes(map);

        let palpable = palpable_objects(map, difficulty.get_hardrock_offsets());
        let n = palpable.len().min(take);
        let objects = &palpable[..n];

        let scaling_factor =
            RainDifficultyObject::NORMALIZED_HITOBJECT_RADIUS / half_catcher_width(map_attrs.cs);

        let diff_objects = Self::create_difficulty_objects(objects, clock_rate, scaling_factor);

        let mut movement = Movement::new(clock_rate);

        for curr in diff_objects.iter() {
            movement.process(curr, &diff_objects);
        }

        let mut attrs = RainDifficultyAttributes {
            ar: map_attrs.ar,
            is_convert: map.is_convert,
            ..Default::default()
        };

        for h in objects {
            if h.is_fruit() {
                attrs.n_fruits += 1;
            } else {
                attrs.n_droplets += 1;
            }

            attrs.n_tiny_droplets += h.tiny_droplets;
        }

        Self { movement, attrs }
    }

    /// Evaluate the skill into the final attribute values.
    pub fn eval(attrs: &mut RainDifficultyAttributes, movement: &Movement) {
        let movement_rating = movement.difficulty_value().sqrt() * STAR_SCALING_FACTOR;

        attrs.movement = movement_rating;
        attrs.stars = movement_rating;
    }

    pub fn create_difficulty_objects(
        objects: &[RainObject],
        clock_rate: f64,
        scaling_factor: f32,
    ) -> Box<[RainDifficultyObject]> {
        objects
            .iter()
            .skip(1)
            .zip(objects.iter())
            .enumerate()
            .map(|(idx, (curr, last))| {
                RainDifficultyObject::new(curr, last, clock_rate, scaling_factor, idx)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catcher_shrinks_with_circle_size() {
        assert!(half_catcher_width(2.0) > half_catcher_width(7.0));
    }
}
