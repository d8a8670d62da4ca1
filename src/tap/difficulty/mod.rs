use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
    tap::object::{ObjectParams, TapObject},
};

use self::{
    object::TapDifficultyObject,
    scaling_factor::ScalingFactor,
    skills::{aim::Aim, speed::Speed},
};

use super::attributes::TapDifficultyAttributes;

pub mod gradual;
pub(crate) mod object;
pub(crate) mod scaling_factor;
pub(crate) mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 0.0675;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<TapDifficultyAttributes, ConvertError> {
    let map = map.convert_ref(GameMode::Tap)?;

    let values = DifficultyValues::calculate(difficulty, &map);
    let mut attrs = values.attrs;

    DifficultyValues::eval(&mut attrs, &values.aim, &values.speed);

    Ok(attrs)
}

/// All state after running the skills over a map, before the skill values
/// are evaluated into final ratings.
pub(crate) struct DifficultyValues {
    pub aim: Aim,
    pub speed: Speed,
    pub attrs: TapDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let take = difficulty.get_passed_objects();
        let clock_rate = difficulty.get_clock_rate();
        let map_attrs = difficulty.map_attributes(map);
        let scaling = ScalingFactor::new(map_attrs.cs);

        let mut params = ObjectParams::new(map, difficulty.get_hardrock_offsets());

        let tap_objects: Vec<TapObject> = map
            .hit_objects
            .iter()
            .take(take)
            .map(|h| TapObject::new(h, &mut params))
            .collect();

        let diff_objects = Self::create_difficulty_objects(&tap_objects, clock_rate, &scaling);

        let mut aim = Aim::new();
        let mut speed = Speed::new(map_attrs.hit_windows.great);

        for curr in diff_objects.iter() {
            aim.process(curr, &diff_objects);
            speed.process(curr, &diff_objects);
        }

        let attrs = TapDifficultyAttributes {
            ar: map_attrs.ar,
            great_hit_window: map_attrs.hit_windows.great,
            hp: map_attrs.hp,
            n_circles: params.n_circles,
            n_sliders: params.n_sliders,
            n_slider_ticks: params.n_slider_ticks,
            n_spinners: params.n_spinners,
            max_combo: params.max_combo,
            ..Default::default()
        };

        Self { aim, speed, attrs }
    }

    /// Evaluate the skills into the final attribute values.
    pub fn eval(attrs: &mut TapDifficultyAttributes, aim: &Aim, speed: &Speed) {
        let aim_rating = aim.difficulty_value().sqrt() * DIFFICULTY_MULTIPLIER;
        let speed_rating = speed.difficulty_value().sqrt() * DIFFICULTY_MULTIPLIER;

        attrs.aim = aim_rating;
        attrs.speed = speed_rating;
        attrs.speed_note_count = speed.relevant_note_count();
        attrs.aim_difficult_strain_count = aim.count_top_weighted_strains();
        attrs.speed_difficult_strain_count = speed.count_top_weighted_strains();
        attrs.stars = aim_rating + speed_rating + (aim_rating - speed_rating).abs() / 2.0;
    }

    pub fn create_difficulty_objects(
        objects: &[TapObject],
        clock_rate: f64,
        scaling: &ScalingFactor,
    ) -> Box<[TapDifficultyObject]> {
        objects
            .iter()
            .skip(1)
            .zip(objects.iter())
            .enumerate()
            .map(|(idx, (curr, last))| {
                let last_last = idx.checked_sub(1).map(|i| &objects[i]);

                TapDifficultyObject::new(curr, last, last_last, clock_rate, scaling, idx)
            })
            .collect()
    }
}
