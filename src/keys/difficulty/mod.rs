use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    keys::{
        convert::total_columns,
        object::{KeysObject, ObjectParams},
    },
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
};

use self::{object::KeysDifficultyObject, skills::strain::Strain};

use super::attributes::KeysDifficultyAttributes;

pub mod gradual;
pub(crate) mod object;
pub(crate) mod skills;

const DIFFICULTY_MULTIPLIER: f64 = 0.018;

pub fn difficulty(
    difficulty: &Difficulty,
    map: &Beatmap,
) -> Result<KeysDifficultyAttributes, ConvertError> {
    let map = map.convert_ref(GameMode::Keys)?;

    let values = DifficultyValues::calculate(difficulty, &map);
    let mut attrs = values.attrs;

    DifficultyValues::eval(&mut attrs, &values.strain);

    Ok(attrs)
}

/// All state after running the skill over a map, before the skill value is
/// evaluated into final ratings.
pub(crate) struct DifficultyValues {
    pub strain: Strain,
    pub attrs: KeysDifficultyAttributes,
}

impl DifficultyValues {
    pub fn calculate(difficulty: &Difficulty, map: &Beatmap) -> Self {
        let take = difficulty.get_passed_objects();
        let total_columns = total_columns(map.cs);
        let clock_rate = difficulty.get_clock_rate();
        let map_attrs = difficulty.map_attributes(map);

        let mut params = ObjectParams::new();

        let keys_objects = map
            .hit_objects
            .iter()
            .map(|h| KeysObject::new(h, total_columns, &mut params))
            .take(take);

        let n_objects = map.hit_objects.len().min(take) as u32;

        let diff_objects = Self::create_difficulty_objects(clock_rate, keys_objects);

        let mut strain = Strain::new(total_columns as usize);

        for curr in diff_objects.iter() {
            strain.process(curr, &diff_objects);
        }

        let attrs = KeysDifficultyAttributes {
            hit_window: map_attrs.hit_windows.great,
            n_objects,
            n_hold_notes: params.n_hold_notes,
            max_combo: params.max_combo,
            is_convert: map.is_convert,
            ..Default::default()
        };

        Self { strain, attrs }
    }

    /// Evaluate the skill into the final attribute values.
    pub fn eval(attrs: &mut KeysDifficultyAttributes, strain: &Strain) {
        attrs.stars = strain.difficulty_value() * DIFFICULTY_MULTIPLIER;
    }

    pub fn create_difficulty_objects(
        clock_rate: f64,
        mut keys_objects: impl Iterator<Item = KeysObject>,
    ) -> Box<[KeysDifficultyObject]> {
        let Some(first) = keys_objects.next() else {
            return Box::default();
        };

        keys_objects
            .enumerate()
            .scan(first, |last, (idx, base)| {
                let diff_object = KeysDifficultyObject::new(&base, last, clock_rate, idx);
                *last = base;

                Some(diff_object)
            })
            .collect()
    }
}
