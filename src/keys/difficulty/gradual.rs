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

use super::{
    object::KeysDifficultyObject, skills::strain::Strain, DifficultyValues,
    KeysDifficultyAttributes,
};

/// Gradually calculate the difficulty attributes of a scrolling mode map.
///
/// Note that this struct implements [`Iterator`]. On every call of
/// [`Iterator::next`], the map's next hit object will be processed and the
/// [`KeysDifficultyAttributes`] will be updated and returned.
///
/// If you want to calculate performance attributes, use
/// [`KeysGradualPerformance`] instead.
///
/// [`KeysGradualPerformance`]: crate::keys::KeysGradualPerformance
pub struct KeysGradualDifficulty {
    pub(crate) idx: usize,
    pub(crate) difficulty: Difficulty,
    /// Combo and hold note deltas per hit object.
    counts: Box<[(u32, bool)]>,
    diff_objects: Box<[KeysDifficultyObject]>,
    strain: Strain,
    attrs: KeysDifficultyAttributes,
}

impl KeysGradualDifficulty {
    /// Create a new difficulty attributes iterator for scrolling mode maps.
    pub fn new(difficulty: Difficulty, map: &Beatmap) -> Result<Self, ConvertError> {
        let map = map.convert_ref(GameMode::Keys)?;

        let take = difficulty.get_passed_objects();
        let total_columns = total_columns(map.cs);
        let clock_rate = difficulty.get_clock_rate();
        let map_attrs = difficulty.map_attributes(&map);

        let counts: Box<[_]> = map
            .hit_objects
            .iter()
            .take(take)
            .map(|h| {
                let mut params = ObjectParams::new();
                let _ = KeysObject::new(h, total_columns, &mut params);

                (params.max_combo, params.n_hold_notes == 1)
            })
            .collect();

        let mut params = ObjectParams::new();

        let keys_objects = map
            .hit_objects
            .iter()
            .map(|h| KeysObject::new(h, total_columns, &mut params))
            .take(take);

        let diff_objects = DifficultyValues::create_difficulty_objects(clock_rate, keys_objects);

        let attrs = KeysDifficultyAttributes {
            hit_window: map_attrs.hit_windows.great,
            is_convert: map.is_convert,
            ..Default::default()
        };

        Ok(Self {
            idx: 0,
            difficulty,
            counts,
            diff_objects,
            strain: Strain::new(total_columns as usize),
            attrs,
        })
    }

    fn increment_counts(attrs: &mut KeysDifficultyAttributes, (combo, is_hold): (u32, bool)) {
        attrs.n_objects += 1;
        attrs.n_hold_notes += u32::from(is_hold);
        attrs.max_combo += combo;
    }
}

impl Iterator for KeysGradualDifficulty {
    type Item = KeysDifficultyAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        // The first note has no difficulty object; processing starts with
        // the second note.
        if self.idx > 0 {
            let Self {
                ref diff_objects,
                ref mut strain,
                ..
            } = *self;

            let curr = diff_objects.get(self.idx - 1)?;
            strain.process(curr, diff_objects);
        } else if self.counts.is_empty() {
            return None;
        }

        Self::increment_counts(&mut self.attrs, self.counts[self.idx]);
        self.idx += 1;

        let mut attrs = self.attrs.clone();
        DifficultyValues::eval(&mut attrs, &self.strain);

        Some(attrs)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();

        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let mut take = n.min(self.len().saturating_sub(1));

        if self.idx == 0 && take > 0 {
            take -= 1;
            Self::increment_counts(&mut self.attrs, self.counts[self.idx]);
            self.idx += 1;
        }

        for _ in 0..take {
            let Self {
                ref diff_objects,
                ref mut strain,
                ..
            } = *self;

            let curr = &diff_objects[self.idx - 1];
            strain.process(curr, diff_objects);

            Self::increment_counts(&mut self.attrs, self.counts[self.idx]);
            self.idx += 1;
        }

        self.next()
    }
}

impl ExactSizeIterator for KeysGradualDifficulty {
    fn len(&self) -> usize {
        self.counts.len() - self.idx
    }
}
