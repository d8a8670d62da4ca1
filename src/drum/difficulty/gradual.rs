use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
};

use super::{
    object::DrumDifficultyObject,
    skills::{rhythm::Rhythm, stamina::Stamina},
    DifficultyValues, DrumDifficultyAttributes,
};

/// Gradually calculate the difficulty attributes of a percussion mode map.
///
/// Note that this struct implements [`Iterator`]. On every call of
/// [`Iterator::next`], the map's next hit object will be processed and the
/// [`DrumDifficultyAttributes`] will be updated and returned.
///
/// If you want to calculate performance attributes, use
/// [`DrumGradualPerformance`] instead.
///
/// [`DrumGradualPerformance`]: crate::drum::DrumGradualPerformance
pub struct DrumGradualDifficulty {
    pub(crate) idx: usize,
    pub(crate) difficulty: Difficulty,
    n_objects: usize,
    diff_objects: Box<[DrumDifficultyObject]>,
    stamina: Stamina,
    rhythm: Rhythm,
    attrs: DrumDifficultyAttributes,
}

impl DrumGradualDifficulty {
    /// Create a new difficulty attributes iterator for percussion mode maps.
    pub fn new(difficulty: Difficulty, map: &Beatmap) -> Result<Self, ConvertError> {
        let map = map.convert_ref(GameMode::Drum)?;

        let take = difficulty.get_passed_objects();
        let clock_rate = difficulty.get_clock_rate();
        let map_attrs = difficulty.map_attributes(&map);

        let n_objects = map.hit_objects.len().min(take);
        let diff_objects = DifficultyValues::create_difficulty_objects(&map, take, clock_rate);

        let attrs = DrumDifficultyAttributes {
            great_hit_window: map_attrs.hit_windows.great,
            ok_hit_window: map_attrs.hit_windows.ok.unwrap_or(0.0),
            is_convert: map.is_convert,
            ..Default::default()
        };

        Ok(Self {
            idx: 0,
            difficulty,
            n_objects,
            diff_objects,
            stamina: Stamina::new(),
            rhythm: Rhythm::new(),
            attrs,
        })
    }
}

impl Iterator for DrumGradualDifficulty {
    type Item = DrumDifficultyAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        // The first note has no difficulty object; processing starts with
        // the second note.
        if self.idx > 0 {
            let Self {
                ref diff_objects,
                ref mut stamina,
                ref mut rhythm,
                ..
            } = *self;

            let curr = diff_objects.get(self.idx - 1)?;
            stamina.process(curr, diff_objects);
            rhythm.process(curr, diff_objects);
        } else if self.n_objects == 0 {
            return None;
        }

        self.idx += 1;

        let mut attrs = self.attrs.clone();
        attrs.max_combo = self.idx as u32;
        DifficultyValues::eval(&mut attrs, &self.stamina, &self.rhythm);

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
            self.idx += 1;
        }

        for _ in 0..take {
            let Self {
                ref diff_objects,
                ref mut stamina,
                ref mut rhythm,
                ..
            } = *self;

            let curr = &diff_objects[self.idx - 1];
            stamina.process(curr, diff_objects);
            rhythm.process(curr, diff_objects);
            self.idx += 1;
        }

        self.next()
    }
}

impl ExactSizeIterator for DrumGradualDifficulty {
    fn len(&self) -> usize {
        self.n_objects - self.idx
    }
}
