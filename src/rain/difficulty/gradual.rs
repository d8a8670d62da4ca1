use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
    rain::object::{palpable_objects, RainObject},
};

use super::{
    half_catcher_width, object::RainDifficultyObject, skills::movement::Movement,
    DifficultyValues, RainDifficultyAttributes,
};

/// Gradually calculate the difficulty attributes of a catcher mode map.
///
/// Note that this struct implements [`Iterator`]. On every call of
/// [`Iterator::next`], the map's next fruit or droplet will be processed and
/// the [`RainDifficultyAttributes`] will be updated and returned. Tiny
/// droplets don't count as a step of their own; their counts are added along
/// with the fruit that closes their span.
///
/// If you want to calculate performance attributes, use
/// [`RainGradualPerformance`] instead.
///
/// [`RainGradualPerformance`]: crate::rain::RainGradualPerformance
pub struct RainGradualDifficulty {
    pub(crate) idx: usize,
    pub(crate) difficulty: Difficulty,
    objects: Box<[RainObject]>,
    diff_objects: Box<[RainDifficultyObject]>,
    movement: Movement,
    attrs: RainDifficultyAttributes,
}

impl RainGradualDifficulty {
    /// Create a new difficulty attributes iterator for catcher mode maps.
    pub fn new(difficulty: Difficulty, map: &Beatmap) -> Result<Self, ConvertError> {
        let map = map.convert_ref(GameMode::Rain)?;

        let take = difficulty.get_passed_objects();
        let clock_rate = difficulty.get_clock_rate();
        let map_attrs = difficulty.map_attributes(&map);

        let mut palpable = palpable_objects(&map, difficulty.get_hardrock_offsets());
        palpable.truncate(take);
        let objects = palpable.into_boxed_slice();

        let scaling_factor =
            RainDifficultyObject::NORMALIZED_HITOBJECT_RADIUS / half_catcher_width(map_attrs.cs);

        let diff_objects =
            DifficultyValues::create_difficulty_objects(&objects, clock_rate, scaling_factor);

        let attrs = RainDifficultyAttributes {
            ar: map_attrs.ar,
            is_convert: map.is_convert,
            ..Default::default()
        };

        Ok(Self {
            idx: 0,
            difficulty,
            objects,
            diff_objects,
            movement: Movement::new(clock_rate),
            attrs,
        })
    }

    fn increment_counts(attrs: &mut RainDifficultyAttributes, h: &RainObject) {
        if h.is_fruit() {
            attrs.n_fruits += 1;
        } else {
            attrs.n_droplets += 1;
        }

        attrs.n_tiny_droplets += h.tiny_droplets;
    }
}

impl Iterator for RainGradualDifficulty {
    type Item = RainDifficultyAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        // The first palpable object has no difficulty object; processing
        // starts with the second one.
        if self.idx > 0 {
            let Self {
                ref diff_objects,
                ref mut movement,
                ..
            } = *self;

            let curr = diff_objects.get(self.idx - 1)?;
            movement.process(curr, diff_objects);
        } else if self.objects.is_empty() {
            return None;
        }

        Self::increment_counts(&mut self.attrs, &self.objects[self.idx]);
        self.idx += 1;

        let mut attrs = self.attrs.clone();
        DifficultyValues::eval(&mut attrs, &self.movement);

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
            Self::increment_counts(&mut self.attrs, &self.objects[self.idx]);
            self.idx += 1;
        }

        for _ in 0..take {
            let Self {
                ref diff_objects,
                ref mut movement,
                ..
            } = *self;

            let curr = &diff_objects[self.idx - 1];
            movement.process(curr, diff_objects);

            Self::increment_counts(&mut self.attrs, &self.objects[self.idx]);
            self.idx += 1;
        }

        self.next()
    }
}

impl ExactSizeIterator for RainGradualDifficulty {
    fn len(&self) -> usize {
        self.objects.len() - self.idx
    }
}
