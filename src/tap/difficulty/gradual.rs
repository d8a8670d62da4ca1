use crate::{
    any::difficulty::{skills::Skill, Difficulty},
    model::{
        beatmap::Beatmap,
        mode::{ConvertError, GameMode},
    },
    tap::object::{ObjectParams, TapObject, TapObjectKind},
};

use super::{
    object::TapDifficultyObject,
    scaling_factor::ScalingFactor,
    skills::{aim::Aim, speed::Speed},
    DifficultyValues, TapDifficultyAttributes,
};

/// Gradually calculate the difficulty attributes of a cursor mode map.
///
/// Note that this struct implements [`Iterator`]. On every call of
/// [`Iterator::next`], the map's next hit object will be processed and the
/// [`TapDifficultyAttributes`] will be updated and returned.
///
/// If you want to calculate performance attributes, use
/// [`TapGradualPerformance`] instead.
///
/// [`TapGradualPerformance`]: crate::tap::TapGradualPerformance
pub struct TapGradualDifficulty {
    pub(crate) idx: usize,
    pub(crate) difficulty: Difficulty,
    objects: Box<[TapObject]>,
    diff_objects: Box<[TapDifficultyObject]>,
    aim: Aim,
    speed: Speed,
    attrs: TapDifficultyAttributes,
}

impl TapGradualDifficulty {
    /// Create a new difficulty attributes iterator for cursor mode maps.
    pub fn new(difficulty: Difficulty, map: &Beatmap) -> Result<Self, ConvertError> {
        let map = map.convert_ref(GameMode::Tap)?;

        let take = difficulty.get_passed_objects();
        let clock_rate = difficulty.get_clock_rate();
        let map_attrs = difficulty.map_attributes(&map);
        let scaling = ScalingFactor::new(map_attrs.cs);

        let mut params = ObjectParams::new(&map, difficulty.get_hardrock_offsets());

        let objects: Box<[TapObject]> = map
            .hit_objects
            .iter()
            .take(take)
            .map(|h| TapObject::new(h, &mut params))
            .collect();

        let diff_objects =
            DifficultyValues::create_difficulty_objects(&objects, clock_rate, &scaling);

        let mut attrs = TapDifficultyAttributes {
            ar: map_attrs.ar,
            great_hit_window: map_attrs.hit_windows.great,
            hp: map_attrs.hp,
            ..Default::default()
        };

        if let Some(h) = objects.first() {
            increment_counts(&mut attrs, h);
        }

        Ok(Self {
            idx: 0,
            difficulty,
            objects,
            diff_objects,
            aim: Aim::new(),
            speed: Speed::new(map_attrs.hit_windows.great),
            attrs,
        })
    }
}

impl Iterator for TapGradualDifficulty {
    type Item = TapDifficultyAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        // The first object has no difficulty object; processing starts with
        // the second object.
        if self.idx > 0 {
            let Self {
                ref diff_objects,
                ref mut aim,
                ref mut speed,
                ..
            } = *self;

            let curr = diff_objects.get(self.idx - 1)?;
            aim.process(curr, diff_objects);
            speed.process(curr, diff_objects);

            increment_counts(&mut self.attrs, &self.objects[self.idx]);
        } else if self.objects.is_empty() {
            return None;
        }

        self.idx += 1;

        let mut attrs = self.attrs.clone();
        DifficultyValues::eval(&mut attrs, &self.aim, &self.speed);

        Some(attrs)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();

        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let mut take = n.min(self.len().saturating_sub(1));

        // The first object is consumed without a difficulty object
        if self.idx == 0 && take > 0 {
            take -= 1;
            self.idx += 1;
        }

        for _ in 0..take {
            let Self {
                ref diff_objects,
                ref mut aim,
                ref mut speed,
                ..
            } = *self;

            let curr = &diff_objects[self.idx - 1];
            aim.process(curr, diff_objects);
            speed.process(curr, diff_objects);

            increment_counts(&mut self.attrs, &self.objects[self.idx]);
            self.idx += 1;
        }

        self.next()
    }
}

impl ExactSizeIterator for TapGradualDifficulty {
    fn len(&self) -> usize {
        if self.objects.is_empty() {
            0
        } else {
            self.diff_objects.len() + 1 - self.idx
        }
    }
}

fn increment_counts(attrs: &mut TapDifficultyAttributes, h: &TapObject) {
    attrs.max_combo += h.combo();

    match h.kind {
        TapObjectKind::Circle => attrs.n_circles += 1,
        TapObjectKind::Slider { ticks, .. } => {
            attrs.n_sliders += 1;
            attrs.n_slider_ticks += ticks;
        }
        TapObjectKind::Spinner => attrs.n_spinners += 1,
    }
}
