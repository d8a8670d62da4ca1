use thiserror::Error;

use crate::model::{
    hit_object::{HitObject, HitObjectKind},
    mode::GameMode,
};

use super::Beatmap;

/// Resulting error type of [`Beatmap::check_suspicion`].
///
/// The heuristic exists to catch maps that were constructed to stress the
/// calculators rather than to be played. It is advisory only.
///
/// [`Beatmap::check_suspicion`]: crate::model::beatmap::Beatmap::check_suspicion
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TooSuspicious {
    /// Notes are too dense time-wise.
    #[error("the map is too dense")]
    Density,
    /// The map seems too long.
    #[error("the map is too long")]
    Length,
    /// Too many objects.
    #[error("the map has too many objects")]
    ObjectCount,
    /// Both extreme slider repeats and extreme positions.
    #[error("the map has sliders that are far out of bounds with extreme repeats")]
    RedFlag,
    /// Too many sliders' positions were suspicious.
    #[error("too many sliders have suspicious positions")]
    SliderPositions,
    /// Too many sliders had a very high amount of repeats.
    #[error("too many sliders have extreme repeat counts")]
    SliderRepeats,
}

const DAY_MS: f64 = 60.0 * 60.0 * 24.0 * 1000.0;

/// The playfield is `512x384`; anything this far out is deliberate.
const POS_THRESHOLD: f32 = 10_000.0;

/// The editor caps repeats at `9000`; calculation cost scales with them.
const REPEATS_THRESHOLD: usize = 1000;

impl TooSuspicious {
    pub(crate) fn new(map: &Beatmap) -> Option<Self> {
        if too_many_objects(map) {
            return Some(Self::ObjectCount);
        } else if too_long(&map.hit_objects) {
            return Some(Self::Length);
        }

        let mut pos_beyond_threshold = 0u32;
        let mut repeats_beyond_threshold = 0u32;

        for (i, h) in map.hit_objects.iter().enumerate() {
            if too_dense(i, h, map) {
                return Some(Self::Density);
            }

            if let HitObjectKind::Slider(ref slider) = h.kind {
                if slider.repeats > REPEATS_THRESHOLD {
                    if suspicious_pos(h) && matches!(map.mode, GameMode::Tap | GameMode::Rain) {
                        return Some(Self::RedFlag);
                    }

                    repeats_beyond_threshold += 1;
                } else if suspicious_pos(h) {
                    pos_beyond_threshold += 1;
                }
            }
        }

        if matches!(map.mode, GameMode::Drum | GameMode::Keys) {
            // Neither mode cares about slider positions or repeats
            None
        } else if pos_beyond_threshold > 256 {
            Some(Self::SliderPositions)
        } else if repeats_beyond_threshold > 256 {
            Some(Self::SliderRepeats)
        } else {
            None
        }
    }
}

fn too_many_objects(map: &Beatmap) -> bool {
    const THRESHOLD: usize = 500_000;
    /// Drum calculation is especially expensive for high object counts
    const THRESHOLD_DRUM: usize = 20_000;

    match map.mode {
        GameMode::Drum => map.hit_objects.len() > THRESHOLD_DRUM,
        _ => map.hit_objects.len() > THRESHOLD,
    }
}

fn too_long(hit_objects: &[HitObject]) -> bool {
    match hit_objects {
        [first, .., last] => last.start_time - first.start_time > DAY_MS,
        _ => false,
    }
}

fn too_dense(i: usize, curr: &HitObject, map: &Beatmap) -> bool {
    fn check(i: usize, curr: &HitObject, objects: &[HitObject], per_1s: usize, per_10s: usize) -> bool {
        (objects.len() > i + per_1s && objects[i + per_1s].start_time - curr.start_time < 1000.0)
            || (objects.len() > i + per_10s
                && objects[i + per_10s].start_time - curr.start_time < 10_000.0)
    }

    match map.mode {
        // Chords make high densities much more common in keys
        GameMode::Keys => check(i, curr, &map.hit_objects, 200, 500),
        _ => check(i, curr, &map.hit_objects, 100, 250),
    }
}

fn suspicious_pos(h: &HitObject) -> bool {
    h.pos.x.abs() > POS_THRESHOLD || h.pos.y.abs() > POS_THRESHOLD
}
