use crate::{
    any::difficulty::object::IDifficultyObject,
    tap::object::{TapObject, TapObjectKind},
};

use super::scaling_factor::ScalingFactor;

/// The smallest delta time that strains are based on; prevents superimposed
/// objects from producing infinite values.
pub(crate) const MIN_DELTA_TIME: f64 = 25.0;

/// A [`TapObject`] paired with the previous objects, carrying all distances
/// required by the skills.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TapDifficultyObject {
    pub idx: usize,
    /// Clock-rate adjusted start time.
    pub start_time: f64,
    /// Clock-rate adjusted time since the previous object.
    pub delta_time: f64,
    /// The delta time clamped to [`MIN_DELTA_TIME`].
    pub strain_time: f64,
    /// Normalized distance from the previous object.
    pub jump_dist: f64,
    /// Normalized path length if this object is a slider.
    pub travel_dist: f64,
    /// Clock-rate adjusted slider duration, clamped like `strain_time`.
    pub travel_time: f64,
    /// The angle spanned by the previous two movements.
    pub angle: Option<f64>,
    pub is_slider: bool,
    pub is_spinner: bool,
}

impl TapDifficultyObject {
    pub fn new(
        curr: &TapObject,
        last: &TapObject,
        last_last: Option<&TapObject>,
        clock_rate: f64,
        scaling: &ScalingFactor,
        idx: usize,
    ) -> Self {
        let delta_time = (curr.start_time - last.start_time) / clock_rate;
        let strain_time = delta_time.max(MIN_DELTA_TIME);

        let jump_dist = if curr.is_spinner() || last.is_spinner() {
            0.0
        } else {
            f64::from(curr.pos.distance(last.pos)) * scaling.factor
        };

        let (travel_dist, travel_time) = match curr.kind {
            TapObjectKind::Slider {
                travel_dist,
                duration,
                ..
            } => (
                travel_dist * scaling.factor,
                (duration / clock_rate).max(MIN_DELTA_TIME),
            ),
            _ => (0.0, MIN_DELTA_TIME),
        };

        let angle = last_last
            .filter(|ll| !(curr.is_spinner() || last.is_spinner() || ll.is_spinner()))
            .and_then(|last_last| {
                let v1 = last_last.pos - last.pos;
                let v2 = curr.pos - last.pos;

                let dot = f64::from(v1.x * v2.x + v1.y * v2.y);
                let det = f64::from(v1.x * v2.y - v1.y * v2.x);
                let angle = det.atan2(dot).abs();

                angle.is_finite().then_some(angle)
            });

        Self {
            idx,
            start_time: curr.start_time / clock_rate,
            delta_time,
            strain_time,
            jump_dist,
            travel_dist,
            travel_time,
            angle,
            is_slider: curr.is_slider(),
            is_spinner: curr.is_spinner(),
        }
    }
}

impl IDifficultyObject for TapDifficultyObject {
    fn idx(&self) -> usize {
        self.idx
    }

    fn start_time(&self) -> f64 {
        self.start_time
    }
}
