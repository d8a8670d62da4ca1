use crate::{any::difficulty::object::IDifficultyObject, model::hit_object::HitObject};

/// The smallest note interval that strains are based on.
pub(crate) const MIN_DELTA_TIME: f64 = 25.0;

/// A percussion note paired with its predecessors.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DrumDifficultyObject {
    pub idx: usize,
    /// Clock-rate adjusted start time.
    pub start_time: f64,
    /// Clock-rate adjusted time since the previous note.
    pub delta_time: f64,
    /// The delta time clamped to [`MIN_DELTA_TIME`].
    pub strain_time: f64,
    /// Ratio of this interval to the previous one; `1.0` for steady rhythm.
    pub rhythm_ratio: f64,
}

impl DrumDifficultyObject {
    pub fn new(
        curr: &HitObject,
        last: &HitObject,
        last_delta: f64,
        clock_rate: f64,
        idx: usize,
    ) -> Self {
        let delta_time = (curr.start_time - last.start_time) / clock_rate;
        let strain_time = delta_time.max(MIN_DELTA_TIME);

        let rhythm_ratio = if last_delta > 0.0 {
            strain_time / last_delta.max(MIN_DELTA_TIME)
        } else {
            1.0
        };

        Self {
            idx,
            start_time: curr.start_time / clock_rate,
            delta_time,
            strain_time,
            rhythm_ratio,
        }
    }
}

impl IDifficultyObject for DrumDifficultyObject {
    fn idx(&self) -> usize {
        self.idx
    }

    fn start_time(&self) -> f64 {
        self.start_time
    }
}
