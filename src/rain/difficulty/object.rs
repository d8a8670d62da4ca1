use crate::{any::difficulty::object::IDifficultyObject, rain::object::RainObject};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RainDifficultyObject {
    pub idx: usize,
    pub start_time: f64,
    pub delta_time: f64,
    pub strain_time: f64,
    pub normalized_pos: f32,
    pub last_normalized_pos: f32,
}

impl RainDifficultyObject {
    pub const NORMALIZED_HITOBJECT_RADIUS: f32 = 41.0;

    pub fn new(
        hit_object: &RainObject,
        last_object: &RainObject,
        clock_rate: f64,
        scaling_factor: f32,
        idx: usize,
    ) -> Self {
        let normalized_pos = hit_object.x * scaling_factor;
        let last_normalized_pos = last_object.x * scaling_factor;

        let start_time = hit_object.start_time / clock_rate;
        let delta_time = (hit_object.start_time - last_object.start_time) / clock_rate;
        let strain_time = delta_time.max(40.0);

        Self {
            idx,
            start_time,
            delta_time,
            strain_time,
            normalized_pos,
            last_normalized_pos,
        }
    }
}

impl IDifficultyObject for RainDifficultyObject {
    fn idx(&self) -> usize {
        self.idx
    }

    fn start_time(&self) -> f64 {
        self.start_time
    }
}
