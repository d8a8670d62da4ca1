use crate::{any::difficulty::object::IDifficultyObject, keys::object::KeysObject};

pub(crate) struct KeysDifficultyObject {
    pub idx: usize,
    pub column: usize,
    pub delta_time: f64,
    pub start_time: f64,
    pub end_time: f64,
}

impl KeysDifficultyObject {
    pub fn new(base: &KeysObject, last: &KeysObject, clock_rate: f64, idx: usize) -> Self {
        Self {
            idx,
            column: base.column,
            delta_time: (base.start_time - last.start_time) / clock_rate,
            start_time: base.start_time / clock_rate,
            end_time: base.end_time / clock_rate,
        }
    }
}

impl IDifficultyObject for KeysDifficultyObject {
    fn idx(&self) -> usize {
        self.idx
    }

    fn start_time(&self) -> f64 {
        self.start_time
    }
}
