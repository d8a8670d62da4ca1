use crate::{
    any::difficulty::{
        object::IDifficultyObject,
        skills::{strain_decay, Skill, StrainState},
    },
    drum::difficulty::object::DrumDifficultyObject,
};

const SKILL_MULTIPLIER: f64 = 1.0;
const STRAIN_DECAY_BASE: f64 = 0.3;

/// Difficulty of reading changes in note timing.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Rhythm {
    curr_strain: f64,
    state: StrainState,
}

impl Rhythm {
    pub fn new() -> Self {
        Self {
            curr_strain: 0.0,
            state: StrainState::new(),
        }
    }
}

impl Skill for Rhythm {
    type Object = DrumDifficultyObject;

    fn state(&self) -> &StrainState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut StrainState {
        &mut self.state
    }

    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &Self::Object,
        objects: &[Self::Object],
    ) -> f64 {
        let prev_start = curr.previous(0, objects).map_or(0.0, |h| h.start_time);

        self.curr_strain * strain_decay(time - prev_start, STRAIN_DECAY_BASE)
    }

    fn strain_value_at(&mut self, curr: &Self::Object, objects: &[Self::Object]) -> f64 {
        self.curr_strain *= strain_decay(curr.delta_time, STRAIN_DECAY_BASE);
        self.curr_strain += RhythmEvaluator::evaluate(curr, objects) * SKILL_MULTIPLIER;

        self.curr_strain
    }
}

struct RhythmEvaluator;

impl RhythmEvaluator {
    /// Notes further apart than this don't form a rhythm.
    const MAX_INTERVAL: f64 = 1000.0;

    fn evaluate(curr: &DrumDifficultyObject, objects: &[DrumDifficultyObject]) -> f64 {
        if curr.delta_time > Self::MAX_INTERVAL {
            return 0.0;
        }

        // The inverse ratio describes the same change in tempo
        let change = curr.rhythm_ratio.max(curr.rhythm_ratio.recip());

        if change < 1.05 {
            return 0.0;
        }

        let mut bonus = (change - 1.0).min(1.0).sqrt();

        // Repeated changes back and forth are easier to follow than a
        // change into a new tempo
        if let Some(last) = curr.previous(0, objects) {
            let last_change = last.rhythm_ratio.max(last.rhythm_ratio.recip());

            if (last_change - change).abs() < 0.05 {
                bonus *= 0.5;
            }
        }

        bonus
    }
}
