use crate::{
    any::difficulty::{
        object::IDifficultyObject,
        skills::{strain_decay, Skill, StrainState},
    },
    drum::difficulty::object::DrumDifficultyObject,
};

const SKILL_MULTIPLIER: f64 = 1.1;
const STRAIN_DECAY_BASE: f64 = 0.4;

/// Difficulty of sustaining fast alternating hits.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Stamina {
    curr_strain: f64,
    state: StrainState,
}

impl Stamina {
    pub fn new() -> Self {
        Self {
            curr_strain: 0.0,
            state: StrainState::new(),
        }
    }
}

impl Skill for Stamina {
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
        self.curr_strain += StaminaEvaluator::evaluate(curr, objects) * SKILL_MULTIPLIER;

        self.curr_strain
    }
}

struct StaminaEvaluator;

impl StaminaEvaluator {
    fn speed_bonus(interval: f64) -> f64 {
        // Cap the interval to avoid infinite bonuses on stacked notes
        30.0 / interval.max(50.0)
    }

    fn evaluate(curr: &DrumDifficultyObject, objects: &[DrumDifficultyObject]) -> f64 {
        // The hand that hits the current note last hit two notes prior
        match curr.previous(1, objects) {
            Some(key_prev) => 0.5 + Self::speed_bonus(curr.start_time - key_prev.start_time),
            None => 0.0,
        }
    }
}
