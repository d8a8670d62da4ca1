use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    any::difficulty::{
        object::IDifficultyObject,
        skills::{strain_decay, Skill, StrainState},
    },
    tap::difficulty::object::TapDifficultyObject,
};

const SKILL_MULTIPLIER: f64 = 23.55;
const STRAIN_DECAY_BASE: f64 = 0.15;

/// Difficulty of moving the cursor between objects.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Aim {
    curr_strain: f64,
    state: StrainState,
}

impl Aim {
    pub fn new() -> Self {
        Self {
            curr_strain: 0.0,
            state: StrainState::new(),
        }
    }
}

impl Skill for Aim {
    type Object = TapDifficultyObject;

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
        self.curr_strain += AimEvaluator::evaluate(curr, objects) * SKILL_MULTIPLIER;

        self.curr_strain
    }
}

struct AimEvaluator;

impl AimEvaluator {
    const WIDE_ANGLE_MULTIPLIER: f64 = 1.5;
    const SLIDER_MULTIPLIER: f64 = 1.35;
    const VELOCITY_CHANGE_MULTIPLIER: f64 = 0.75;

    fn evaluate(curr: &TapDifficultyObject, objects: &[TapDifficultyObject]) -> f64 {
        let Some(last) = curr
            .previous(0, objects)
            .filter(|last| !(curr.is_spinner || last.is_spinner))
        else {
            return 0.0;
        };

        let curr_vel = curr.jump_dist / curr.strain_time;
        let prev_vel = last.jump_dist / last.strain_time;

        let mut aim_strain = curr_vel;

        // Angled jumps are only rewarded on steady rhythm
        if curr.strain_time.max(last.strain_time) < 1.25 * curr.strain_time.min(last.strain_time)
        {
            if let Some(angle) = curr.angle {
                let bonus = Self::wide_angle_bonus(angle) * curr_vel.min(prev_vel);
                aim_strain += bonus * Self::WIDE_ANGLE_MULTIPLIER;
            }
        }

        if prev_vel.max(curr_vel) > f64::EPSILON {
            let ratio_base =
                (FRAC_PI_2 * (prev_vel - curr_vel).abs() / prev_vel.max(curr_vel)).sin();
            let overlap_buff = (125.0 / curr.strain_time.min(last.strain_time))
                .min((prev_vel - curr_vel).abs());

            aim_strain += overlap_buff * ratio_base * ratio_base * Self::VELOCITY_CHANGE_MULTIPLIER;
        }

        // Extend the travel velocity of a preceding slider into the jump
        if last.is_slider {
            aim_strain += last.travel_dist / last.travel_time * Self::SLIDER_MULTIPLIER;
        }

        aim_strain
    }

    fn wide_angle_bonus(angle: f64) -> f64 {
        let base = (3.0 / 4.0 * ((5.0 / 6.0 * PI).min(angle.max(PI / 6.0)) - PI / 6.0)).sin();

        base * base
    }
}
