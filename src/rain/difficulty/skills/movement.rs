use crate::{
    any::difficulty::{
        object::IDifficultyObject,
        skills::{strain_decay, Skill, StrainState},
    },
    rain::difficulty::object::RainDifficultyObject,
};

const ABSOLUTE_PLAYER_POSITIONING_ERROR: f32 = 16.0;
const NORMALIZED_HITOBJECT_RADIUS: f32 = RainDifficultyObject::NORMALIZED_HITOBJECT_RADIUS;
const DIRECTION_CHANGE_BONUS: f64 = 21.0;

const SKILL_MULTIPLIER: f64 = 900.0;
const STRAIN_DECAY_BASE: f64 = 0.2;

/// Difficulty of moving the catcher between objects.
///
/// Unlike the cursor skills this one is stateful beyond the strain value:
/// the catcher's assumed position carries from object to object.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Movement {
    clock_rate: f64,
    last_player_pos: Option<f32>,
    last_dist_moved: f32,
    last_strain_time: f64,
    curr_strain: f64,
    state: StrainState,
}

impl Movement {
    pub fn new(clock_rate: f64) -> Self {
        Self {
            clock_rate,
            last_player_pos: None,
            last_dist_moved: 0.0,
            last_strain_time: 0.0,
            curr_strain: 0.0,
            state: StrainState::new(),
        }
    }

    fn strain_value_of(&mut self, curr: &RainDifficultyObject) -> f64 {
        let last_player_pos = self.last_player_pos.unwrap_or(curr.last_normalized_pos);

        // The player only has to move close enough for the catcher plate to
        // still reach the object.
        let tolerance = NORMALIZED_HITOBJECT_RADIUS - ABSOLUTE_PLAYER_POSITIONING_ERROR;
        let player_pos = last_player_pos.clamp(
            curr.normalized_pos - tolerance,
            curr.normalized_pos + tolerance,
        );

        let dist_moved = player_pos - last_player_pos;
        let weighted_strain_time = curr.strain_time + 13.0 + 3.0 / self.clock_rate;

        let mut dist_addition = f64::from(dist_moved.abs()).powf(1.3) / 510.0;

        if dist_moved.abs() > 0.1 {
            if self.last_dist_moved.abs() > 0.1
                && dist_moved.signum() != self.last_dist_moved.signum()
            {
                let bonus_factor = f64::from(dist_moved.abs().min(50.0) / 50.0);
                let anti_flow_factor =
                    f64::from(self.last_dist_moved.abs().min(70.0) / 70.0).max(0.38);

                dist_addition += DIRECTION_CHANGE_BONUS
                    / (self.last_strain_time + 16.0).sqrt()
                    * bonus_factor
                    * anti_flow_factor
                    * (1.0 - (weighted_strain_time / 1000.0).powi(3)).max(0.0);
            }

            dist_addition += 12.5
                * f64::from(dist_moved.abs().min(NORMALIZED_HITOBJECT_RADIUS * 2.0))
                / f64::from(NORMALIZED_HITOBJECT_RADIUS * 6.0)
                / weighted_strain_time.sqrt();
        }

        self.last_player_pos = Some(player_pos);
        self.last_dist_moved = dist_moved;
        self.last_strain_time = curr.strain_time;

        dist_addition / weighted_strain_time
    }
}

impl Skill for Movement {
    type Object = RainDifficultyObject;

    const DECAY_WEIGHT: f64 = 0.94;
    const SECTION_LEN: f64 = 750.0;

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

    fn strain_value_at(&mut self, curr: &Self::Object, _objects: &[Self::Object]) -> f64 {
        self.curr_strain *= strain_decay(curr.delta_time, STRAIN_DECAY_BASE);
        self.curr_strain += self.strain_value_of(curr) * SKILL_MULTIPLIER;

        self.curr_strain
    }
}
