use crate::{
    any::difficulty::{
        object::IDifficultyObject,
        skills::{strain_decay, Skill, StrainState},
    },
    tap::difficulty::object::TapDifficultyObject,
};

const SKILL_MULTIPLIER: f64 = 1375.0;
const STRAIN_DECAY_BASE: f64 = 0.3;

/// Difficulty of clicking objects quickly.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Speed {
    curr_strain: f64,
    hit_window: f64,
    state: StrainState,
}

impl Speed {
    pub fn new(hit_window: f64) -> Self {
        Self {
            curr_strain: 0.0,
            hit_window,
            state: StrainState::new(),
        }
    }

    /// Amount of notes that are relevant to the highest strain, i.e. the
    /// stream density of the map.
    pub fn relevant_note_count(&self) -> f64 {
        let object_strains = &self.state.object_strains;

        object_strains
            .iter()
            .copied()
            .max_by(f64::total_cmp)
            .filter(|&max| max > 0.0)
            .map_or(0.0, |max_strain| {
                object_strains.iter().fold(0.0, |sum, strain| {
                    sum + (1.0 + (-(strain / max_strain * 12.0 - 6.0)).exp()).recip()
                })
            })
    }
}

impl Skill for Speed {
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
        self.curr_strain *= strain_decay(curr.strain_time, STRAIN_DECAY_BASE);
        self.curr_strain +=
            SpeedEvaluator::evaluate(curr, objects, self.hit_window) * SKILL_MULTIPLIER;

        self.curr_strain
    }
}

struct SpeedEvaluator;

impl SpeedEvaluator {
    const SINGLE_SPACING_THRESHOLD: f64 = 125.0;
    const MIN_SPEED_BONUS: f64 = 75.0;
    const SPEED_BALANCING_FACTOR: f64 = 40.0;

    fn evaluate(
        curr: &TapDifficultyObject,
        objects: &[TapDifficultyObject],
        hit_window: f64,
    ) -> f64 {
        if curr.is_spinner {
            return 0.0;
        }

        // Cap the delta time to the great hit window so extreme overlaps
        // don't blow up the strain
        let mut strain_time = curr.strain_time;
        strain_time /= ((strain_time / hit_window) / 0.93).clamp(0.92, 1.0);

        let speed_bonus = if strain_time < Self::MIN_SPEED_BONUS {
            let base = (Self::MIN_SPEED_BONUS - strain_time) / Self::SPEED_BALANCING_FACTOR;

            1.0 + 0.75 * base * base
        } else {
            1.0
        };

        let travel_dist = curr.previous(0, objects).map_or(0.0, |obj| obj.travel_dist);
        let dist = Self::SINGLE_SPACING_THRESHOLD.min(travel_dist + curr.jump_dist);

        (speed_bonus + speed_bonus * (dist / Self::SINGLE_SPACING_THRESHOLD).powf(3.5))
            / strain_time
    }
}
