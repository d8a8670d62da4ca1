use crate::{
    any::difficulty::{
        object::IDifficultyObject,
        skills::{Skill, StrainState},
    },
    keys::difficulty::object::KeysDifficultyObject,
};

const INDIVIDUAL_DECAY_BASE: f64 = 0.125;
const OVERALL_DECAY_BASE: f64 = 0.3;
const RELEASE_THRESHOLD: f64 = 30.0;

/// The single skill of the scrolling mode: per-column finger strain plus an
/// overall strain shared between all columns.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Strain {
    start_times: Box<[f64]>,
    end_times: Box<[f64]>,
    individual_strains: Box<[f64]>,

    individual_strain: f64,
    overall_strain: f64,

    curr_strain: f64,
    state: StrainState,
}

impl Strain {
    pub fn new(total_columns: usize) -> Self {
        Self {
            start_times: vec![0.0; total_columns].into_boxed_slice(),
            end_times: vec![0.0; total_columns].into_boxed_slice(),
            individual_strains: vec![0.0; total_columns].into_boxed_slice(),
            individual_strain: 0.0,
            overall_strain: 1.0,
            curr_strain: 0.0,
            state: StrainState::new(),
        }
    }

    fn strain_value_of(&mut self, curr: &KeysDifficultyObject) -> f64 {
        let start_time = curr.start_time;
        let end_time = curr.end_time;
        let column = curr.column;
        let mut is_overlapping = false;

        // Lowest value we can assume with the current information
        let mut closest_end_time = (end_time - start_time).abs();
        // Factor to all additional strains in case something else is held
        let mut hold_factor = 1.0;
        // Addition to the current note in case it's a hold and has to be
        // released awkwardly
        let mut hold_addition = 0.0;

        for i in 0..self.end_times.len() {
            is_overlapping |= self.end_times[i] > start_time + 1.0
                && end_time > self.end_times[i] + 1.0
                && start_time > self.start_times[i] + 1.0;

            if self.end_times[i] > end_time + 1.0 && start_time > self.start_times[i] + 1.0 {
                hold_factor = 1.25;
            }

            closest_end_time = (end_time - self.end_times[i]).abs().min(closest_end_time);
        }

        // Releasing multiple notes at once is as easy as releasing one, so
        // the overlap bonus fades out when another release is close by.
        if is_overlapping {
            hold_addition = (1.0 + (0.27 * (RELEASE_THRESHOLD - closest_end_time)).exp()).recip();
        }

        self.individual_strains[column] = apply_decay(
            self.individual_strains[column],
            start_time - self.start_times[column],
            INDIVIDUAL_DECAY_BASE,
        );
        self.individual_strains[column] += 2.0 * hold_factor;

        // Notes in a chord share the hardest individual strain among their
        // columns
        self.individual_strain = if curr.delta_time <= 1.0 {
            self.individual_strain.max(self.individual_strains[column])
        } else {
            self.individual_strains[column]
        };

        self.overall_strain = apply_decay(self.overall_strain, curr.delta_time, OVERALL_DECAY_BASE);
        self.overall_strain += (1.0 + hold_addition) * hold_factor;

        self.start_times[column] = start_time;
        self.end_times[column] = end_time;

        // Subtracting the current strain leaves only the hardest note of a
        // section in its peak
        self.individual_strain + self.overall_strain - self.curr_strain
    }
}

impl Skill for Strain {
    type Object = KeysDifficultyObject;

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
        let prev_start = curr.previous(0, objects).map_or(0.0, |prev| prev.start_time);

        let individual = apply_decay(self.individual_strain, time - prev_start, INDIVIDUAL_DECAY_BASE);
        let overall = apply_decay(self.overall_strain, time - prev_start, OVERALL_DECAY_BASE);

        individual + overall
    }

    fn strain_value_at(&mut self, curr: &Self::Object, _objects: &[Self::Object]) -> f64 {
        self.curr_strain += self.strain_value_of(curr);

        self.curr_strain
    }
}

fn apply_decay(value: f64, delta_time: f64, decay_base: f64) -> f64 {
    value * decay_base.powf(delta_time / 1000.0)
}
