use super::object::IDifficultyObject;

/// Shared state of every strain skill: the live strain section and the
/// recorded peaks.
///
/// Keeping this separate from the skill-specific state is what allows the
/// gradual calculators to carry skills forward object by object.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct StrainState {
    pub curr_section_peak: f64,
    pub curr_section_end: f64,
    pub strain_peaks: Vec<f64>,
    pub object_strains: Vec<f64>,
}

impl StrainState {
    pub fn new() -> Self {
        Self {
            curr_section_peak: 0.0,
            curr_section_end: 0.0,
            strain_peaks: Vec::with_capacity(256),
            object_strains: Vec::new(),
        }
    }

    pub fn save_current_peak(&mut self) {
        self.strain_peaks.push(self.curr_section_peak);
    }

    pub fn start_new_section(&mut self, initial_strain: f64) {
        self.curr_section_peak = initial_strain;
    }

    pub fn record(&mut self, strain: f64) {
        self.object_strains.push(strain);
        self.curr_section_peak = strain.max(self.curr_section_peak);
    }

    /// All section peaks including the still running section.
    pub fn peaks_with_current(&self) -> Vec<f64> {
        let mut peaks = self.strain_peaks.clone();
        peaks.push(self.curr_section_peak);

        peaks
    }
}

/// A strain-based sliding aggregation over difficulty objects.
///
/// Implementors provide the strain function; `process` handles the section
/// bookkeeping. Processing is strictly forward so that a skill can be
/// evaluated mid-sequence by the gradual calculators.
pub(crate) trait Skill: Sized {
    type Object: IDifficultyObject;

    const DECAY_WEIGHT: f64 = 0.9;
    const SECTION_LEN: f64 = 400.0;

    fn state(&self) -> &StrainState;

    fn state_mut(&mut self) -> &mut StrainState;

    /// The strain carried into a fresh section starting at `time`.
    fn calculate_initial_strain(
        &self,
        time: f64,
        curr: &Self::Object,
        objects: &[Self::Object],
    ) -> f64;

    /// The strain value at the current object.
    fn strain_value_at(&mut self, curr: &Self::Object, objects: &[Self::Object]) -> f64;

    fn process(&mut self, curr: &Self::Object, objects: &[Self::Object]) {
        if curr.idx() == 0 {
            self.state_mut().curr_section_end =
                (curr.start_time() / Self::SECTION_LEN).ceil() * Self::SECTION_LEN;
        }

        while curr.start_time() > self.state().curr_section_end {
            let section_end = self.state().curr_section_end;
            self.state_mut().save_current_peak();
            let initial_strain = self.calculate_initial_strain(section_end, curr, objects);
            self.state_mut().start_new_section(initial_strain);
            self.state_mut().curr_section_end += Self::SECTION_LEN;
        }

        let strain = self.strain_value_at(curr, objects);
        self.state_mut().record(strain);
    }

    /// The skill's difficulty value over everything processed so far.
    fn difficulty_value(&self) -> f64 {
        difficulty_value(self.state().peaks_with_current(), Self::DECAY_WEIGHT)
    }

    /// The influence-weighted amount of difficult objects, used for the
    /// performance decomposition.
    fn count_top_weighted_strains(&self) -> f64 {
        count_top_weighted_strains(&self.state().object_strains, self.difficulty_value())
    }
}

/// Difficulty is the weighted sum of the highest strains from every section,
/// sorted from highest to lowest strain.
pub(crate) fn difficulty_value(mut peaks: Vec<f64>, decay_weight: f64) -> f64 {
    // Sections with zero strain don't contribute and only slow down the sort
    peaks.retain(|&peak| peak > 0.0);
    peaks.sort_unstable_by(|a, b| b.total_cmp(a));

    let mut difficulty = 0.0;
    let mut weight = 1.0;

    for strain in peaks {
        difficulty += strain * weight;
        weight *= decay_weight;
    }

    difficulty
}

pub(crate) fn count_top_weighted_strains(object_strains: &[f64], difficulty_value: f64) -> f64 {
    if object_strains.is_empty() {
        return 0.0;
    }

    // What the top strain would be if all strain values were identical
    let consistent_top_strain = difficulty_value / 10.0;

    if consistent_top_strain <= 0.0 {
        return object_strains.len() as f64;
    }

    object_strains
        .iter()
        .map(|s| 1.1 / (1.0 + f64::exp(-10.0 * (s / consistent_top_strain - 0.88))))
        .sum()
}

pub(crate) fn strain_decay(ms: f64, strain_decay_base: f64) -> f64 {
    strain_decay_base.powf(ms / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_peaks_are_excluded() {
        let value = difficulty_value(vec![0.0, 2.0, 0.0, 1.0], 0.9);
        assert!((value - (2.0 + 0.9)).abs() < 1e-12);
    }

    #[test]
    fn decay_halves_over_time() {
        let decayed = strain_decay(1000.0, 0.5);
        assert!((decayed - 0.5).abs() < 1e-12);
    }

    #[test]
    fn top_weighted_strains_of_empty_sequence() {
        assert_eq!(count_top_weighted_strains(&[], 5.0), 0.0);
    }
}
