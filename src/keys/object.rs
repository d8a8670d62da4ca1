use crate::model::hit_object::{HitObject, HitObjectKind, HoldNote, Spinner};

/// A preprocessed hit object of the scrolling mode.
pub(crate) struct KeysObject {
    pub start_time: f64,
    pub end_time: f64,
    pub column: usize,
}

impl KeysObject {
    pub fn new(h: &HitObject, total_columns: f32, params: &mut ObjectParams) -> Self {
        let column = Self::column(h.pos.x, total_columns);
        params.max_combo += 1;

        match h.kind {
            HitObjectKind::Circle => Self {
                start_time: h.start_time,
                end_time: h.start_time,
                column,
            },
            HitObjectKind::Slider(ref slider) => {
                params.max_combo += (slider.duration / 100.0) as u32;
                params.n_hold_notes += 1;

                Self {
                    start_time: h.start_time,
                    end_time: h.start_time + slider.duration,
                    column,
                }
            }
            HitObjectKind::Spinner(Spinner { duration })
            | HitObjectKind::Hold(HoldNote { duration }) => {
                params.max_combo += (duration / 100.0) as u32;
                params.n_hold_notes += 1;

                Self {
                    start_time: h.start_time,
                    end_time: h.start_time + duration,
                    column,
                }
            }
        }
    }

    pub fn column(x: f32, total_columns: f32) -> usize {
        let x_divisor = 512.0 / total_columns;

        (x / x_divisor).floor().min(total_columns - 1.0).max(0.0) as usize
    }
}

#[derive(Default)]
pub(crate) struct ObjectParams {
    pub max_combo: u32,
    pub n_hold_notes: u32,
}

impl ObjectParams {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_is_clamped_to_the_key_count() {
        assert_eq!(KeysObject::column(0.0, 4.0), 0);
        assert_eq!(KeysObject::column(256.0, 4.0), 2);
        assert_eq!(KeysObject::column(512.0, 4.0), 3);
    }
}
