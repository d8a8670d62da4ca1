use crate::model::{
    beatmap::Beatmap,
    hit_object::{HitObject, HitObjectKind, Pos},
};

use super::PLAYFIELD_HEIGHT;

/// A preprocessed hit object of the cursor mode.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TapObject {
    pub pos: Pos,
    pub start_time: f64,
    pub kind: TapObjectKind,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TapObjectKind {
    Circle,
    Slider {
        /// Total path length across all spans in raw playfield pixels.
        travel_dist: f64,
        duration: f64,
        repeats: u32,
        ticks: u32,
    },
    Spinner,
}

impl TapObject {
    pub fn new(h: &HitObject, params: &mut ObjectParams) -> Self {
        let mut pos = h.pos;

        if params.hardrock_offsets {
            pos.y = PLAYFIELD_HEIGHT - pos.y;
        }

        let kind = match &h.kind {
            HitObjectKind::Circle | HitObjectKind::Hold(_) => {
                params.max_combo += 1;
                params.n_circles += 1;

                TapObjectKind::Circle
            }
            HitObjectKind::Slider(slider) => {
                let span_duration = slider.span_duration();
                let ticks_per_span =
                    ((span_duration / params.tick_interval).ceil() - 1.0).max(0.0) as u32;
                let ticks = ticks_per_span * slider.span_count() as u32;
                let repeats = slider.repeats as u32;

                // Head, tail, every repeat point, and every tick give combo
                params.max_combo += 2 + repeats + ticks;
                params.n_sliders += 1;
                params.n_slider_ticks += ticks;

                TapObjectKind::Slider {
                    travel_dist: slider.expected_dist.unwrap_or(0.0)
                        * slider.span_count() as f64,
                    duration: slider.duration,
                    repeats,
                    ticks,
                }
            }
            HitObjectKind::Spinner(_) => {
                params.max_combo += 1;
                params.n_spinners += 1;

                TapObjectKind::Spinner
            }
        };

        Self {
            pos,
            start_time: h.start_time,
            kind,
        }
    }

    pub const fn is_slider(&self) -> bool {
        matches!(self.kind, TapObjectKind::Slider { .. })
    }

    pub const fn is_spinner(&self) -> bool {
        matches!(self.kind, TapObjectKind::Spinner)
    }

    /// The combo this single object is worth.
    pub const fn combo(&self) -> u32 {
        match self.kind {
            TapObjectKind::Circle | TapObjectKind::Spinner => 1,
            TapObjectKind::Slider { repeats, ticks, .. } => 2 + repeats + ticks,
        }
    }

}

/// Running totals that accumulate while preprocessing hit objects.
pub(crate) struct ObjectParams {
    pub hardrock_offsets: bool,
    pub tick_interval: f64,
    pub max_combo: u32,
    pub n_circles: u32,
    pub n_sliders: u32,
    pub n_slider_ticks: u32,
    pub n_spinners: u32,
}

impl ObjectParams {
    pub fn new(map: &Beatmap, hardrock_offsets: bool) -> Self {
        Self {
            hardrock_offsets,
            tick_interval: map.slider_tick_interval(),
            max_combo: 0,
            n_circles: 0,
            n_sliders: 0,
            n_slider_ticks: 0,
            n_spinners: 0,
        }
    }
}
