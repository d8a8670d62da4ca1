use crate::model::{
    beatmap::Beatmap,
    hit_object::{HitObjectKind, HoldNote},
    mode::GameMode,
};

use super::object::KeysObject;

/// Convert a cursor mode map into a scrolling mode map.
///
/// The circle size determines the column count. Circles become notes in the
/// column their x position falls into; sliders and spinners become hold
/// notes over their duration.
pub fn convert(map: &mut Beatmap) {
    let total_columns = total_columns(map.cs);

    for h in map.hit_objects.iter_mut() {
        let column = KeysObject::column(h.pos.x, total_columns);

        // Snap the position to the column center
        h.pos.x = (column as f32 + 0.5) * (512.0 / total_columns);

        h.kind = match h.kind {
            HitObjectKind::Circle => HitObjectKind::Circle,
            HitObjectKind::Slider(slider) => HitObjectKind::Hold(HoldNote {
                duration: slider.duration,
            }),
            HitObjectKind::Spinner(spinner) => HitObjectKind::Hold(HoldNote {
                duration: spinner.duration,
            }),
            HitObjectKind::Hold(hold) => HitObjectKind::Hold(hold),
        };
    }

    map.mode = GameMode::Keys;
    map.is_convert = true;
}

/// The amount of columns derived from the circle size.
pub(crate) fn total_columns(cs: f32) -> f32 {
    cs.round_ties_even().max(1.0)
}
