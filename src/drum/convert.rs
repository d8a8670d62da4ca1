use crate::model::{beatmap::Beatmap, hit_object::HitObjectKind, mode::GameMode};

/// Convert a cursor mode map into a percussion mode map.
///
/// Every object becomes a single note at its start time; slider paths and
/// spinner durations carry no meaning in this mode.
pub fn convert(map: &mut Beatmap) {
    for h in map.hit_objects.iter_mut() {
        h.kind = HitObjectKind::Circle;
    }

    map.mode = GameMode::Drum;
    map.is_convert = true;
}
