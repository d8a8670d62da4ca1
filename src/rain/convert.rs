use crate::model::{beatmap::Beatmap, mode::GameMode};

/// Convert a cursor mode map into a catcher mode map.
///
/// Hit objects keep their kind; the catcher mode reinterprets them while
/// generating its palpable objects, so only the mode marker changes.
pub fn convert(map: &mut Beatmap) {
    map.mode = GameMode::Rain;
    map.is_convert = true;
}
