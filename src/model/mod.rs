/// Beatmap related types.
pub mod beatmap;

/// Hit object related types.
pub mod hit_object;

/// Gamemode related types.
pub mod mode;

/// Mod related types.
pub mod mods;
