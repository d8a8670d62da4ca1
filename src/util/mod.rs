pub(crate) mod difficulty;
pub(crate) mod map_or_attrs;
