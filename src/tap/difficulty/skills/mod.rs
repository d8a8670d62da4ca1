pub(crate) mod aim;
pub(crate) mod speed;
