pub(crate) mod rhythm;
pub(crate) mod stamina;
