pub(crate) mod movement;
