pub(crate) mod strain;
