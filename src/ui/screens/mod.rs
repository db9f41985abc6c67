pub(crate) mod statements;
pub(crate) mod summary;
