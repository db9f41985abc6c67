mod json_import;

pub(crate) use json_import::load_statements;
