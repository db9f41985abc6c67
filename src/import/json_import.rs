use std::path::Path;

use crate::error::LoadError;
use crate::models::Statement;

/// Read a statements file: a JSON array of statement objects.
///
/// Fields missing from the file take their empty defaults, so partially
/// populated exports still load.
pub(crate) fn load_statements(path: &Path) -> Result<Vec<Statement>, LoadError> {
    let data = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let statements: Vec<Statement> =
        serde_json::from_str(&data).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        statements = statements.len(),
        "loaded statements"
    );
    Ok(statements)
}

#[cfg(test)]
#[path = "json_import_tests.rs"]
mod tests;
