use freqhist_common::{FreqHistError, Result};
use std::path::Path;

/// reads the whole file; a trailing newline does not yield an empty record
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| FreqHistError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_owned).collect())
}
