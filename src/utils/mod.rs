mod file_error;
#[cfg(test)]
mod test_helper;

use std::path::{Path, PathBuf};

use anyhow::bail;

pub use file_error::FileError;
#[cfg(test)]
pub use test_helper::with_temp_dir;

use crate::bil::HEADER_EXTENSION;

const MAX_LISTED_ERRORS: usize = 10;

/// All `.hdr` files directly inside `dir`, sorted.
pub fn find_header_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = dir.join(format!("*.{}", HEADER_EXTENSION));
    let pattern = match pattern.to_str() {
        Some(p) => p.to_string(),
        None => bail!("Input path is not valid UTF-8"),
    };

    let mut paths = glob::glob(&pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();

    Ok(paths)
}

/// Fails with one line per error, listing at most ten of them.
pub fn bail_on_errors(what: &str, errors: Vec<FileError>) -> anyhow::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }

    let mut error_string: Vec<String> = errors
        .iter()
        .take(MAX_LISTED_ERRORS)
        .map(|e| format!("\t{}", e))
        .collect();

    if errors.len() > MAX_LISTED_ERRORS {
        error_string.push(format!(
            "\t... and {} more files",
            errors.len() - MAX_LISTED_ERRORS
        ))
    }

    bail!("Failed to {} (multiple) file(s):\n{}", what, error_string.join("\n"));
}
