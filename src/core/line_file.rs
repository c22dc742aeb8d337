use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Load a file as an ordered sequence of lines.
///
/// Splitting is on `\n` only, so carriage returns stay attached to their
/// lines and a read-modify-write cycle reproduces the file byte-for-byte
/// apart from explicitly replaced lines. Decoding is lossy: invalid UTF-8
/// never aborts a load.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ProjectFileNotFound(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    Ok(String::from_utf8_lossy(&bytes)
        .split('\n')
        .map(str::to_string)
        .collect())
}

/// Join lines with `\n` and overwrite the file in full.
///
/// This is a whole-file overwrite, not a patch; callers re-load before each
/// logical operation rather than holding lines across calls.
pub fn save(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.join("\n"))?;
    Ok(())
}
