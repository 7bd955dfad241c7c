use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Read the player name from the first non-blank line of `path`.
///
/// Returns `Ok(None)` when the file is missing or holds only blank lines.
pub fn read_player_name<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::resource(format!("Error reading {}", path.display()), e)),
    };

    Ok(content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string))
}
