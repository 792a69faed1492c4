//! Roster file loading.
//!
//! The one I/O boundary of the crate: a UTF-8 text file, one participant
//! name per line. Lines come back verbatim; trimming and blank-line removal
//! belong to [`crate::canonical::canonicalize`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::DrawError;

/// Read every line of the roster file.
///
/// Fails with [`DrawError::UnreadableInput`] when the file is missing,
/// unreadable, or not valid UTF-8.
pub fn load_roster(path: &Path) -> Result<Vec<String>, DrawError> {
    let file = File::open(path).map_err(|source| DrawError::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| DrawError::UnreadableInput {
            path: path.to_path_buf(),
            source,
        })?;
        names.push(line);
    }

    Ok(names)
}
