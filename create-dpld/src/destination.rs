//! Destination directory checks
//!
//! Decides whether an existing project directory may be written into as-is or
//! needs the user's permission to be cleared first.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Entry ignored when deciding whether a directory is empty
const VCS_DIR: &str = ".git";

/// State of the destination path before materialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Nothing exists at the path
    Missing,
    /// Directory with no entries, or only a `.git` directory
    Empty,
    /// Directory with other content
    Occupied,
}

impl Destination {
    /// Inspect `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but cannot be listed, for example
    /// because it is a regular file.
    pub fn inspect(path: &Path) -> Result<Self> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::Missing),
            Err(err) => return Err(ScaffoldError::io("read directory", path)(err)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(ScaffoldError::io("read directory", path))?;
            names.push(entry.file_name());
            if names.len() > 1 {
                break;
            }
        }

        let state = match names.as_slice() {
            [] => Self::Empty,
            [only] if only == VCS_DIR => Self::Empty,
            _ => Self::Occupied,
        };
        debug!(path = %path.display(), ?state, "inspected destination");
        Ok(state)
    }

    /// Whether the user must confirm before writing
    #[must_use]
    pub const fn needs_confirmation(self) -> bool {
        matches!(self, Self::Occupied)
    }
}

/// Remove an existing destination directory and everything under it
///
/// # Errors
///
/// Returns an error if removal fails.
pub fn clear(path: &Path) -> Result<()> {
    debug!(path = %path.display(), "removing existing destination");
    fs::remove_dir_all(path).map_err(ScaffoldError::io("remove directory", path))
}
