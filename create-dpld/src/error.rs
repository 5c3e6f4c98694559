//! Error types for scaffolding

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Filesystem operation failed
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted (e.g. "create directory")
        action: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Walking a template subtree failed
    #[error("Failed to walk template directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Template source directory is missing
    #[error("Template directory not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Package manifest is not valid JSON
    #[error("Invalid manifest {}: {source}", .path.display())]
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// Parse or serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Package manifest parsed but is not a JSON object
    #[error("Manifest {} is not a JSON object", .0.display())]
    ManifestNotObject(PathBuf),

    /// Template catalog violates its structural rules
    #[error("Invalid template catalog: {0}")]
    Catalog(String),

    /// Prompter returned an index outside the offered choices
    #[error("Invalid selection {index} for prompt '{prompt}'")]
    InvalidSelection {
        /// Prompt text
        prompt: String,
        /// Index returned by the prompter
        index: usize,
    },

    /// Interactive prompt failed or was interrupted
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl ScaffoldError {
    /// Build a closure mapping an [`io::Error`] to [`ScaffoldError::Io`]
    pub(crate) fn io<'a>(
        action: &'static str,
        path: &'a Path,
    ) -> impl FnOnce(io::Error) -> Self + 'a {
        move |source| Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias for scaffolding operations
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path() {
        let err = ScaffoldError::io("create directory", Path::new("my-app"))(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let message = err.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("my-app"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_invalid_selection_message() {
        let err = ScaffoldError::InvalidSelection {
            prompt: "Choose app type:".to_string(),
            index: 7,
        };
        assert_eq!(
            err.to_string(),
            "Invalid selection 7 for prompt 'Choose app type:'"
        );
    }
}
