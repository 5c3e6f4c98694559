//! Runtime configuration
//!
//! The tool reads no configuration file. Everything here is derived from the
//! process itself: where the bundled templates live and which directory new
//! projects are created in.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::prompt::DEFAULT_PROJECT_NAME;

/// Name of the directory holding bundled templates
pub const TEMPLATES_DIR: &str = "templates";

/// Scaffolding configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Directory containing one subdirectory per template
    pub templates_root: PathBuf,

    /// Directory new projects are created in
    pub working_dir: PathBuf,

    /// Suggested project name
    pub default_project_name: String,
}

impl ScaffoldConfig {
    /// Create a configuration from explicit paths
    #[must_use]
    pub fn new(templates_root: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_root: templates_root.into(),
            working_dir: working_dir.into(),
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }

    /// Discover the configuration for the running process
    ///
    /// The working directory is the current directory. The templates root is
    /// the first existing candidate from [`Self::template_root_candidates`].
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn discover() -> Result<Self> {
        let working_dir = std::env::current_dir().context("Failed to get current directory")?;
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        let candidates = Self::template_root_candidates(exe_dir.as_deref());
        let templates_root = candidates
            .iter()
            .find(|dir| dir.is_dir())
            .or_else(|| candidates.first())
            .cloned()
            .context("No candidate location for bundled templates")?;
        debug!(templates_root = %templates_root.display(), "resolved templates root");

        Ok(Self::new(templates_root, working_dir))
    }

    /// Candidate template roots, most specific first
    ///
    /// 1. `templates/` next to the executable (installed layout)
    /// 2. workspace `templates/` when running from `target/<profile>/`
    /// 3. workspace `templates/` relative to this crate's source
    #[must_use]
    pub fn template_root_candidates(exe_dir: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(dir) = exe_dir {
            candidates.push(dir.join(TEMPLATES_DIR));
            if let Some(workspace_root) = dir.parent().and_then(Path::parent) {
                candidates.push(workspace_root.join(TEMPLATES_DIR));
            }
        }

        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        if let Some(workspace_root) = manifest_dir.parent() {
            candidates.push(workspace_root.join(TEMPLATES_DIR));
        }

        candidates
    }

    /// Override the suggested project name
    #[must_use]
    pub fn with_default_project_name(mut self, name: impl Into<String>) -> Self {
        self.default_project_name = name.into();
        self
    }

    /// Destination path for a project name
    #[must_use]
    pub fn destination(&self, project_name: &str) -> PathBuf {
        self.working_dir.join(project_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_name() {
        let config = ScaffoldConfig::new("/opt/templates", "/work");
        assert_eq!(config.default_project_name, "dpld-app");
        assert_eq!(config.destination("my-app"), PathBuf::from("/work/my-app"));
    }

    #[test]
    fn test_candidates_order() {
        let candidates = ScaffoldConfig::template_root_candidates(Some(Path::new(
            "/repo/target/debug",
        )));
        assert_eq!(candidates[0], PathBuf::from("/repo/target/debug/templates"));
        assert_eq!(candidates[1], PathBuf::from("/repo/templates"));
        assert!(candidates[2].ends_with(TEMPLATES_DIR));
    }

    #[test]
    fn test_candidates_without_exe_still_include_source_layout() {
        let candidates = ScaffoldConfig::template_root_candidates(None);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].ends_with(TEMPLATES_DIR));
    }

    #[test]
    fn test_discover_finds_workspace_templates() {
        let config = ScaffoldConfig::discover().unwrap();
        assert!(config.templates_root.join("next-tailwind").is_dir());
    }

    #[test]
    fn test_with_default_project_name() {
        let config = ScaffoldConfig::new("t", "w").with_default_project_name("other");
        assert_eq!(config.default_project_name, "other");
    }
}
