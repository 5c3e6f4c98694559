//! Project creation command
//!
//! Runs the whole interactive flow: pick a template, name the project, deal
//! with an existing directory, then write the files.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::catalog::{RenameRules, TemplateCatalog};
use crate::config::ScaffoldConfig;
use crate::destination::{self, Destination};
use crate::materialize::ProjectMaterializer;
use crate::name::ProjectName;
use crate::prompt::{Prompter, Selector};

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Project written to disk
    Created {
        /// Sanitized project name
        name: ProjectName,
        /// Project directory
        path: PathBuf,
        /// Template directory name
        template: String,
        /// Top-level entries written
        entries: Vec<PathBuf>,
    },
    /// User declined to overwrite an occupied directory; nothing was changed
    Aborted {
        /// Directory that was left untouched
        path: PathBuf,
    },
}

/// Create a new project from the template catalog
pub struct CreateCommand<'a, P: Prompter + ?Sized> {
    config: &'a ScaffoldConfig,
    catalog: &'a TemplateCatalog,
    renames: &'a RenameRules,
    prompter: &'a P,
}

impl<'a, P: Prompter + ?Sized> CreateCommand<'a, P> {
    /// Create a new command instance
    #[must_use]
    pub const fn new(
        config: &'a ScaffoldConfig,
        catalog: &'a TemplateCatalog,
        renames: &'a RenameRules,
        prompter: &'a P,
    ) -> Self {
        Self {
            config,
            catalog,
            renames,
            prompter,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt fails, the destination cannot be
    /// inspected or cleared, or materialization fails.
    pub fn execute(&self) -> Result<Outcome> {
        let selector = Selector::new(self.prompter);

        let template = selector
            .choose_template(self.catalog.root())
            .context("Failed to choose a template")?;
        let raw_name = selector
            .choose_project_name_with_default(&self.config.default_project_name)
            .context("Failed to read project name")?;
        let name = ProjectName::from_raw(&raw_name);
        // an empty name would resolve to the working directory itself
        if name.is_empty() {
            anyhow::bail!("Invalid project name: '{raw_name}' has no usable characters");
        }
        let path = self.config.destination(name.as_str());
        debug!(raw = %raw_name, project = %name, path = %path.display(), "resolved project name");

        let state = Destination::inspect(&path)
            .with_context(|| format!("Failed to inspect destination: {}", path.display()))?;
        if state.needs_confirmation() {
            let overwrite = selector
                .confirm_overwrite(Path::new(name.as_str()))
                .context("Failed to confirm overwrite")?;
            if !overwrite {
                info!(path = %path.display(), "overwrite declined");
                return Ok(Outcome::Aborted { path });
            }
            destination::clear(&path)
                .with_context(|| format!("Failed to clear destination: {}", path.display()))?;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(format!("Copying template {}...", template.directory()));

        let materializer = ProjectMaterializer::new(&self.config.templates_root, self.renames);
        let result = materializer.materialize(template, &name, &path);
        spinner.finish_and_clear();

        let entries = result.with_context(|| {
            format!(
                "Failed to create project '{name}' from template '{}'",
                template.directory()
            )
        })?;

        Ok(Outcome::Created {
            name,
            path,
            template: template.directory().to_string(),
            entries,
        })
    }
}
