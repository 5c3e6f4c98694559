//! Project materialization
//!
//! Copies a template directory into a new project, restoring reserved file
//! names at the top level and stamping the project name into the manifest.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::catalog::{RenameRules, Template};
use crate::copy::copy_entry;
use crate::error::{Result, ScaffoldError};
use crate::name::ProjectName;

/// Package manifest file patched with the project name
pub const MANIFEST_FILE: &str = "package.json";

/// Writes a template into a destination directory
pub struct ProjectMaterializer<'a> {
    templates_root: &'a Path,
    renames: &'a RenameRules,
}

impl<'a> ProjectMaterializer<'a> {
    /// Create a materializer reading templates from `templates_root`
    #[must_use]
    pub const fn new(templates_root: &'a Path, renames: &'a RenameRules) -> Self {
        Self {
            templates_root,
            renames,
        }
    }

    /// Source directory for a template
    #[must_use]
    pub fn source_dir(&self, template: &Template) -> PathBuf {
        self.templates_root.join(template.directory())
    }

    /// Materialize `template` into `destination`
    ///
    /// The destination is created if missing; an existing directory is
    /// reused. Returns the top-level paths written, in write order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the template directory does not exist
    /// - the destination cannot be created
    /// - the manifest is not a JSON object
    /// - any copy fails
    pub fn materialize(
        &self,
        template: &Template,
        name: &ProjectName,
        destination: &Path,
    ) -> Result<Vec<PathBuf>> {
        let source = self.source_dir(template);
        if !source.is_dir() {
            return Err(ScaffoldError::TemplateNotFound(source));
        }

        create_destination(destination)?;

        let mut entries = fs::read_dir(&source)
            .map_err(ScaffoldError::io("read directory", &source))?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(ScaffoldError::io("read directory", &source))?;
        entries.sort_by_key(fs::DirEntry::file_name);

        let mut written = Vec::with_capacity(entries.len());
        for entry in entries {
            let file_name = entry.file_name();

            let target = if file_name == MANIFEST_FILE {
                let target = destination.join(MANIFEST_FILE);
                write_manifest(&entry.path(), &target, name)?;
                target
            } else {
                let target = destination.join(self.renames.destination_name(&file_name));
                copy_entry(&entry.path(), &target)?;
                target
            };

            debug!(entry = %target.display(), "wrote template entry");
            written.push(target);
        }

        info!(
            template = template.directory(),
            project = %name,
            entries = written.len(),
            "materialized project"
        );
        Ok(written)
    }
}

/// Create the destination, reusing an existing directory
fn create_destination(destination: &Path) -> Result<()> {
    if destination.is_dir() {
        debug!(path = %destination.display(), "reusing existing destination directory");
        return Ok(());
    }
    fs::create_dir(destination).map_err(ScaffoldError::io("create directory", destination))
}

/// Copy the manifest from `src` to `dest` with its `name` replaced
fn write_manifest(src: &Path, dest: &Path, name: &ProjectName) -> Result<()> {
    let raw = fs::read_to_string(src).map_err(ScaffoldError::io("read manifest", src))?;
    let patched = patch_manifest(&raw, name.as_str()).map_err(|err| match err {
        ManifestPatchError::Json(source) => ScaffoldError::Manifest {
            path: src.to_path_buf(),
            source,
        },
        ManifestPatchError::NotObject => ScaffoldError::ManifestNotObject(src.to_path_buf()),
    })?;
    fs::write(dest, patched).map_err(ScaffoldError::io("write manifest", dest))
}

enum ManifestPatchError {
    Json(serde_json::Error),
    NotObject,
}

/// Replace the top-level `name` of a JSON manifest
///
/// Key order is preserved and the output uses 2-space indentation with no
/// trailing newline.
fn patch_manifest(raw: &str, name: &str) -> std::result::Result<String, ManifestPatchError> {
    let mut manifest: Value = serde_json::from_str(raw).map_err(ManifestPatchError::Json)?;
    let Value::Object(fields) = &mut manifest else {
        return Err(ManifestPatchError::NotObject);
    };
    fields.insert("name".to_string(), Value::String(name.to_string()));
    serde_json::to_string_pretty(&manifest).map_err(ManifestPatchError::Json)
}
