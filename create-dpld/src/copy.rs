//! Recursive file copy

use std::fs;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};

/// Copy a file or directory tree from `src` to `dest`
///
/// Symlinks are followed to decide whether `src` is a directory. Directories
/// are recreated and their descendants copied depth-first under the same
/// relative names; files are copied byte-for-byte.
///
/// # Errors
///
/// Returns an error if `src` cannot be read or anything under `dest` cannot
/// be created.
pub fn copy_entry(src: &Path, dest: &Path) -> Result<()> {
    let metadata = fs::metadata(src).map_err(ScaffoldError::io("read metadata of", src))?;

    if metadata.is_dir() {
        copy_dir(src, dest)
    } else {
        copy_file(src, dest)
    }
}

/// Copy every descendant of `src` into `dest`, creating `dest` if needed
///
/// # Errors
///
/// Returns an error if the walk fails or any entry cannot be copied.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(ScaffoldError::io("create directory", dest))?;

    let walker = WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(ScaffoldError::io("create directory", &target))?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }

    Ok(())
}

fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    trace!(src = %src.display(), dest = %dest.display(), "copying file");
    fs::copy(src, dest).map_err(ScaffoldError::io("copy file to", dest))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_single_file_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("logo.bin");
        let bytes = [0_u8, 159, 146, 150, 255, 10];
        fs::write(&src, bytes).unwrap();

        let dest = temp.path().join("copy.bin");
        copy_entry(&src, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), bytes);
    }

    #[test]
    fn test_copy_tree_preserves_structure() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("pages/api")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("pages/index.js"), "index").unwrap();
        fs::write(src.join("pages/api/hello.js"), "hello").unwrap();
        fs::write(src.join("_gitignore"), "node_modules").unwrap();

        let dest = temp.path().join("dest");
        copy_entry(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("pages/index.js")).unwrap(), "index");
        assert_eq!(
            fs::read_to_string(dest.join("pages/api/hello.js")).unwrap(),
            "hello"
        );
        assert!(dest.join("empty").is_dir());
        assert!(dest.join("_gitignore").is_file());
        assert!(!dest.join(".gitignore").exists());
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = copy_entry(&temp.path().join("nope"), &temp.path().join("out")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
