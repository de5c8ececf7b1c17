//! Verbatim copy of the static asset subtree into the output root.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::builder::BuildError;

/// Recursively copy the contents of `src` into `dst`, creating `dst` and
/// any intermediate directories. File bytes are duplicated exactly and the
/// source tree is left untouched. Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, BuildError> {
    let mut copied = 0;

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| BuildError::Io {
            path: e.path().unwrap_or(src).to_path_buf(),
            source: e.into(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| BuildError::Io {
                path: target.clone(),
                source,
            })?;
        } else {
            fs::copy(entry.path(), &target).map_err(|source| BuildError::Io {
                path: target.clone(),
                source,
            })?;
            tracing::info!("Copied {} -> {}", entry.path().display(), target.display());
            copied += 1;
        }
    }

    Ok(copied)
}
