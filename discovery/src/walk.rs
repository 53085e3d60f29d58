//! Recursive discovery of schema files by path suffix.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MergeError, Result};

/// Collects every non-directory entry under `root` whose path ends with
/// `suffix`, in depth-first pre-order traversal order.
///
/// The suffix is matched against the full path string, so `".graphql"`
/// matches by extension while `"user.graphql"` matches a specific file name.
/// Directory symlinks are not followed; symlinked files are treated as
/// files.
///
/// # Errors
///
/// Returns [`MergeError::Traversal`] naming the first directory that cannot
/// be read (or the root itself, if it is missing). The whole walk aborts on
/// that error; no partial listing is returned.
pub fn walk_matching(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    walk_dir(root, suffix, &mut matches)?;
    debug!(
        root = %root.display(),
        suffix,
        count = matches.len(),
        "discovered schema files"
    );
    Ok(matches)
}

fn walk_dir(dir: &Path, suffix: &str, matches: &mut Vec<PathBuf>) -> Result<()> {
    let traversal = |source: std::io::Error| MergeError::Traversal {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(traversal)? {
        let entry = entry.map_err(traversal)?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(traversal)?;

        if file_type.is_dir() {
            walk_dir(&path, suffix, matches)?;
        } else if path.to_string_lossy().ends_with(suffix) {
            matches.push(path);
        }
    }

    Ok(())
}
