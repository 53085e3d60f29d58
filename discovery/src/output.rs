//! Atomic output writing with restrictive permissions.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{MergeError, Result};

/// Writes `contents` to `path`, replacing any existing file atomically.
///
/// The text is written to a temporary file in the destination directory,
/// permissions are set to `mode`, and the file is renamed into place. A
/// failed write never leaves a partial or truncated file at `path`; whatever
/// was there before stays untouched.
///
/// `mode` is applied on Unix and ignored on other platforms.
///
/// # Errors
///
/// Returns [`MergeError::Write`] naming `path` if any step fails.
pub fn write_output(path: &Path, contents: &str, mode: u32) -> Result<()> {
    let write_err = |source: std::io::Error| MergeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    set_mode(file.as_file(), mode).map_err(write_err)?;
    file.persist(path).map_err(|persist| write_err(persist.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote merged schema");
    Ok(())
}

#[cfg(unix)]
fn set_mode(file: &std::fs::File, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &std::fs::File, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_writes_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.graphql");

        write_output(&path, "type Query { hello: String }\n", 0o600).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "type Query { hello: String }\n");
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.graphql");
        fs::write(&path, "stale").unwrap();

        write_output(&path, "fresh", 0o600).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[cfg(unix)]
    #[test]
    fn test_applies_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.graphql");

        write_output(&path, "type Query { hello: String }\n", 0o640).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn test_unwritable_destination_is_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("out.graphql");

        let err = write_output(&path, "x", 0o600).unwrap_err();
        match err {
            MergeError::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected Write, got {other:?}"),
        }
    }
}
