//! Reading and parsing individual schema files.

use std::fs;
use std::path::Path;

use sdl_merge_core::SchemaDocument;
use tracing::debug;

use crate::error::{MergeError, Result};

/// Reads `path` completely and parses its contents as an SDL document.
///
/// # Errors
///
/// Returns [`MergeError::Read`] if the file cannot be read (missing,
/// permission denied) or [`MergeError::Syntax`] if the contents are not
/// valid SDL. Both carry the file path; the syntax variant also carries the
/// parser's positioned error. No partial parse is returned.
pub fn read_schema_file(path: &Path) -> Result<SchemaDocument> {
    let text = fs::read_to_string(path).map_err(|source| MergeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document = SchemaDocument::parse(&text).map_err(|source| MergeError::Syntax {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        definitions = document.definition_count(),
        "parsed schema file"
    );
    Ok(document)
}
