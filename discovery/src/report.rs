//! Serializable summaries of merge runs.
//!
//! A [`MergeReport`] records what a run read, what it produced, and a
//! checksum of the written text, so build tooling can log the run or detect
//! merged-schema drift between builds.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use sdl_merge_core::{SchemaDocument, kind_counts};

/// One input file's contribution to the merged document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the source schema file.
    pub path: String,
    /// Number of top-level definitions this file contributed.
    pub definitions: usize,
}

/// Summary of one merge run.
///
/// The `files` list is in merge order, so the merged document can be split
/// back into per-file slices using the per-file definition counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// ISO-8601 timestamp for report creation.
    pub generated_at: String,
    /// Root directory that was walked.
    pub root: String,
    /// Suffix pattern the walk matched against.
    pub suffix: String,
    /// Inputs in merge order, with their definition counts.
    pub files: Vec<FileReport>,
    /// Total definitions in the merged document.
    pub total_definitions: usize,
    /// Definition counts keyed by kind label ("type", "enum", ...).
    pub kind_counts: BTreeMap<String, usize>,
    /// Where the merged document was written.
    pub output_path: String,
    /// Hex SHA-256 of the written text.
    pub output_sha256: String,
}

impl MergeReport {
    pub(crate) fn new(
        root: &Path,
        suffix: &str,
        output: &Path,
        files: Vec<FileReport>,
        merged: &SchemaDocument,
        text: &str,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            root: root.display().to_string(),
            suffix: suffix.to_string(),
            files,
            total_definitions: merged.definition_count(),
            kind_counts: kind_counts(merged.definitions())
                .into_iter()
                .map(|(kind, count)| (kind.to_string(), count))
                .collect(),
            output_path: output.display().to_string(),
            output_sha256: sha256_hex(text),
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn sha256_hex(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}
