//! The merge pipeline: discover, parse, concatenate, serialize, write.
//!
//! A linear pipeline with no retries: walk the tree, fail on zero matches,
//! parse every file in discovery order (aborting on the first failure),
//! concatenate the documents, print the result, and write it atomically.
//! Parsing can optionally run on a bounded thread pool; results are put back
//! into discovery order before concatenation, so the observable behavior
//! matches the sequential pipeline.

use std::path::{Path, PathBuf};

use tracing::info;

use sdl_merge_core::{SchemaDocument, concat_documents};

use crate::config::MergeConfig;
use crate::error::{MergeError, Result};
use crate::output::write_output;
use crate::reader::read_schema_file;
use crate::report::{FileReport, MergeReport};
use crate::walk::walk_matching;

/// Result of a successful merge.
#[derive(Debug)]
pub struct MergeOutcome {
    /// The merged SDL text, exactly as written to the output file.
    pub merged: String,
    /// Summary of the run.
    pub report: MergeReport,
}

/// Merges every schema file under `root` whose path ends with `suffix` into
/// one document written to `output`, using default configuration.
///
/// Returns the merged SDL text on success.
///
/// # Errors
///
/// Fails with [`MergeError::Traversal`] if the tree cannot be walked,
/// [`MergeError::NoMatches`] if nothing matches the suffix,
/// [`MergeError::Read`] / [`MergeError::Syntax`] (naming the file) on the
/// first unreadable or invalid input, and [`MergeError::Write`] if the
/// output cannot be written. On any failure no output file is produced and
/// any pre-existing output file is left untouched.
///
/// # Examples
///
/// ```no_run
/// use sdl_merge_discovery::merge_schemas;
///
/// let merged = merge_schemas("schemas/", ".graphql", "schema.graphql").unwrap();
/// assert!(merged.contains("type Query"));
/// ```
pub fn merge_schemas(
    root: impl AsRef<Path>,
    suffix: &str,
    output: impl AsRef<Path>,
) -> Result<String> {
    let outcome = merge_schemas_with_config(root, suffix, output, &MergeConfig::default())?;
    Ok(outcome.merged)
}

/// Like [`merge_schemas`], with explicit configuration; also returns the run
/// report.
pub fn merge_schemas_with_config(
    root: impl AsRef<Path>,
    suffix: &str,
    output: impl AsRef<Path>,
    config: &MergeConfig,
) -> Result<MergeOutcome> {
    let root = root.as_ref();
    let output = output.as_ref();

    let mut paths = walk_matching(root, suffix)?;
    if config.sort_paths {
        paths.sort();
    }
    if paths.is_empty() {
        return Err(MergeError::NoMatches {
            root: root.to_path_buf(),
            suffix: suffix.to_string(),
        });
    }
    info!(
        root = %root.display(),
        suffix,
        files = paths.len(),
        "merging schema files"
    );

    let documents = parse_all(&paths, config.jobs)?;

    let files = paths
        .iter()
        .zip(&documents)
        .map(|(path, document)| FileReport {
            path: path.display().to_string(),
            definitions: document.definition_count(),
        })
        .collect();

    let Some(merged) = concat_documents(documents) else {
        return Err(MergeError::NoMatches {
            root: root.to_path_buf(),
            suffix: suffix.to_string(),
        });
    };

    let text = merged.to_sdl();
    write_output(output, &text, config.output_mode)?;

    let report = MergeReport::new(root, suffix, output, files, &merged, &text);
    info!(
        definitions = report.total_definitions,
        output = %output.display(),
        "merge complete"
    );

    Ok(MergeOutcome {
        merged: text,
        report,
    })
}

fn parse_all(paths: &[PathBuf], jobs: Option<usize>) -> Result<Vec<SchemaDocument>> {
    match jobs {
        None | Some(1) => paths.iter().map(|path| read_schema_file(path)).collect(),
        Some(requested) => parse_parallel(paths, requested),
    }
}

fn parse_parallel(paths: &[PathBuf], requested: usize) -> Result<Vec<SchemaDocument>> {
    use rayon::prelude::*;

    let jobs = if requested == 0 {
        default_parallel_jobs(paths.len())
    } else {
        requested
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .expect("failed to build rayon thread pool");

    let mut results: Vec<(usize, Result<SchemaDocument>)> = pool.install(|| {
        paths
            .par_iter()
            .enumerate()
            .map(|(index, path)| (index, read_schema_file(path)))
            .collect()
    });

    // Re-order to discovery order so the failure reported below is the
    // earliest failing file, matching the sequential pipeline.
    results.sort_by_key(|(index, _)| *index);

    let mut documents = Vec::with_capacity(results.len());
    for (_, result) in results {
        documents.push(result?);
    }
    Ok(documents)
}

fn default_parallel_jobs(file_count: usize) -> usize {
    let cpu_count = std::thread::available_parallelism()
        .map(|parallelism| parallelism.get())
        .unwrap_or(4);
    cpu_count.min(8).max(1).min(file_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parallel_jobs_is_non_zero_and_bounded() {
        assert_eq!(default_parallel_jobs(0), 1);
        assert_eq!(default_parallel_jobs(1), 1);
        assert!(default_parallel_jobs(100) >= 1);
        assert!(default_parallel_jobs(100) <= 8);
    }
}
