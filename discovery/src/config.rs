//! Merge run configuration.
//!
//! Defines the YAML-serializable settings that control output permissions,
//! path ordering, and parse parallelism.
//!
//! # Example YAML
//!
//! ```yaml
//! output_mode: 0o600
//! sort_paths: true
//! jobs: 4
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, Result};

/// Default permission bits for the merged output file: owner read/write
/// only.
pub const DEFAULT_OUTPUT_MODE: u32 = 0o600;

/// Settings for one merge run.
///
/// # Examples
///
/// ```
/// use sdl_merge_discovery::MergeConfig;
///
/// let config = MergeConfig::default();
/// assert_eq!(config.output_mode, 0o600);
/// assert!(!config.sort_paths);
/// assert!(config.jobs.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Permission bits applied to the output file. Honored on Unix; ignored
    /// elsewhere.
    pub output_mode: u32,
    /// Sort discovered paths lexicographically before merging, instead of
    /// keeping raw directory-traversal order.
    pub sort_paths: bool,
    /// Number of parallel parse jobs. `None` parses sequentially; `Some(0)`
    /// picks an adaptive job count from the host's CPU count.
    pub jobs: Option<usize>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            output_mode: DEFAULT_OUTPUT_MODE,
            sort_paths: false,
            jobs: None,
        }
    }
}

impl MergeConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::ConfigIo`] if the file cannot be opened, or
    /// [`MergeError::ConfigFormat`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MergeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::ConfigIo`] if the file cannot be created, or
    /// [`MergeError::ConfigFormat`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| MergeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = MergeConfig::default();
        assert_eq!(config.output_mode, 0o600);
        assert!(!config.sort_paths);
        assert_eq!(config.jobs, None);
    }

    #[test]
    fn test_deserialize_partial_yaml_fills_defaults() {
        let config: MergeConfig = serde_yaml::from_str("jobs: 4\n").unwrap();
        assert_eq!(config.jobs, Some(4));
        assert_eq!(config.output_mode, 0o600);
        assert!(!config.sort_paths);
    }

    #[test]
    fn test_deserialize_octal_output_mode() {
        let config: MergeConfig = serde_yaml::from_str("output_mode: 0o644\n").unwrap();
        assert_eq!(config.output_mode, 0o644);
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("merge.yml");

        let original = MergeConfig {
            output_mode: 0o640,
            sort_paths: true,
            jobs: Some(2),
        };
        original.save(&path).unwrap();

        let loaded = MergeConfig::load(&path).unwrap();
        assert_eq!(loaded.output_mode, original.output_mode);
        assert_eq!(loaded.sort_paths, original.sort_paths);
        assert_eq!(loaded.jobs, original.jobs);
    }

    #[test]
    fn test_load_missing_file_is_config_io_error() {
        let dir = TempDir::new().unwrap();
        let err = MergeConfig::load(dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, MergeError::ConfigIo { .. }));
    }
}
