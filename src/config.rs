//! Runtime configuration for cmakewiz
//!
//! The core flow reads no environment variables. Every path and name it
//! depends on is collected here with fixed defaults, so tests can point the
//! whole workflow at a temporary directory.
//!
//! # Defaults
//!
//! - tool program: `cmake`
//! - minimum tool version: `3.16.0`
//! - settings file: `build_settings.json`
//! - build output directory: `build`
//! - binary output directory: `bin`
//! - source roots for `lines`: `project`
//! - counted extensions: `.cpp .cc .c .hpp .hh .h .tpp`
//!
//! # Example
//!
//! ```
//! use cmakewiz::WizardConfig;
//!
//! let config = WizardConfig::default();
//! config.validate().expect("defaults are valid");
//! assert_eq!(config.tool_program, "cmake");
//! ```

use crate::probe::{ToolVersion, MINIMUM_VERSION};
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_TOOL_PROGRAM: &str = "cmake";
const DEFAULT_SETTINGS_FILE: &str = "build_settings.json";
const DEFAULT_BUILD_DIR: &str = "build";
const DEFAULT_BIN_DIR: &str = "bin";
const DEFAULT_SOURCE_ROOT: &str = "project";
const DEFAULT_SOURCE_EXTENSIONS: [&str; 7] = ["cpp", "cc", "c", "hpp", "hh", "h", "tpp"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Build tool executable, looked up on PATH
    pub tool_program: String,

    /// Oldest accepted tool version
    pub minimum_version: ToolVersion,

    /// Where the chosen configuration is persisted
    pub settings_path: PathBuf,

    /// Output directory passed to the configure and build invocations
    pub build_dir: PathBuf,

    /// Directory holding built binaries; emptied by `clean`
    pub bin_dir: PathBuf,

    /// Roots scanned by `lines`
    pub source_roots: Vec<PathBuf>,

    /// Lower-case file extensions, without the dot, counted by `lines`
    pub source_extensions: Vec<String>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            tool_program: DEFAULT_TOOL_PROGRAM.to_string(),
            minimum_version: MINIMUM_VERSION,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
            build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
            bin_dir: PathBuf::from(DEFAULT_BIN_DIR),
            source_roots: vec![PathBuf::from(DEFAULT_SOURCE_ROOT)],
            source_extensions: DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

impl WizardConfig {
    /// Default configuration with every relative path resolved under `root`.
    pub fn rooted_at(root: &Path) -> Self {
        let defaults = Self::default();
        Self {
            settings_path: root.join(&defaults.settings_path),
            build_dir: root.join(&defaults.build_dir),
            bin_dir: root.join(&defaults.bin_dir),
            source_roots: defaults
                .source_roots
                .iter()
                .map(|r| root.join(r))
                .collect(),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tool_program.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Tool program cannot be empty".to_string(),
            ));
        }
        if self.settings_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Settings path cannot be empty".to_string(),
            ));
        }
        if self.build_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Build directory cannot be empty".to_string(),
            ));
        }
        if self.source_extensions.iter().any(|e| e.starts_with('.')) {
            return Err(ConfigError::ValidationFailed(
                "Source extensions must not include the leading dot".to_string(),
            ));
        }
        Ok(())
    }

    /// Build directory as passed verbatim on the tool command line.
    pub fn build_dir_arg(&self) -> String {
        self.build_dir.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WizardConfig::default();
        assert_eq!(config.tool_program, "cmake");
        assert_eq!(config.minimum_version, ToolVersion::new(3, 16, 0));
        assert_eq!(config.settings_path, PathBuf::from("build_settings.json"));
        assert_eq!(config.build_dir_arg(), "build");
        assert_eq!(config.bin_dir, PathBuf::from("bin"));
        assert_eq!(config.source_extensions.len(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rooted_at() {
        let config = WizardConfig::rooted_at(Path::new("/tmp/proj"));
        assert_eq!(
            config.settings_path,
            PathBuf::from("/tmp/proj/build_settings.json")
        );
        assert_eq!(config.build_dir, PathBuf::from("/tmp/proj/build"));
        assert_eq!(config.source_roots, vec![PathBuf::from("/tmp/proj/project")]);
        assert_eq!(config.tool_program, "cmake");
    }

    #[test]
    fn test_validation_errors() {
        let config = WizardConfig {
            tool_program: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WizardConfig {
            build_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WizardConfig {
            source_extensions: vec![".cpp".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
