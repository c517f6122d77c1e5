//! Fatal error taxonomy for the configure-and-build workflow
//!
//! Every failure the core can hit is a variant of [`WizardError`]. Core
//! functions return it up the stack; only the binary's top-level handler
//! prints the diagnostic and picks the exit status.

use crate::config::ConfigError;
use crate::probe::ToolVersion;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{program} is not installed or not found in PATH")]
    ToolMissing { program: String },

    #[error("{program} is installed but returned an error: {message}")]
    ToolError { program: String, message: String },

    #[error("Unable to determine {program} version from output: {output:?}")]
    VersionParseError { program: String, output: String },

    #[error("{program} version must be {required}+ (found {found})")]
    VersionTooOld {
        program: String,
        found: ToolVersion,
        required: ToolVersion,
    },

    #[error("Unable to fetch generator options: {0}")]
    CapabilityQueryError(String),

    #[error("Settings file {path} is unusable: {reason}")]
    CorruptSettings { path: PathBuf, reason: String },

    #[error("Failed to write settings file {path}: {source}")]
    PersistenceError { path: PathBuf, source: io::Error },

    #[error("Invalid {field}, please try again")]
    InvalidInput { field: &'static str, value: String },

    #[error("The Visual Studio generator requires an MSVC-like compiler (got {compiler} for {generator})")]
    IncompatibleSelection { generator: String, compiler: String },

    #[error("Input closed before a valid {field} was entered")]
    InputClosed { field: &'static str },

    #[error("Console I/O error: {0}")]
    Console(#[from] io::Error),

    #[error("Failed when running CMake configuration: {0}")]
    ConfigureFailed(String),

    #[error("Failed when building the project: {0}")]
    BuildFailed(String),

    #[error("Couldn't clean {path}: {source}")]
    CleanupFailed { path: PathBuf, source: io::Error },

    #[error("Error reading {path}: folder doesn't exist")]
    SourceScanFailed { path: PathBuf },
}

impl WizardError {
    /// Short tag naming the precondition or phase that failed.
    pub fn label(&self) -> &'static str {
        match self {
            WizardError::Config(_) => "config",
            WizardError::ToolMissing { .. } => "tool-missing",
            WizardError::ToolError { .. } => "tool-error",
            WizardError::VersionParseError { .. } => "version-parse",
            WizardError::VersionTooOld { .. } => "version-too-old",
            WizardError::CapabilityQueryError(_) => "capabilities",
            WizardError::CorruptSettings { .. } => "corrupt-settings",
            WizardError::PersistenceError { .. } => "persistence",
            WizardError::InvalidInput { .. } => "invalid-input",
            WizardError::IncompatibleSelection { .. } => "incompatible-selection",
            WizardError::InputClosed { .. } => "input-closed",
            WizardError::Console(_) => "console",
            WizardError::ConfigureFailed(_) => "configure",
            WizardError::BuildFailed(_) => "build",
            WizardError::CleanupFailed { .. } => "clean",
            WizardError::SourceScanFailed { .. } => "lines",
        }
    }

    /// Process exit status for this error. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Formats the `[ERROR]` line written before the process exits.
    pub fn diagnostic(&self) -> String {
        format!("[ERROR] ({}): {}", self.label(), self)
    }
}

pub type Result<T> = std::result::Result<T, WizardError>;
