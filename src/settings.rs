//! Persisted build configuration
//!
//! The configuration lives in a small JSON file at a fixed relative path.
//! Its absence means "first run, ask the user"; its presence means "replay
//! the stored choice". There is no locking and no schema migration.

use crate::error::{Result, WizardError};
use crate::options::{check_compatibility, BuildOptions, BuildType, Compiler};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The user's generator, compiler and build type selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfiguration {
    pub generator: String,
    pub compiler: Compiler,
    pub build_type: BuildType,
}

impl BuildConfiguration {
    /// Assembles a record, rejecting Visual Studio generators paired with a
    /// non-MSVC compiler.
    pub fn new(generator: impl Into<String>, compiler: Compiler, build_type: BuildType) -> Result<Self> {
        let generator = generator.into();
        check_compatibility(&generator, compiler)?;
        Ok(Self {
            generator,
            compiler,
            build_type,
        })
    }

    /// Checks the record against the option sets probed this run.
    pub fn validate(&self, options: &BuildOptions) -> std::result::Result<(), String> {
        if options.parse_generator(&self.generator).is_err() {
            return Err(format!(
                "generator '{}' is not offered by the installed tool",
                self.generator
            ));
        }
        check_compatibility(&self.generator, self.compiler).map_err(|e| e.to_string())
    }
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<BuildConfiguration> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.corrupt(e.to_string()))?;
        let config: BuildConfiguration =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;

        debug!(path = %self.path.display(), ?config, "Loaded build settings");
        Ok(config)
    }

    /// Writes the record as 4-space indented JSON, replacing any previous
    /// content. A record breaking the generator/compiler rule is never
    /// written.
    pub fn save(&self, config: &BuildConfiguration) -> Result<()> {
        check_compatibility(&config.generator, config.compiler)?;

        let json = to_pretty_json(config).map_err(|e| WizardError::PersistenceError {
            path: self.path.clone(),
            source: e.into(),
        })?;

        fs::write(&self.path, json).map_err(|source| WizardError::PersistenceError {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), "Saved build settings");
        Ok(())
    }

    pub(crate) fn corrupt(&self, reason: String) -> WizardError {
        WizardError::CorruptSettings {
            path: self.path.clone(),
            reason,
        }
    }
}

fn to_pretty_json(config: &BuildConfiguration) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;
    Ok(buf)
}
