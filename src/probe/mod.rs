//! Environment probing for the external build tool
//!
//! Three checks run once at start-up, in a fixed order:
//!
//! 1. the tool can be executed at all ([`ToolProbe::verify_installed`])
//! 2. its reported version meets the minimum ([`ToolProbe::verify_version`])
//! 3. its capability report lists the available generators
//!    ([`ToolProbe::list_generators`])
//!
//! Any failure is fatal. [`ToolProbe::probe`] runs all three and returns the
//! resulting [`ToolCapabilities`].

mod capabilities;
mod version;

pub use capabilities::{CapabilityReport, GeneratorEntry};
pub use version::ToolVersion;

use crate::error::{Result, WizardError};
use crate::process::{CommandOutput, CommandRunner, Invocation};
use std::io;
use tracing::{debug, info};

/// Oldest tool release the configure invocation is known to work with.
pub const MINIMUM_VERSION: ToolVersion = ToolVersion::new(3, 16, 0);

/// What the installed tool reported about itself this run. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCapabilities {
    pub version: ToolVersion,
    pub generators: Vec<String>,
}

pub struct ToolProbe<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
    minimum: ToolVersion,
}

impl<'a> ToolProbe<'a> {
    pub fn new(runner: &'a dyn CommandRunner, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
            minimum: MINIMUM_VERSION,
        }
    }

    pub fn with_minimum(mut self, minimum: ToolVersion) -> Self {
        self.minimum = minimum;
        self
    }

    /// Fails with `ToolMissing` when the program cannot be started and with
    /// `ToolError` when it starts but exits unsuccessfully.
    pub fn verify_installed(&self) -> Result<()> {
        let output = self.version_output()?;
        if !output.success() {
            return Err(WizardError::ToolError {
                program: self.program.clone(),
                message: failure_message(&output),
            });
        }
        debug!(program = %self.program, "Tool is installed");
        Ok(())
    }

    pub fn verify_version(&self) -> Result<ToolVersion> {
        let output = self.version_output()?;
        if !output.success() {
            return Err(WizardError::ToolError {
                program: self.program.clone(),
                message: failure_message(&output),
            });
        }

        let version =
            ToolVersion::parse(&output.stdout).ok_or_else(|| WizardError::VersionParseError {
                program: self.program.clone(),
                output: output.stdout.trim().to_string(),
            })?;

        if version < self.minimum {
            return Err(WizardError::VersionTooOld {
                program: self.program.clone(),
                found: version,
                required: self.minimum,
            });
        }

        debug!(program = %self.program, %version, minimum = %self.minimum, "Tool version accepted");
        Ok(version)
    }

    pub fn list_generators(&self) -> Result<Vec<String>> {
        let invocation = Invocation::new(&self.program).args(["-E", "capabilities"]);
        let output = self
            .runner
            .capture(&invocation)
            .map_err(|e| WizardError::CapabilityQueryError(e.to_string()))?;

        if !output.success() {
            return Err(WizardError::CapabilityQueryError(failure_message(&output)));
        }

        let report = CapabilityReport::from_json(&output.stdout)
            .map_err(|e| WizardError::CapabilityQueryError(e.to_string()))?;
        let generators = report.generator_names();

        debug!(count = generators.len(), "Discovered generators");
        Ok(generators)
    }

    /// Runs every check in order, stopping at the first failure.
    pub fn probe(&self) -> Result<ToolCapabilities> {
        self.verify_installed()?;
        let version = self.verify_version()?;
        let generators = self.list_generators()?;

        info!(program = %self.program, %version, generators = generators.len(), "Build tool ready");
        Ok(ToolCapabilities {
            version,
            generators,
        })
    }

    fn version_output(&self) -> Result<CommandOutput> {
        let invocation = Invocation::new(&self.program).arg("--version");
        self.runner.capture(&invocation).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                WizardError::ToolMissing {
                    program: self.program.clone(),
                }
            } else {
                WizardError::ToolError {
                    program: self.program.clone(),
                    message: e.to_string(),
                }
            }
        })
    }
}

fn failure_message(output: &CommandOutput) -> String {
    let stderr = output.stderr.trim();
    if stderr.is_empty() {
        output.status.to_string()
    } else {
        format!("{} ({})", output.status, stderr)
    }
}
