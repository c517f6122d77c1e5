//! Two-phase configure-then-build execution

use crate::error::{Result, WizardError};
use crate::process::{CommandRunner, Invocation};
use crate::settings::BuildConfiguration;
use crate::workflow::{enter, Stage};
use std::io::Write;
use tracing::info;

pub struct BuildRunner<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
    build_dir: String,
}

impl<'a> BuildRunner<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        program: impl Into<String>,
        build_dir: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            program: program.into(),
            build_dir: build_dir.into(),
        }
    }

    /// `cmake -G <generator> -DCMAKE_BUILD_TYPE=<type> -DCMAKE_CXX_COMPILER=<cc> -B <dir>`
    pub fn configure_invocation(&self, config: &BuildConfiguration) -> Invocation {
        Invocation::new(&self.program)
            .arg("-G")
            .arg(&config.generator)
            .arg(format!("-DCMAKE_BUILD_TYPE={}", config.build_type))
            .arg(format!("-DCMAKE_CXX_COMPILER={}", config.compiler))
            .arg("-B")
            .arg(&self.build_dir)
    }

    /// `cmake --build <dir> --parallel`
    pub fn build_invocation(&self) -> Invocation {
        Invocation::new(&self.program)
            .arg("--build")
            .arg(&self.build_dir)
            .arg("--parallel")
    }

    /// Runs configure, then build. The build is never started if configure
    /// fails. Each invocation line is echoed to `out` before it runs.
    pub fn run(&self, config: &BuildConfiguration, out: &mut dyn Write) -> Result<()> {
        enter(Stage::Configure);
        let configure = self.configure_invocation(config);
        writeln!(out, "\nRunning CMake configuration:")?;
        writeln!(out, "> {}", configure)?;
        self.execute(&configure, WizardError::ConfigureFailed)?;
        info!(build_dir = %self.build_dir, "Configuration finished");

        enter(Stage::Build);
        let build = self.build_invocation();
        writeln!(out, "\nBuilding the project:")?;
        writeln!(out, "> {}", build)?;
        self.execute(&build, WizardError::BuildFailed)?;
        info!(build_dir = %self.build_dir, "Build finished");

        Ok(())
    }

    fn execute(&self, invocation: &Invocation, fail: fn(String) -> WizardError) -> Result<()> {
        let status = self
            .runner
            .run(invocation)
            .map_err(|e| fail(format!("could not start {}: {}", invocation.program, e)))?;

        if !status.success() {
            return Err(fail(status.to_string()));
        }
        Ok(())
    }
}
