//! Process-level flow: probe, obtain settings, configure, build
//!
//! ```text
//! START -> PROBE_ENV -> (settings present ? LOAD : WIZARD) -> CONFIGURE -> BUILD -> DONE
//! ```
//!
//! Any stage may end the run with a [`WizardError`]. Nothing is retried and
//! no stage is entered twice.

use crate::config::WizardConfig;
use crate::error::Result;
use crate::options::BuildOptions;
use crate::probe::{ToolCapabilities, ToolProbe};
use crate::process::CommandRunner;
use crate::runner::BuildRunner;
use crate::settings::{BuildConfiguration, SettingsStore};
use crate::wizard::ConfigWizard;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ProbeEnv,
    LoadSettings,
    Wizard,
    Configure,
    Build,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::ProbeEnv => "probe-env",
            Stage::LoadSettings => "load-settings",
            Stage::Wizard => "wizard",
            Stage::Configure => "configure",
            Stage::Build => "build",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub capabilities: ToolCapabilities,
    pub configuration: BuildConfiguration,
    /// True when the configuration was collected interactively this run.
    pub from_wizard: bool,
}

pub struct Workflow<'a> {
    config: &'a WizardConfig,
    runner: &'a dyn CommandRunner,
}

impl<'a> Workflow<'a> {
    pub fn new(config: &'a WizardConfig, runner: &'a dyn CommandRunner) -> Self {
        Self { config, runner }
    }

    /// Runs the whole flow. `input` is read only if the wizard is needed;
    /// prompts and echoed invocations go to `out`.
    pub fn run<R: BufRead>(&self, input: R, out: &mut dyn Write) -> Result<RunReport> {
        enter(Stage::ProbeEnv);
        let capabilities = ToolProbe::new(self.runner, &self.config.tool_program)
            .with_minimum(self.config.minimum_version)
            .probe()?;
        let options = BuildOptions::from_capabilities(&capabilities);

        let store = SettingsStore::new(&self.config.settings_path);
        let (configuration, from_wizard) = if store.exists() {
            enter(Stage::LoadSettings);
            (load_checked(&store, &options)?, false)
        } else {
            enter(Stage::Wizard);
            let configuration = ConfigWizard::new(input, &mut *out).collect(&options)?;
            store.save(&configuration)?;
            (configuration, true)
        };

        BuildRunner::new(
            self.runner,
            &self.config.tool_program,
            self.config.build_dir_arg(),
        )
        .run(&configuration, out)?;

        enter(Stage::Done);
        Ok(RunReport {
            capabilities,
            configuration,
            from_wizard,
        })
    }
}

/// Loads the persisted record and rejects it if the freshly probed options
/// no longer admit it.
fn load_checked(store: &SettingsStore, options: &BuildOptions) -> Result<BuildConfiguration> {
    let configuration = store.load()?;
    configuration
        .validate(options)
        .map_err(|reason| store.corrupt(reason))?;
    Ok(configuration)
}

/// Records the transition into `stage`. The configure and build stages are
/// entered by [`BuildRunner::run`].
pub(crate) fn enter(stage: Stage) {
    if stage == Stage::Done {
        info!(%stage, "Workflow complete");
    } else {
        debug!(%stage, "Entering stage");
    }
}
