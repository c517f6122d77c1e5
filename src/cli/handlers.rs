//! Command handlers. Each returns the process exit code.

use crate::config::WizardConfig;
use crate::error::WizardError;
use crate::housekeeping::{clean_directories, count_source_lines};
use crate::process::SystemRunner;
use crate::settings::SettingsStore;
use crate::workflow::Workflow;
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{error, info};

pub fn handle_build(config: &WizardConfig) -> i32 {
    let runner = SystemRunner::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match Workflow::new(config, &runner).run(stdin.lock(), &mut stdout) {
        Ok(report) => {
            info!(
                generator = %report.configuration.generator,
                compiler = %report.configuration.compiler,
                build_type = %report.configuration.build_type,
                "Build succeeded"
            );
            0
        }
        Err(err) => report_fatal(&err),
    }
}

pub fn handle_clean(config: &WizardConfig) -> i32 {
    println!("\nDeleting all files in: {:?}", config.build_dir);
    println!("Deleting all files in: {:?}\n", config.bin_dir);

    match clean_directories(&[config.build_dir.as_path(), config.bin_dir.as_path()]) {
        Ok(report) => {
            if report.failed > 0 {
                println!(
                    "Build files deleted ({} removed, {} could not be deleted)\n",
                    report.removed, report.failed
                );
            } else {
                println!("Build files deleted ({} removed)\n", report.removed);
            }
            0
        }
        Err(err) => report_fatal(&err),
    }
}

pub fn handle_lines(config: &WizardConfig) -> i32 {
    let mut total = 0;
    for root in &config.source_roots {
        match count_source_lines(root, &config.source_extensions) {
            Ok(count) => {
                for (path, lines) in &count.files {
                    println!("{}: {} lines", path.display(), lines);
                }
                total += count.total;
            }
            Err(err) => return report_fatal(&err),
        }
    }
    println!("Total lines: {}", total);
    0
}

pub fn handle_show(config: &WizardConfig) -> i32 {
    match show_settings(config, &mut io::stdout()) {
        Ok(()) => 0,
        Err(err) => {
            match err.downcast_ref::<WizardError>() {
                Some(wizard_err) => return report_fatal(wizard_err),
                None => {
                    error!(error = %err, "Failed to show settings");
                    eprintln!("[ERROR]: {:#}", err);
                }
            }
            1
        }
    }
}

pub(crate) fn show_settings(config: &WizardConfig, out: &mut dyn Write) -> Result<()> {
    let store = SettingsStore::new(&config.settings_path);
    if !store.exists() {
        writeln!(
            out,
            "No build settings saved at {}; the next build will ask for them.",
            store.path().display()
        )?;
        return Ok(());
    }

    let settings = store.load()?;
    let json = serde_json::to_string_pretty(&settings)
        .context("Failed to serialize build settings to JSON")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Validates the run configuration, reporting a failure the same way as any
/// other fatal error. Returns the exit code on failure.
pub fn check_config(config: &WizardConfig) -> std::result::Result<(), i32> {
    config
        .validate()
        .map_err(|e| report_fatal(&WizardError::from(e)))
}

fn report_fatal(err: &WizardError) -> i32 {
    error!(label = err.label(), error = %err, "Aborting");
    eprintln!("{}", err.diagnostic());
    err.exit_code()
}
