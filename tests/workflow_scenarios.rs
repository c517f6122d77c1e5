//! End-to-end workflow scenarios against a scripted build tool
//!
//! These tests drive [`Workflow`] with a `MockRunner` standing in for
//! `cmake` and a temporary directory standing in for the project root.

use cmakewiz::process::MockResponse;
use cmakewiz::{
    BuildConfiguration, BuildType, Compiler, MockRunner, SettingsStore, WizardConfig,
    WizardError, Workflow,
};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

const GENERATORS: [&str; 4] = [
    "Unix Makefiles",
    "Ninja",
    "Ninja Multi-Config",
    "Visual Studio 17 2022",
];

fn project() -> (TempDir, WizardConfig) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = WizardConfig::rooted_at(dir.path());
    (dir, config)
}

fn run(
    config: &WizardConfig,
    mock: &MockRunner,
    input: &str,
) -> (Result<cmakewiz::RunReport, WizardError>, String) {
    let mut out = Vec::new();
    let result = Workflow::new(config, mock).run(Cursor::new(input.to_string()), &mut out);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_tool_absent_creates_no_settings() {
    let (_dir, config) = project();
    let mock = MockRunner::missing();

    let (result, _) = run(&config, &mock, "Unix Makefiles\ngcc\nDebug\n");
    let err = result.unwrap_err();

    assert!(matches!(err, WizardError::ToolMissing { .. }));
    assert_ne!(err.exit_code(), 0);
    assert!(!config.settings_path.exists());
}

#[test]
fn test_first_run_makefiles_gcc_debug() {
    let (_dir, config) = project();
    let mock = MockRunner::cmake("3.28.3", &GENERATORS);

    let (result, output) = run(&config, &mock, "Unix Makefiles\ngcc\nDebug\n");
    let report = result.expect("workflow should succeed");
    assert!(report.from_wizard);

    let persisted = SettingsStore::new(&config.settings_path).load().unwrap();
    assert_eq!(persisted.generator, "Unix Makefiles");
    assert_eq!(persisted.compiler, Compiler::Gcc);
    assert_eq!(persisted.build_type, BuildType::Debug);

    let configure = &mock.invocations_starting_with("-G")[0];
    assert!(configure.has_arg("-DCMAKE_BUILD_TYPE=Debug"));
    assert!(configure.has_arg("-DCMAKE_CXX_COMPILER=gcc"));
    assert!(configure.has_arg("Unix Makefiles"));
    assert!(configure.has_arg(&config.build_dir_arg()));

    assert!(output.contains("Running CMake configuration:"));
    assert!(output.contains("Building the project:"));
}

#[test]
fn test_visual_studio_with_gcc_aborts_before_persisting() {
    let (_dir, config) = project();
    let mock = MockRunner::cmake("3.28.3", &GENERATORS);

    let (result, _) = run(&config, &mock, "Visual Studio 17 2022\ngcc\nDebug\n");

    assert!(matches!(
        result,
        Err(WizardError::IncompatibleSelection { .. })
    ));
    assert!(!config.settings_path.exists());
    assert!(mock.invocations_starting_with("-G").is_empty());
}

#[test]
fn test_configure_failure_never_launches_build() {
    let (_dir, config) = project();
    let mock = MockRunner::cmake("3.28.3", &GENERATORS)
        .respond(&["-G"], MockResponse::fail(1, "CMake Error"));

    let (result, output) = run(&config, &mock, "Ninja\nclang\nRelease\n");

    assert!(matches!(result, Err(WizardError::ConfigureFailed(_))));
    assert!(mock.invocations_starting_with("--build").is_empty());
    assert!(!output.contains("Building the project:"));
    // The selection was valid, so it stays saved for the next attempt.
    assert!(config.settings_path.exists());
}

#[test]
fn test_build_failure_after_configure() {
    let (_dir, config) = project();
    let mock = MockRunner::cmake("3.28.3", &GENERATORS)
        .respond(&["--build"], MockResponse::fail(2, ""));

    let (result, _) = run(&config, &mock, "Ninja\nclang\nRelease\n");

    assert!(matches!(result, Err(WizardError::BuildFailed(_))));
    assert_eq!(mock.invocations_starting_with("-G").len(), 1);
}

#[test]
fn test_repeat_runs_are_idempotent() {
    let (_dir, config) = project();
    let saved = BuildConfiguration::new("Ninja", Compiler::Clang, BuildType::RelWithDebInfo).unwrap();
    SettingsStore::new(&config.settings_path).save(&saved).unwrap();
    let before = fs::read_to_string(&config.settings_path).unwrap();

    let first = MockRunner::cmake("3.28.3", &GENERATORS);
    let (result, output) = run(&config, &first, "");
    assert!(!result.unwrap().from_wizard);
    assert!(!output.contains("Enter generator"));

    let second = MockRunner::cmake("3.28.3", &GENERATORS);
    let (result, _) = run(&config, &second, "");
    assert!(!result.unwrap().from_wizard);

    let phases = |mock: &MockRunner| {
        mock.invocations()
            .into_iter()
            .filter(|inv| inv.args[0] == "-G" || inv.args[0] == "--build")
            .collect::<Vec<_>>()
    };
    assert_eq!(phases(&first), phases(&second));
    assert_eq!(phases(&first).len(), 2);
    assert_eq!(fs::read_to_string(&config.settings_path).unwrap(), before);
}

#[test]
fn test_corrupt_settings_abort() {
    let (_dir, config) = project();
    fs::write(&config.settings_path, "{\"generator\": \"Ninja\"").unwrap();
    let mock = MockRunner::cmake("3.28.3", &GENERATORS);

    let (result, _) = run(&config, &mock, "Ninja\ngcc\nDebug\n");

    assert!(matches!(result, Err(WizardError::CorruptSettings { .. })));
    assert!(mock.invocations_starting_with("-G").is_empty());
}

#[test]
fn test_hand_edited_incompatible_settings_rejected() {
    let (_dir, config) = project();
    fs::write(
        &config.settings_path,
        r#"{"generator": "Visual Studio 17 2022", "compiler": "gcc", "build_type": "Debug"}"#,
    )
    .unwrap();
    let mock = MockRunner::cmake("3.28.3", &GENERATORS);

    let (result, _) = run(&config, &mock, "");
    assert!(matches!(result, Err(WizardError::CorruptSettings { .. })));
}

#[test]
fn test_old_tool_rejected_before_wizard() {
    let (_dir, config) = project();
    let mock = MockRunner::cmake("3.15.0", &GENERATORS);

    let (result, output) = run(&config, &mock, "Ninja\ngcc\nDebug\n");

    assert!(matches!(result, Err(WizardError::VersionTooOld { .. })));
    assert!(!output.contains("Enter generator"));
}

#[test]
fn test_wizard_only_offers_detected_generators() {
    let (_dir, config) = project();
    let mock = MockRunner::cmake("3.28.3", &["Ninja"]);

    let (result, output) = run(&config, &mock, "Unix Makefiles\nNinja\ngcc\nDebug\n");

    assert_eq!(result.unwrap().configuration.generator, "Ninja");
    assert!(output.contains("Invalid generator, please try again"));
    assert!(!output.contains("- Unix Makefiles"));
}

#[test]
fn test_interrupted_wizard_saves_nothing() {
    let (_dir, config) = project();
    let mock = MockRunner::cmake("3.28.3", &GENERATORS);

    let (result, _) = run(&config, &mock, "Ninja\n");

    assert!(matches!(result, Err(WizardError::InputClosed { .. })));
    assert!(!config.settings_path.exists());
}
