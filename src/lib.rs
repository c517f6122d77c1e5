//! cmakewiz - interactive build configuration for CMake projects
//!
//! The crate wraps a CMake-based native project with a small, opinionated
//! workflow:
//!
//! 1. probe the installed `cmake` (present, recent enough, which generators)
//! 2. replay the saved generator / compiler / build type, or ask for them
//!    once and save the answer
//! 3. run the configure step, then the build step
//!
//! Every failure is a [`WizardError`] returned to a single top-level handler,
//! which prints a labelled diagnostic and exits non-zero.
//!
//! # Example
//!
//! ```no_run
//! use cmakewiz::{SystemRunner, WizardConfig, Workflow};
//! use std::io;
//!
//! let config = WizardConfig::default();
//! let runner = SystemRunner::new();
//! let report = Workflow::new(&config, &runner).run(io::stdin().lock(), &mut io::stdout())?;
//! println!("built with {}", report.configuration.generator);
//! # Ok::<(), cmakewiz::WizardError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod housekeeping;
pub mod options;
pub mod probe;
pub mod process;
pub mod runner;
pub mod settings;
pub mod util;
pub mod wizard;
pub mod workflow;

pub use config::{ConfigError, WizardConfig};
pub use error::WizardError;
pub use options::{BuildOptions, BuildType, Compiler};
pub use probe::{ToolCapabilities, ToolProbe, ToolVersion};
pub use process::{CommandRunner, Invocation, MockRunner, SystemRunner};
pub use runner::BuildRunner;
pub use settings::{BuildConfiguration, SettingsStore};
pub use wizard::ConfigWizard;
pub use workflow::{RunReport, Workflow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
