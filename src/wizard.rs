//! Interactive first-run configuration wizard
//!
//! Asks for generator, compiler and build type, in that order. A field that
//! is not in its option set is rejected and asked again, with no retry limit.
//! The Visual Studio / MSVC compatibility rule is only checked once all three
//! fields are in, and a violation aborts the wizard instead of re-prompting.

use crate::error::{Result, WizardError};
use crate::options::{BuildOptions, BuildType, Compiler};
use crate::settings::BuildConfiguration;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub struct ConfigWizard<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConfigWizard<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Collects a full configuration from the user.
    ///
    /// Fails with `InputClosed` when the input stream ends mid-prompt and
    /// with `IncompatibleSelection` when the finished record breaks the
    /// generator/compiler rule.
    pub fn collect(&mut self, options: &BuildOptions) -> Result<BuildConfiguration> {
        writeln!(self.output, "Please enter your build settings:")?;

        let generator = self.prompt(
            "Generator options",
            options.generators().iter().map(String::as_str),
            ("generator", "generator"),
            |s| options.parse_generator(s),
        )?;

        let compiler = self.prompt(
            "C++ compiler options",
            options.compilers().iter().map(Compiler::as_str),
            ("C++ compiler", "compiler"),
            |s| s.parse::<Compiler>(),
        )?;

        let build_type = self.prompt(
            "Build type options",
            options.build_types().iter().map(BuildType::as_str),
            ("build type", "build type"),
            |s| s.parse::<BuildType>(),
        )?;

        BuildConfiguration::new(generator, compiler, build_type).map_err(|err| {
            warn!(error = %err, "Rejected incompatible selection");
            err
        })
    }

    /// `names` is the prompt label and the field name used in rejections.
    fn prompt<'o, T>(
        &mut self,
        heading: &str,
        choices: impl Iterator<Item = &'o str>,
        names: (&'static str, &'static str),
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        let (label, field) = names;
        writeln!(self.output, "\n{}:", heading)?;
        for choice in choices {
            writeln!(self.output, "- {}", choice)?;
        }

        loop {
            write!(self.output, "\nEnter {}: ", label)?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(WizardError::InputClosed { field: label });
            }

            let parsed = match String::from_utf8(buf) {
                Ok(line) => parse(line.trim()),
                Err(e) => Err(WizardError::InvalidInput {
                    field,
                    value: String::from_utf8_lossy(e.as_bytes()).trim().to_string(),
                }),
            };

            match parsed {
                Ok(value) => return Ok(value),
                Err(err @ WizardError::InvalidInput { .. }) => {
                    debug!(field, error = %err, "Rejected input");
                    writeln!(self.output, "{}", err)?;
                }
                Err(other) => return Err(other),
            }
        }
    }
}
