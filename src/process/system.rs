use super::{CommandOutput, CommandRunner, CommandStatus, Invocation};
use std::io;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs invocations as real child processes.
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn capture(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        debug!(command = %invocation, "Capturing process output");
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            status: CommandStatus {
                code: output.status.code(),
            },
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run(&self, invocation: &Invocation) -> io::Result<CommandStatus> {
        debug!(command = %invocation, "Running process");
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()?;

        Ok(CommandStatus {
            code: status.code(),
        })
    }
}
