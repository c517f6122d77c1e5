use super::{CommandOutput, CommandRunner, CommandStatus, Invocation};
use std::io;
use std::sync::Mutex;

/// Scripted reply for invocations matching a rule.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The process ran and exited with `code`.
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// The program could not be started.
    NotFound,
}

impl MockResponse {
    pub fn ok(stdout: &str) -> Self {
        MockResponse::Exit {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn fail(code: i32, stderr: &str) -> Self {
        MockResponse::Exit {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    args_prefix: Vec<String>,
    response: MockResponse,
}

/// In-memory [`CommandRunner`] that replays scripted responses and records
/// every invocation it receives.
///
/// Rules are matched on a prefix of the argument list, in insertion order.
/// Unmatched invocations succeed with empty output.
pub struct MockRunner {
    rules: Vec<Rule>,
    fallback: MockResponse,
    calls: Mutex<Vec<Invocation>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: MockResponse::ok(""),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A runner for which every program is missing from PATH.
    pub fn missing() -> Self {
        Self {
            fallback: MockResponse::NotFound,
            ..Self::new()
        }
    }

    /// A runner that answers the version and capabilities queries of a
    /// working CMake installation.
    pub fn cmake(version: &str, generators: &[&str]) -> Self {
        let generators: Vec<serde_json::Value> = generators
            .iter()
            .map(|name| serde_json::json!({ "name": name, "platformSupport": false, "toolsetSupport": false }))
            .collect();
        let capabilities = serde_json::json!({
            "version": { "string": version },
            "generators": generators,
        });

        Self::new()
            .respond(
                &["--version"],
                MockResponse::ok(&format!(
                    "cmake version {}\n\nCMake suite maintained and supported by Kitware (kitware.com/cmake).\n",
                    version
                )),
            )
            .respond(
                &["-E", "capabilities"],
                MockResponse::ok(&capabilities.to_string()),
            )
    }

    pub fn respond(mut self, args_prefix: &[&str], response: MockResponse) -> Self {
        self.rules.push(Rule {
            args_prefix: args_prefix.iter().map(|s| s.to_string()).collect(),
            response,
        });
        self
    }

    /// Every invocation received so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Invocations whose first argument equals `first_arg`.
    pub fn invocations_starting_with(&self, first_arg: &str) -> Vec<Invocation> {
        self.invocations()
            .into_iter()
            .filter(|inv| inv.args.first().map(String::as_str) == Some(first_arg))
            .collect()
    }

    fn lookup(&self, invocation: &Invocation) -> MockResponse {
        self.calls.lock().unwrap().push(invocation.clone());

        self.rules
            .iter()
            .find(|rule| invocation.args.starts_with(&rule.args_prefix))
            .map(|rule| rule.response.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockRunner {
    fn capture(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        match self.lookup(invocation) {
            MockResponse::Exit {
                code,
                stdout,
                stderr,
            } => Ok(CommandOutput {
                status: CommandStatus::from_code(code),
                stdout,
                stderr,
            }),
            MockResponse::NotFound => Err(not_found(invocation)),
        }
    }

    fn run(&self, invocation: &Invocation) -> io::Result<CommandStatus> {
        match self.lookup(invocation) {
            MockResponse::Exit { code, .. } => Ok(CommandStatus::from_code(code)),
            MockResponse::NotFound => Err(not_found(invocation)),
        }
    }
}

fn not_found(invocation: &Invocation) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("program not found: {}", invocation.program),
    )
}
