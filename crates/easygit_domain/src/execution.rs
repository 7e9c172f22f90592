use strum_macros::{AsRefStr, Display};

/// Exit code reported when the process never ran.
pub const NOT_STARTED_EXIT_CODE: i32 = -1;

/// Why an invocation did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Failure {
    /// The argument list was empty; nothing was launched.
    InvalidInvocation,
    /// The executable does not exist or is not on the search path.
    NotFound,
    /// The process ran and exited with a failure code.
    NonZeroExit,
    /// The OS refused to start the process or waiting on it failed.
    LaunchFailure,
}

/// Normalized outcome of one external program invocation.
///
/// Every failure mode is carried as data so callers branch on a single shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    command: String,
    stdout: Option<String>,
    stderr: Option<String>,
    exit_code: i32,
    failure: Option<Failure>,
}

fn trim_trailing(text: String) -> String {
    let len = text.trim_end().len();
    let mut text = text;
    text.truncate(len);
    text
}

impl ExecutionResult {
    /// Result for a process that ran to completion.
    ///
    /// Captured streams are trimmed of trailing whitespace.
    pub fn exited(
        command: impl Into<String>,
        exit_code: i32,
        stdout: Option<String>,
        stderr: Option<String>,
    ) -> Self {
        Self {
            command: command.into(),
            stdout: stdout.map(trim_trailing),
            stderr: stderr.map(trim_trailing),
            exit_code,
            failure: (exit_code != 0).then_some(Failure::NonZeroExit),
        }
    }

    pub fn not_found(command: impl Into<String>, program: &str) -> Self {
        Self::not_started(
            command,
            Failure::NotFound,
            format!("command not found: {program}"),
        )
    }

    pub fn launch_failure(command: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let command = command.into();
        let message = format!("failed to run '{command}': {reason}");
        Self::not_started(command, Failure::LaunchFailure, message)
    }

    pub fn invalid_invocation() -> Self {
        Self::not_started(
            String::new(),
            Failure::InvalidInvocation,
            "invalid invocation: empty argument list".to_string(),
        )
    }

    fn not_started(command: impl Into<String>, failure: Failure, message: String) -> Self {
        Self {
            command: command.into(),
            stdout: None,
            stderr: Some(message),
            exit_code: NOT_STARTED_EXIT_CODE,
            failure: Some(failure),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn stdout(&self) -> Option<&str> {
        self.stdout.as_deref()
    }

    pub fn stderr(&self) -> Option<&str> {
        self.stderr.as_deref()
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn failure(&self) -> Option<Failure> {
        self.failure
    }

    pub fn success(&self) -> bool {
        self.failure.is_none()
    }

    /// True when the process was actually started.
    pub fn started(&self) -> bool {
        !matches!(
            self.failure,
            Some(Failure::InvalidInvocation | Failure::NotFound | Failure::LaunchFailure)
        )
    }

    /// Non-empty stdout, if captured.
    pub fn output(&self) -> Option<&str> {
        self.stdout().filter(|text| !text.is_empty())
    }

    /// Best diagnostic text: stderr first, stdout otherwise.
    pub fn message(&self) -> Option<&str> {
        self.stderr()
            .filter(|text| !text.is_empty())
            .or_else(|| self.output())
    }

    /// Both streams joined by a newline, used for pattern matching.
    pub fn combined(&self) -> String {
        [self.stdout(), self.stderr()]
            .into_iter()
            .flatten()
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
