use std::io;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use easygit_display::TitleFormat;
use easygit_domain::{CommandExecutor, ExecutionResult, Invocation};
use tokio::process::Command;

/// Runs invocations as real child processes.
///
/// Captured invocations get piped stdout/stderr; the rest inherit the
/// terminal so interactive programs (editors, `gh auth login`) work.
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    echo: bool,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self { echo: true }
    }
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print an "Executing ..." line before uncaptured invocations.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    fn announce(&self, invocation: &Invocation) {
        if !self.echo || invocation.is_captured() {
            return;
        }
        let detail = match invocation.working_dir() {
            Some(cwd) => format!("{} in {}", invocation, cwd.display()),
            None => invocation.to_string(),
        };
        println!("{}", TitleFormat::action("Executing").sub_title(detail).render(false));
    }

    fn command(invocation: &Invocation, program: &str) -> Command {
        let mut command = Command::new(program);
        command.args(invocation.arguments());
        if let Some(cwd) = invocation.working_dir() {
            command.current_dir(cwd);
        }
        // Applied to the child only; the parent environment stays untouched.
        command.envs(invocation.env_overrides());
        command.kill_on_drop(true);

        if invocation.is_captured() {
            command.stdout(Stdio::piped()).stderr(Stdio::piped());
        } else {
            command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }
        command
    }

    fn launch_error(command_line: String, program: &str, err: io::Error) -> ExecutionResult {
        if err.kind() == io::ErrorKind::NotFound {
            tracing::warn!(program, "Command not found");
            ExecutionResult::not_found(command_line, program)
        } else {
            tracing::error!(command = %command_line, error = %err, "Failed to launch command");
            ExecutionResult::launch_failure(command_line, err)
        }
    }
}

/// Exit code of a finished child; signal terminations map to `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, invocation: Invocation) -> ExecutionResult {
        let Some(program) = invocation.program() else {
            tracing::error!("Refusing to execute an empty argument list");
            return ExecutionResult::invalid_invocation();
        };
        let command_line = invocation.to_string();

        tracing::debug!(
            command = %command_line,
            cwd = ?invocation.working_dir(),
            capture = invocation.is_captured(),
            "Executing command"
        );

        // A missing working directory surfaces as ENOENT from spawn, which
        // would otherwise be mistaken for a missing executable.
        if let Some(cwd) = invocation.working_dir()
            && !cwd.is_dir()
        {
            return ExecutionResult::launch_failure(
                command_line,
                format!("working directory '{}' does not exist", cwd.display()),
            );
        }

        self.announce(&invocation);
        let mut command = Self::command(&invocation, program);

        let result = if invocation.is_captured() {
            match command.output().await {
                Ok(output) => ExecutionResult::exited(
                    command_line,
                    exit_code(output.status),
                    Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                    Some(String::from_utf8_lossy(&output.stderr).into_owned()),
                ),
                Err(err) => Self::launch_error(command_line, program, err),
            }
        } else {
            match command.status().await {
                Ok(status) => ExecutionResult::exited(command_line, exit_code(status), None, None),
                Err(err) => Self::launch_error(command_line, program, err),
            }
        };

        tracing::debug!(
            command = %result.command(),
            exit_code = result.exit_code(),
            failure = ?result.failure(),
            "Command finished"
        );
        result
    }
}
