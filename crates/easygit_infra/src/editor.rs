use std::path::Path;

use easygit_domain::{CommandExecutor, ExecutionResult, Invocation};

/// Opens files in the user's editor through a [`CommandExecutor`].
pub struct Editor<'a, E> {
    executor: &'a E,
    command: &'a str,
}

impl<'a, E: CommandExecutor> Editor<'a, E> {
    /// `command` may carry arguments, e.g. `code --wait`.
    pub fn new(executor: &'a E, command: &'a str) -> Self {
        Self { executor, command }
    }

    /// A blank editor command yields an empty invocation, which the executor
    /// rejects without launching anything.
    ///
    /// A command naming an existing file is run as a single program, so
    /// editor paths containing spaces work. Anything else is split on
    /// whitespace into a program and its arguments.
    pub fn invocation(&self, path: &Path) -> Invocation {
        let command = self.command.trim();
        if command.is_empty() {
            return Invocation::new(Vec::<String>::new());
        }
        let program = if Path::new(command).is_file() {
            Invocation::new([command])
        } else {
            Invocation::new(command.split_whitespace())
        };
        program.arg(path.to_string_lossy()).capture(false)
    }

    /// Runs the editor attached to the terminal and waits for it to exit.
    pub async fn edit(&self, path: &Path) -> ExecutionResult {
        tracing::info!(editor = self.command, path = %path.display(), "Opening editor");
        self.executor.execute(self.invocation(path)).await
    }
}
