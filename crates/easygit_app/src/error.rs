use easygit_domain::ExecutionResult;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{program}' is not installed or not working ({details})")]
    NotInstalled { program: String, details: String },

    #[error("GitHub CLI is not authenticated, run '{program} auth login' first: {details}")]
    NotAuthenticated { program: String, details: String },

    #[error("'{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    #[error("Could not parse output of '{command}'")]
    Parse {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Repository was created but gh did not report its URL")]
    MissingRepositoryUrl,

    #[error(transparent)]
    Domain(#[from] easygit_domain::Error),
}

impl Error {
    /// Describes a failed process run with the tool's own diagnostics.
    pub fn command(result: &ExecutionResult) -> Self {
        let message = result
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("exit code {}", result.exit_code()));
        Self::CommandFailed { command: result.command().to_string(), message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
