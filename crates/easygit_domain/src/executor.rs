use async_trait::async_trait;

use crate::{ExecutionResult, Invocation};

/// Port for running external programs.
///
/// Implementations never return an error: not-found, launch and exit failures
/// are all reported inside the [`ExecutionResult`].
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Runs the invocation and waits for it to finish.
    async fn execute(&self, invocation: Invocation) -> ExecutionResult;
}
