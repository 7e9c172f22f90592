use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use easygit_domain::{CommandExecutor, ExecutionResult, Invocation};

/// Replays queued results in order and records every invocation.
/// Runs beyond the queue succeed with empty output.
#[derive(Default)]
pub struct MockExecutor {
    responses: Mutex<VecDeque<(i32, &'static str, &'static str)>>,
    calls: Mutex<Vec<Invocation>>,
}

impl MockExecutor {
    pub fn with(responses: impl IntoIterator<Item = (i32, &'static str, &'static str)>) -> Self {
        Self { responses: Mutex::new(responses.into_iter().collect()), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn execute(&self, invocation: Invocation) -> ExecutionResult {
        let command = invocation.to_string();
        let captured = invocation.is_captured();
        self.calls.lock().unwrap().push(invocation);
        let (code, stdout, stderr) = self.responses.lock().unwrap().pop_front().unwrap_or((0, "", ""));
        if captured {
            ExecutionResult::exited(command, code, Some(stdout.to_string()), Some(stderr.to_string()))
        } else {
            ExecutionResult::exited(command, code, None, None)
        }
    }
}
