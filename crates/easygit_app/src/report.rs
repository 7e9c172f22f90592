use easygit_domain::{ExecutionResult, Notice, Outcome, classify};

use crate::{Error, Result};

/// A finished step together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    outcome: Outcome,
    result: ExecutionResult,
}

impl Report {
    pub fn new(result: ExecutionResult) -> Self {
        Self { outcome: classify(&result), result }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn result(&self) -> &ExecutionResult {
        &self.result
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.outcome {
            Outcome::Informational(notice) => Some(notice),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    /// Turns hard failures into [`Error::CommandFailed`]; informational
    /// outcomes pass through.
    pub fn into_result(self) -> Result<Self> {
        if self.outcome.is_failure() {
            Err(Error::command(&self.result))
        } else {
            Ok(self)
        }
    }
}

impl From<ExecutionResult> for Report {
    fn from(result: ExecutionResult) -> Self {
        Self::new(result)
    }
}

#[cfg(test)]
mod tests {
    use easygit_domain::Failure;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_soft_failure_is_not_an_error() {
        let fixture = ExecutionResult::exited(
            "git commit -m x",
            1,
            Some("On branch main\nnothing to commit, working tree clean".to_string()),
            Some(String::new()),
        );

        let actual = Report::new(fixture).into_result().unwrap();

        assert_eq!(actual.notice(), Some(Notice::NothingToCommit));
        assert!(!actual.is_success());
    }

    #[test]
    fn test_hard_failure_carries_stderr() {
        let fixture = ExecutionResult::exited(
            "git push origin main",
            128,
            Some(String::new()),
            Some("fatal: 'origin' does not appear to be a git repository".to_string()),
        );

        let report = Report::new(fixture);
        assert_eq!(report.outcome(), Outcome::Failed(Failure::NonZeroExit));

        let actual = report.into_result().unwrap_err().to_string();
        let expected = "'git push origin main' failed: fatal: 'origin' does not appear to be a git repository";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_uncaptured_failure_mentions_exit_code() {
        let fixture = ExecutionResult::exited("gh repo delete me/demo", 2, None, None);

        let actual = Error::command(&fixture).to_string();
        let expected = "'gh repo delete me/demo' failed: exit code 2";
        assert_eq!(actual, expected);
    }
}
