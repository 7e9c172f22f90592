//! Interpretation of finished invocations.
//!
//! git and gh report some benign situations through a nonzero exit code. The
//! only place those messages are recognised is [`SOFT_OUTCOMES`]; callers
//! branch on [`Outcome`] instead of inspecting output text themselves.

use strum_macros::Display;

use crate::{ExecutionResult, Failure};

/// A recognised nonzero outcome that should not be reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Notice {
    /// Nothing was staged, so no commit was created.
    #[strum(to_string = "Nothing to commit")]
    NothingToCommit,
    /// The remote or local branch already matches.
    #[strum(to_string = "Already up to date")]
    UpToDate,
    /// gh created the remote repository but could not register `origin`.
    #[strum(to_string = "Remote repository created, but 'origin' was not added")]
    RemoteNotAdded,
}

/// Lowercase substrings matched against stdout and stderr, in order.
pub const SOFT_OUTCOMES: &[(&str, Notice)] = &[
    ("nothing to commit", Notice::NothingToCommit),
    ("no changes added to commit", Notice::NothingToCommit),
    ("everything up-to-date", Notice::UpToDate),
    ("already up to date", Notice::UpToDate),
    ("unable to add remote", Notice::RemoteNotAdded),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Informational(Notice),
    Failed(Failure),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Looks up the first table entry whose pattern occurs in `text`.
pub fn match_notice(text: &str) -> Option<Notice> {
    let text = text.to_lowercase();
    SOFT_OUTCOMES
        .iter()
        .find(|(pattern, _)| text.contains(pattern))
        .map(|(_, notice)| *notice)
}

/// Classifies a result. Exit code 0 is always a success; only processes that
/// actually ran and failed are checked against the table.
pub fn classify(result: &ExecutionResult) -> Outcome {
    match result.failure() {
        None => Outcome::Success,
        Some(Failure::NonZeroExit) => match_notice(&result.combined())
            .map(Outcome::Informational)
            .unwrap_or(Outcome::Failed(Failure::NonZeroExit)),
        Some(failure) => Outcome::Failed(failure),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn exited(code: i32, stdout: &str, stderr: &str) -> ExecutionResult {
        ExecutionResult::exited(
            "git",
            code,
            Some(stdout.to_string()),
            Some(stderr.to_string()),
        )
    }

    #[test]
    fn test_success_wins_over_patterns() {
        let fixture = exited(0, "nothing to commit, working tree clean", "");

        let actual = classify(&fixture);
        let expected = Outcome::Success;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_nothing_to_commit_on_stdout_is_informational() {
        let fixture = exited(1, "On branch main\nnothing to commit, working tree clean", "");

        let actual = classify(&fixture);
        let expected = Outcome::Informational(Notice::NothingToCommit);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let fixture = exited(1, "", "Everything up-to-date");

        let actual = classify(&fixture);
        let expected = Outcome::Informational(Notice::UpToDate);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_gh_remote_not_added() {
        let fixture = exited(
            1,
            "https://github.com/me/demo",
            "X Unable to add remote \"origin\"",
        );

        let actual = classify(&fixture);
        let expected = Outcome::Informational(Notice::RemoteNotAdded);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_unknown_failure_stays_failed() {
        let fixture = exited(128, "", "fatal: not a git repository");

        let actual = classify(&fixture);
        let expected = Outcome::Failed(Failure::NonZeroExit);
        assert_eq!(actual, expected);
        assert!(actual.is_failure());
    }

    #[test]
    fn test_not_found_is_never_softened() {
        let fixture = ExecutionResult::not_found("nothing to commit", "nothing");

        let actual = classify(&fixture);
        let expected = Outcome::Failed(Failure::NotFound);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::NothingToCommit.to_string(), "Nothing to commit");
        assert_eq!(Notice::UpToDate.to_string(), "Already up to date");
    }
}
