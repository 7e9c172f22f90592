use std::path::Path;
use std::sync::Arc;

use easygit_domain::{
    CommandExecutor, DEFAULT_BRANCH, ExecutionResult, Invocation, is_git_repository,
};

use crate::{Error, Report, Result};

/// Extracts paths from `git status --porcelain -z` output.
///
/// Records are NUL separated and paths are never quoted. Each record is two
/// status columns and a space followed by the path; a rename or copy record
/// is followed by one extra record holding the source path, which is skipped.
pub fn parse_porcelain(output: &str) -> Vec<String> {
    let mut records = output.split('\0');
    let mut paths = Vec::new();
    while let Some(record) = records.next() {
        let (Some(status), Some(path)) = (record.get(..2), record.get(3..)) else {
            continue;
        };
        if status.contains(['R', 'C']) {
            records.next();
        }
        if !path.is_empty() {
            paths.push(path.to_string());
        }
    }
    paths
}

/// Local repository workflows, each a thin wrapper over one or two git runs.
pub struct GitApp<E> {
    executor: Arc<E>,
    program: String,
}

impl<E: CommandExecutor> GitApp<E> {
    /// `program` is the git executable, usually just `git`.
    pub fn new(executor: Arc<E>, program: impl Into<String>) -> Self {
        Self { executor, program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn git<I, S>(&self, repo: &Path, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new([self.program.as_str()])
            .args(args)
            .cwd(repo)
            .capture(true)
    }

    async fn run(&self, invocation: Invocation) -> ExecutionResult {
        self.executor.execute(invocation).await
    }

    /// Returns the `git --version` line.
    pub async fn check_git(&self) -> Result<String> {
        let result = self
            .run(Invocation::new([self.program.as_str(), "--version"]).capture(true))
            .await;
        if result.success() {
            Ok(result.output().unwrap_or("git").to_string())
        } else {
            Err(Error::NotInstalled {
                program: self.program.clone(),
                details: result.message().unwrap_or("unknown error").to_string(),
            })
        }
    }

    pub fn is_repository(&self, path: &Path) -> bool {
        is_git_repository(path)
    }

    /// Runs `git status` attached to the terminal.
    pub async fn status(&self, repo: &Path) -> ExecutionResult {
        self.run(self.git(repo, ["status"]).capture(false)).await
    }

    pub async fn changed_files(&self, repo: &Path) -> Result<Vec<String>> {
        let result = self.run(self.git(repo, ["status", "--porcelain", "-z"])).await;
        if !result.success() {
            return Err(Error::command(&result));
        }
        Ok(parse_porcelain(result.stdout().unwrap_or_default()))
    }

    pub async fn stage_all(&self, repo: &Path) -> Report {
        self.run(self.git(repo, ["add", "."])).await.into()
    }

    pub async fn stage(&self, repo: &Path, files: &[String]) -> Report {
        let invocation = self.git(repo, ["add", "--"]).args(files.iter().cloned());
        self.run(invocation).await.into()
    }

    pub async fn has_staged_changes(&self, repo: &Path) -> bool {
        !self
            .run(self.git(repo, ["diff", "--staged", "--quiet"]))
            .await
            .success()
    }

    pub async fn has_unstaged_changes(&self, repo: &Path) -> bool {
        !self.run(self.git(repo, ["diff", "--quiet"])).await.success()
    }

    /// True when `HEAD` resolves, i.e. at least one commit exists.
    pub async fn has_commits(&self, repo: &Path) -> bool {
        self.run(self.git(repo, ["rev-parse", "--verify", "HEAD"]))
            .await
            .success()
    }

    pub async fn commit(&self, repo: &Path, message: &str) -> Report {
        self.run(self.git(repo, ["commit", "-m", message])).await.into()
    }

    /// `None` for a detached head or when git cannot tell.
    pub async fn current_branch(&self, repo: &Path) -> Option<String> {
        let result = self
            .run(self.git(repo, ["rev-parse", "--abbrev-ref", "HEAD"]))
            .await;
        result
            .success()
            .then(|| result.output())
            .flatten()
            .filter(|branch| *branch != "HEAD")
            .map(str::to_string)
    }

    pub async fn remotes(&self, repo: &Path) -> Vec<String> {
        let result = self.run(self.git(repo, ["remote"])).await;
        match result.output() {
            Some(output) if result.success() => {
                output.split_whitespace().map(str::to_string).collect()
            }
            _ => Vec::new(),
        }
    }

    /// `git remote -v`, used to show what would be replaced.
    pub async fn remote_details(&self, repo: &Path) -> Option<String> {
        let result = self.run(self.git(repo, ["remote", "-v"])).await;
        result.success().then(|| result.output().map(str::to_string)).flatten()
    }

    pub async fn add_remote(&self, repo: &Path, name: &str, url: &str) -> Report {
        self.run(self.git(repo, ["remote", "add", name, url])).await.into()
    }

    pub async fn remove_remote(&self, repo: &Path, name: &str) -> Report {
        self.run(self.git(repo, ["remote", "remove", name])).await.into()
    }

    pub async fn has_upstream(&self, repo: &Path, branch: &str) -> bool {
        let upstream = format!("{branch}@{{u}}");
        self.run(self.git(repo, ["rev-parse", "--abbrev-ref", upstream.as_str()]))
            .await
            .success()
    }

    pub async fn push(
        &self,
        repo: &Path,
        remote: &str,
        branch: &str,
        set_upstream: bool,
    ) -> Report {
        let invocation = if set_upstream {
            self.git(repo, ["push", "-u", remote, branch])
        } else {
            self.git(repo, ["push", remote, branch])
        };
        tracing::info!(remote, branch, set_upstream, "Pushing");
        self.run(invocation).await.into()
    }

    pub async fn pull(&self, repo: &Path) -> Report {
        self.run(self.git(repo, ["pull"])).await.into()
    }

    /// Creates a repository whose initial branch is always `main`.
    ///
    /// Pointing the unborn `HEAD` at `refs/heads/main` works on every git
    /// version, unlike `init -b`.
    pub async fn init(&self, path: &Path) -> Result<()> {
        let result = self.run(self.git(path, ["init"])).await;
        if !result.success() {
            return Err(Error::command(&result));
        }

        let head = format!("refs/heads/{DEFAULT_BRANCH}");
        let result = self
            .run(self.git(path, ["symbolic-ref", "HEAD", head.as_str()]))
            .await;
        if !result.success() {
            tracing::warn!(
                path = %path.display(),
                error = result.message().unwrap_or_default(),
                "Could not set initial branch"
            );
        }

        tracing::info!(path = %path.display(), "Initialized repository");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use easygit_domain::{Failure, Notice, Outcome};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mock::MockExecutor;

    fn fixture(responses: Vec<(i32, &'static str, &'static str)>) -> (Arc<MockExecutor>, GitApp<MockExecutor>) {
        let executor = Arc::new(MockExecutor::with(responses));
        let app = GitApp::new(executor.clone(), "git");
        (executor, app)
    }

    fn repo() -> PathBuf {
        PathBuf::from("/work/demo")
    }

    #[test]
    fn test_parse_porcelain() {
        let fixture = " M src/main.rs\0?? notes.txt\0R  new.rs\0old.rs\0A  with space.txt\0";

        let actual = parse_porcelain(fixture);
        let expected = vec!["src/main.rs", "notes.txt", "new.rs", "with space.txt"];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_porcelain_keeps_names_verbatim() {
        let fixture = "?? café.txt\0?? a -> b.txt\0 C copy.txt\0source.txt\0";

        let actual = parse_porcelain(fixture);
        let expected = vec!["café.txt", "a -> b.txt", "copy.txt"];
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_configured_program_is_used() {
        let executor = Arc::new(MockExecutor::with(vec![(0, "", "")]));
        let app = GitApp::new(executor.clone(), "/opt/git/bin/git");

        app.pull(&repo()).await;

        assert_eq!(app.program(), "/opt/git/bin/git");
        assert_eq!(executor.command_lines(), vec!["/opt/git/bin/git pull"]);
    }

    #[test]
    fn test_parse_porcelain_empty() {
        let actual = parse_porcelain("");
        assert!(actual.is_empty());
    }

    #[tokio::test]
    async fn test_changed_files_runs_in_repository() {
        let (executor, app) = fixture(vec![(0, " M README.md\0", "")]);

        let actual = app.changed_files(&repo()).await.unwrap();

        assert_eq!(actual, vec!["README.md"]);
        let calls = executor.calls();
        assert_eq!(calls[0].working_dir(), Some(repo().as_path()));
        assert_eq!(executor.command_lines(), vec!["git status --porcelain -z"]);
    }

    #[tokio::test]
    async fn test_changed_files_failure_is_error() {
        let (_, app) = fixture(vec![(128, "", "fatal: not a git repository")]);

        let actual = app.changed_files(&repo()).await.unwrap_err().to_string();

        assert!(actual.contains("fatal: not a git repository"));
    }

    #[tokio::test]
    async fn test_stage_separates_paths_from_options() {
        let (executor, app) = fixture(vec![]);

        let actual = app
            .stage(&repo(), &["-weird.txt".to_string(), "a b.txt".to_string()])
            .await;

        assert!(actual.is_success());
        assert_eq!(executor.command_lines(), vec!["git add -- -weird.txt 'a b.txt'"]);
    }

    #[tokio::test]
    async fn test_commit_nothing_to_commit_is_informational() {
        let (_, app) = fixture(vec![(1, "nothing to commit, working tree clean", "")]);

        let actual = app.commit(&repo(), "msg").await;

        assert_eq!(actual.outcome(), Outcome::Informational(Notice::NothingToCommit));
    }

    #[tokio::test]
    async fn test_staged_changes_follow_exit_code() {
        let (_, app) = fixture(vec![(1, "", ""), (0, "", "")]);

        assert!(app.has_staged_changes(&repo()).await);
        assert!(!app.has_staged_changes(&repo()).await);
    }

    #[tokio::test]
    async fn test_current_branch() {
        let (_, app) = fixture(vec![(0, "develop", ""), (0, "HEAD", ""), (128, "", "fatal")]);

        assert_eq!(app.current_branch(&repo()).await, Some("develop".to_string()));
        assert_eq!(app.current_branch(&repo()).await, None);
        assert_eq!(app.current_branch(&repo()).await, None);
    }

    #[tokio::test]
    async fn test_remotes() {
        let (_, app) = fixture(vec![(0, "origin\nupstream", ""), (128, "", "fatal")]);

        assert_eq!(app.remotes(&repo()).await, vec!["origin", "upstream"]);
        assert!(app.remotes(&repo()).await.is_empty());
    }

    #[tokio::test]
    async fn test_has_upstream_uses_branch_upstream_ref() {
        let (executor, app) = fixture(vec![(128, "", "fatal: no upstream")]);

        let actual = app.has_upstream(&repo(), "main").await;

        assert!(!actual);
        assert_eq!(executor.command_lines(), vec!["git rev-parse --abbrev-ref main@{u}"]);
    }

    #[tokio::test]
    async fn test_push_with_and_without_upstream() {
        let (executor, app) = fixture(vec![(0, "", ""), (1, "", "Everything up-to-date")]);

        let first = app.push(&repo(), "origin", "main", true).await;
        let second = app.push(&repo(), "origin", "main", false).await;

        assert!(first.is_success());
        assert_eq!(second.notice(), Some(Notice::UpToDate));
        assert_eq!(
            executor.command_lines(),
            vec!["git push -u origin main", "git push origin main"]
        );
    }

    #[tokio::test]
    async fn test_init_sets_main_branch() {
        let (executor, app) = fixture(vec![]);

        app.init(&repo()).await.unwrap();

        assert_eq!(
            executor.command_lines(),
            vec!["git init", "git symbolic-ref HEAD refs/heads/main"]
        );
    }

    #[tokio::test]
    async fn test_init_failure_stops_before_branch_policy() {
        let (executor, app) = fixture(vec![(128, "", "permission denied")]);

        let actual = app.init(&repo()).await;

        assert!(matches!(actual, Err(Error::CommandFailed { .. })));
        assert_eq!(executor.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_status_is_not_captured() {
        let (executor, app) = fixture(vec![]);

        let actual = app.status(&repo()).await;

        assert_eq!(actual.stdout(), None);
        assert!(!executor.calls()[0].is_captured());
    }

    #[tokio::test]
    async fn test_check_git_missing() {
        let (_, app) = fixture(vec![(127, "", "git: not found")]);

        let actual = app.check_git().await;

        assert!(matches!(actual, Err(Error::NotInstalled { .. })));
    }

    #[tokio::test]
    async fn test_check_git_reports_version() {
        let (_, app) = fixture(vec![(0, "git version 2.45.0", "")]);

        let actual = app.check_git().await.unwrap();

        assert_eq!(actual, "git version 2.45.0");
    }

    #[test]
    fn test_failure_taxonomy_reaches_report() {
        let actual = Report::new(ExecutionResult::not_found("git status", "git"));
        assert_eq!(actual.outcome(), Outcome::Failed(Failure::NotFound));
    }
}
