use std::path::Path;
use std::sync::Arc;

use easygit_domain::{
    CommandExecutor, ExecutionResult, Invocation, Notice, REPOSITORY_JSON_FIELDS,
    RemoteRepository, RepositoryDescription, Visibility, extract_repository_url,
    validate_repository_name,
};

use crate::{Error, GitApp, Report, Result};

/// How `gh repo create --source` ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSetup {
    /// gh created the repository and registered `origin` itself.
    Created { url: Option<String> },
    /// gh could not add `origin`; it was pointed at `url` manually.
    RemoteRecovered { url: String },
}

/// Options shared by both repository creation flows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRepository {
    pub name: String,
    pub visibility: Visibility,
    pub description: Option<String>,
}

impl NewRepository {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Blank descriptions are dropped.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.trim().is_empty()).then_some(description);
        self
    }

    fn arguments(&self) -> Vec<String> {
        let mut args = vec![
            "repo".to_string(),
            "create".to_string(),
            self.name.clone(),
            self.visibility.flag(),
        ];
        if let Some(description) = &self.description {
            args.push("--description".to_string());
            args.push(description.clone());
        }
        args
    }
}

/// GitHub workflows driven through the `gh` CLI.
pub struct GhApp<E> {
    executor: Arc<E>,
    program: String,
}

impl<E: CommandExecutor> GhApp<E> {
    pub fn new(executor: Arc<E>, program: impl Into<String>) -> Self {
        Self { executor, program: program.into() }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn gh<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new([self.program.as_str()]).args(args).capture(true)
    }

    async fn run(&self, invocation: Invocation) -> ExecutionResult {
        self.executor.execute(invocation).await
    }

    /// Returns the first line of `gh --version`.
    pub async fn check_installed(&self) -> Result<String> {
        let result = self.run(self.gh(["--version"])).await;
        if !result.success() {
            return Err(Error::NotInstalled {
                program: self.program.clone(),
                details: result.message().unwrap_or("unknown error").to_string(),
            });
        }
        Ok(result
            .output()
            .and_then(|out| out.lines().next())
            .unwrap_or(self.program.as_str())
            .to_string())
    }

    /// `gh auth status` writes its report to stderr on most versions.
    pub async fn auth_status(&self) -> ExecutionResult {
        self.run(self.gh(["auth", "status"])).await
    }

    /// Succeeds when gh is installed and logged in.
    pub async fn ensure_ready(&self) -> Result<()> {
        self.check_installed().await?;
        let result = self.auth_status().await;
        if result.success() {
            return Ok(());
        }
        Err(Error::NotAuthenticated {
            program: self.program.clone(),
            details: result.message().unwrap_or("not logged in").to_string(),
        })
    }

    /// Interactive `gh auth login`; gh owns the terminal while it runs.
    pub async fn login(&self) -> ExecutionResult {
        self.run(self.gh(["auth", "login"]).capture(false)).await
    }

    pub async fn list_repositories(&self, limit: usize) -> Result<Vec<RemoteRepository>> {
        let limit = limit.to_string();
        let result = self
            .run(self.gh([
                "repo",
                "list",
                "--json",
                REPOSITORY_JSON_FIELDS,
                "--limit",
                limit.as_str(),
            ]))
            .await;
        if !result.success() {
            return Err(Error::command(&result));
        }
        let repositories = RemoteRepository::parse_list(result.stdout().unwrap_or("[]"))
            .map_err(|source| Error::Parse { command: result.command().to_string(), source })?;
        tracing::debug!(count = repositories.len(), "Fetched remote repositories");
        Ok(repositories)
    }

    /// Current description, empty when unset.
    pub async fn description(&self, repo: &str) -> Result<String> {
        let result = self
            .run(self.gh(["repo", "view", repo, "--json", "description"]))
            .await;
        if !result.success() {
            return Err(Error::command(&result));
        }
        let body: RepositoryDescription = serde_json::from_str(result.stdout().unwrap_or("{}"))
            .map_err(|source| Error::Parse { command: result.command().to_string(), source })?;
        Ok(body.description.unwrap_or_default())
    }

    /// An empty `text` clears the description.
    pub async fn edit_description(&self, repo: &str, text: &str) -> Report {
        self.run(self.gh(["repo", "edit", repo, "--description", text]))
            .await
            .into()
    }

    pub async fn rename(&self, repo: &str, new_name: &str) -> Result<Report> {
        validate_repository_name(new_name)?;
        tracing::info!(repo, new_name, "Renaming repository");
        Ok(self
            .run(self.gh(["repo", "rename", new_name, "-R", repo, "--yes"]))
            .await
            .into())
    }

    /// gh asks for its own final confirmation, so the terminal is inherited.
    pub async fn delete(&self, repo: &str) -> Report {
        tracing::warn!(repo, "Deleting repository");
        self.run(self.gh(["repo", "delete", repo]).capture(false))
            .await
            .into()
    }

    /// Creates an empty repository, optionally cloning it into `cwd/<name>`.
    pub async fn create(&self, repository: &NewRepository, clone: bool, cwd: &Path) -> Report {
        let mut invocation = self.gh(repository.arguments()).cwd(cwd);
        if clone {
            invocation = invocation.arg("--clone");
        }
        tracing::info!(name = %repository.name, clone, "Creating repository");
        self.run(invocation).await.into()
    }

    /// Creates a repository from an existing local project.
    ///
    /// When gh creates the repository but fails to add `origin`, the URL it
    /// printed is used to set `origin` through git instead.
    pub async fn create_from_source(
        &self,
        repository: &NewRepository,
        path: &Path,
        git: &GitApp<E>,
    ) -> Result<SourceSetup> {
        let invocation = self
            .gh(repository.arguments())
            .arg("--source")
            .arg(path.to_string_lossy());
        let report = Report::new(self.run(invocation).await);
        let url = report
            .result()
            .stdout()
            .and_then(extract_repository_url)
            .map(str::to_string);

        if report.is_success() {
            return Ok(SourceSetup::Created { url });
        }
        if report.notice() != Some(Notice::RemoteNotAdded) {
            return Err(Error::command(report.result()));
        }

        let url = url.ok_or(Error::MissingRepositoryUrl)?;
        tracing::warn!(%url, "gh could not add origin, setting it manually");
        // The remote may not exist; only the add has to succeed.
        git.remove_remote(path, "origin").await;
        git.add_remote(path, "origin", &url).await.into_result()?;
        Ok(SourceSetup::RemoteRecovered { url })
    }
}
