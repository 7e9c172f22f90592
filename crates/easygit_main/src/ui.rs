use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use easygit_app::{Error, GhApp, GitApp, NewRepository, Report, SourceSetup};
use easygit_display::{Layout, TitleFormat, clear_screen};
use easygit_domain::{
    CommandExecutor, Outcome, RemoteRepository, Session, Visibility, is_git_repository,
    preferred_remote, repository_name, resolve_branch, truncate_chars, validate_repository_name,
};
use easygit_env::Environment;
use easygit_select::{EasySelect, pause};
use strum::IntoEnumIterator;

use crate::menu::{LocalMenu, MainMenu, RemoteMenu, StageChoice, options};

const GH_INSTALL_URL: &str = "https://cli.github.com/";

/// Interactive front end. Owns the session and drives every workflow.
pub struct UI<E> {
    pub(crate) env: Environment,
    pub(crate) session: Session,
    pub(crate) executor: Arc<E>,
    pub(crate) layout: Layout,
    git: GitApp<E>,
    gh: GhApp<E>,
}

impl<E: CommandExecutor> UI<E> {
    pub fn init(env: Environment, executor: Arc<E>, repository: Option<PathBuf>) -> Self {
        let layout = Layout::detect(env.center_menus);
        let git = GitApp::new(executor.clone(), env.git_command.clone());
        let gh = GhApp::new(executor.clone(), env.gh_command.clone());
        let mut ui = Self { env, session: Session::default(), executor, layout, git, gh };

        if let Some(path) = repository {
            let path = ui.resolve_path(&path);
            if is_git_repository(&path) {
                ui.session.select(path);
            } else {
                tracing::warn!(path = %path.display(), "Ignoring --repo, not a git repository");
            }
        }
        ui
    }

    /// Runs startup checks and then the main menu until the user exits.
    ///
    /// # Errors
    ///
    /// Fails when git is unavailable; every other problem is reported inside
    /// the menus.
    pub async fn run(&mut self) -> Result<()> {
        self.startup().await?;
        self.main_menu().await
    }

    pub(crate) fn clear(&self) {
        if self.env.clear_screen {
            clear_screen();
        }
    }

    pub(crate) fn header(&self, title: &str, details: &[String]) {
        println!("{}\n", self.layout.header(title, details));
    }

    pub(crate) fn resolve_path(&self, input: &Path) -> PathBuf {
        let path = self.env.cwd.join(input);
        std::fs::canonicalize(&path).unwrap_or(path)
    }

    /// Shows a menu and returns the chosen value, `None` on cancel.
    pub(crate) fn choose<T: Display>(
        &self,
        message: &str,
        values: Vec<T>,
        cursor: usize,
    ) -> Result<Option<T>> {
        let selected = EasySelect::select(self.layout.line(message), options(values, &self.layout))
            .starting_cursor(cursor)
            .prompt()?;
        Ok(selected.map(|option| option.value))
    }

    /// Prints the outcome of a step. Returns false for hard failures.
    pub(crate) fn report(&self, what: &str, report: &Report) -> bool {
        let result = report.result();
        match report.outcome() {
            Outcome::Success => {
                println!("{}", TitleFormat::success(what));
                if let Some(output) = result.output() {
                    println!("{output}");
                }
                true
            }
            Outcome::Informational(notice) => {
                println!("{}", TitleFormat::info(notice.to_string()));
                true
            }
            Outcome::Failed(failure) => {
                let title = TitleFormat::error(format!("{what}: failed ({failure})"));
                println!("{}", title.sub_title(result.command()));
                if let Some(message) = result.message() {
                    println!("{message}");
                } else if result.started() {
                    println!("exit code {}", result.exit_code());
                }
                false
            }
        }
    }

    fn print_error(error: &anyhow::Error) {
        tracing::error!("Action failed: {error:#}");
        println!("{}", TitleFormat::error(format!("{error:#}")));
    }

    fn wait(message: &str) {
        if let Err(error) = pause(message) {
            tracing::debug!(%error, "Pause interrupted");
        }
    }

    async fn startup(&mut self) -> Result<()> {
        self.clear();
        self.header(
            &format!("🚀 Welcome to EasyGit {}", easygit_env::VERSION),
            &[],
        );

        println!("{}", TitleFormat::action("Checking git installation"));
        match self.git.check_git().await {
            Ok(version) => println!("{}", TitleFormat::success("git is installed").sub_title(version)),
            Err(error) => {
                println!("{}", TitleFormat::error(error.to_string()));
                println!(
                    "Please install git and make sure '{}' is on your PATH.",
                    self.git.program()
                );
                bail!("git is required");
            }
        }

        println!("{}", TitleFormat::action("Checking GitHub CLI"));
        match self.gh.ensure_ready().await {
            Ok(()) => println!(
                "{}",
                TitleFormat::success("GitHub CLI is installed and authenticated")
            ),
            Err(Error::NotInstalled { .. }) => {
                println!(
                    "{}",
                    TitleFormat::warning(format!(
                        "GitHub CLI ('{}') not found, remote features are unavailable",
                        self.gh.program()
                    ))
                );
                println!("Install it from {GH_INSTALL_URL}");
            }
            Err(error) => println!("{}", TitleFormat::warning(error.to_string())),
        }

        if let Some(repo) = self.session.current() {
            println!(
                "{}",
                TitleFormat::info("Active repository").sub_title(repo.display().to_string())
            );
        }

        println!();
        Self::wait("Press Enter to continue to the main menu...");
        Ok(())
    }

    async fn main_menu(&mut self) -> Result<()> {
        loop {
            self.clear();
            let active = match self.session.current() {
                Some(path) => format!("Active: {}", path.display()),
                None => "No active repository".to_string(),
            };
            self.header("EasyGit - Main Menu", &[active]);

            let items: Vec<MainMenu> = MainMenu::iter().collect();
            let preselect = if self.session.is_selected() {
                MainMenu::WorkLocal
            } else {
                MainMenu::Authenticate
            };
            let cursor = items.iter().position(|item| *item == preselect).unwrap_or_default();
            let Some(choice) = self.choose("What would you like to do?", items, cursor)? else {
                break;
            };
            self.clear();
            tracing::debug!(?choice, "Main menu");

            let result = match choice {
                MainMenu::Authenticate => self.authenticate().await,
                MainMenu::CreateRepository => self.create_repository().await,
                MainMenu::PushProject => self.push_project().await,
                MainMenu::WorkLocal => self.local_menu().await,
                MainMenu::ManageRemote => self.remote_menu().await,
                MainMenu::Exit => break,
            };
            if let Err(error) = &result {
                Self::print_error(error);
            }
            if result.is_err() || !matches!(choice, MainMenu::WorkLocal | MainMenu::ManageRemote) {
                Self::wait("\nPress Enter to return to the menu...");
            }
        }

        self.clear();
        println!("👋 Goodbye!");
        Ok(())
    }

    async fn authenticate(&mut self) -> Result<()> {
        self.header("Authenticate GitHub account", &[]);
        let version = self.gh.check_installed().await.with_context(|| {
            format!("Install the GitHub CLI from {GH_INSTALL_URL} before authenticating")
        })?;
        println!("{}", TitleFormat::success("GitHub CLI is installed").sub_title(version));
        println!(
            "{}",
            TitleFormat::info("Follow the prompts from the GitHub CLI, a browser may open")
        );

        let login = self.gh.login().await;
        if !login.success() {
            println!(
                "{}",
                TitleFormat::warning(format!(
                    "'{}' exited with code {}, authentication may be incomplete",
                    login.command(),
                    login.exit_code()
                ))
            );
        }

        println!("{}", TitleFormat::action("Verifying authentication status"));
        self.gh.ensure_ready().await?;
        println!("{}", TitleFormat::success("GitHub CLI is authenticated"));
        Ok(())
    }

    fn ask_new_repository(&self, default_name: Option<String>) -> Result<Option<NewRepository>> {
        let mut name = EasySelect::input("Repository name:");
        if let Some(default) = default_name {
            name = name.with_default(default);
        }
        let Some(name) = name.prompt()? else {
            return Ok(None);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            bail!("Repository name cannot be empty");
        }

        let Some(description) = EasySelect::input("Description (optional):")
            .allow_empty(true)
            .prompt()?
        else {
            return Ok(None);
        };

        let Some(visibility) =
            EasySelect::select("Visibility:", Visibility::iter().collect::<Vec<_>>()).prompt()?
        else {
            return Ok(None);
        };

        Ok(Some(
            NewRepository::new(name)
                .visibility(visibility)
                .description(description),
        ))
    }

    async fn create_repository(&mut self) -> Result<()> {
        self.gh.ensure_ready().await?;
        self.header("Create new empty GitHub repository", &[]);

        let Some(repository) = self.ask_new_repository(None)? else {
            println!("Repository creation cancelled.");
            return Ok(());
        };
        let target = self.env.cwd.join(&repository.name);
        let Some(clone) = EasySelect::confirm(format!(
            "Clone it into '{}'?",
            target.display()
        ))
        .default(true)
        .prompt()?
        else {
            println!("Repository creation cancelled.");
            return Ok(());
        };

        if clone && target.exists() {
            bail!(
                "'{}' already exists, remove or rename it, or create without cloning",
                target.display()
            );
        }

        self.clear();
        println!(
            "{}",
            TitleFormat::action("Creating GitHub repository").sub_title(&repository.name)
        );
        let report = self.gh.create(&repository, clone, &self.env.cwd).await;
        if !self.report("Repository created", &report) {
            println!("The remote repository may exist even though a local step failed.");
            return Ok(());
        }
        if !clone {
            return Ok(());
        }

        if !is_git_repository(&target) {
            println!(
                "{}",
                TitleFormat::warning(format!(
                    "Clone expected at '{}' was not found, clone it manually",
                    target.display()
                ))
            );
            return Ok(());
        }
        self.session.select(target.clone());
        println!(
            "{}",
            TitleFormat::info("Active repository").sub_title(target.display().to_string())
        );

        self.initial_readme(&target, &repository).await
    }

    async fn initial_readme(&self, repo: &Path, repository: &NewRepository) -> Result<()> {
        let readme = repo.join("README.md");
        if readme.exists() {
            return Ok(());
        }
        let create = EasySelect::confirm("Create a default README.md, commit and push it?")
            .default(true)
            .prompt()?;
        if create != Some(true) {
            return Ok(());
        }

        let body = format!(
            "# {}\n\n{}\n",
            repository.name,
            repository.description.as_deref().unwrap_or("A new project.")
        );
        tokio::fs::write(&readme, body)
            .await
            .with_context(|| format!("Failed to write {}", readme.display()))?;

        self.git
            .stage(repo, &["README.md".to_string()])
            .await
            .into_result()?;
        self.git
            .commit(repo, "Initial commit with README")
            .await
            .into_result()?;
        let branch = resolve_branch(self.git.current_branch(repo).await.as_deref());
        let report = self.git.push(repo, "origin", &branch, true).await;
        self.report("README created, committed and pushed", &report);
        Ok(())
    }

    async fn push_project(&mut self) -> Result<()> {
        self.gh.ensure_ready().await?;
        self.header("Push existing project to a new GitHub repository", &[]);

        let Some(input) = EasySelect::input("Path to the local project:")
            .with_default(".")
            .prompt()?
        else {
            println!("Cancelled.");
            return Ok(());
        };
        let path = self.resolve_path(Path::new(input.trim()));
        if !path.is_dir() {
            bail!("'{}' is not a directory", path.display());
        }
        println!("{}", TitleFormat::info("Project").sub_title(path.display().to_string()));

        let Some(repository) = self.ask_new_repository(Some(repository_name(&path)))? else {
            println!("Cancelled.");
            return Ok(());
        };

        let already_git = self.git.is_repository(&path);
        let mut needs_commit = false;

        if !already_git {
            let init = EasySelect::confirm(format!(
                "'{}' is not a git repository. Initialize it now?",
                path.display()
            ))
            .default(true)
            .prompt()?;
            if init != Some(true) {
                println!("Cancelled.");
                return Ok(());
            }
            self.git.init(&path).await?;
            println!("{}", TitleFormat::success("Initialized git repository").sub_title("main"));
            needs_commit = true;
        } else {
            if let Some(remotes) = self.git.remote_details(&path).await
                && remotes.lines().any(|line| line.starts_with("origin\t"))
            {
                println!("{}", TitleFormat::warning("An 'origin' remote already exists"));
                println!("{remotes}");
                let overwrite =
                    EasySelect::confirm("Replace 'origin' with the new GitHub repository?")
                        .prompt()?;
                if overwrite != Some(true) {
                    println!("Cancelled. Manage remotes manually or pick another project.");
                    return Ok(());
                }
                self.git.remove_remote(&path, "origin").await;
            }

            if !self.git.changed_files(&path).await?.is_empty() {
                println!("{}", TitleFormat::warning("Uncommitted changes or untracked files exist"));
                needs_commit = EasySelect::confirm("Add all files and commit them?")
                    .default(true)
                    .prompt()?
                    == Some(true);
            } else if !self.git.has_commits(&path).await {
                println!("{}", TitleFormat::info("No commits yet, an initial commit will be made"));
                needs_commit = true;
            }
        }

        self.clear();
        println!(
            "{}",
            TitleFormat::action("Creating GitHub repository").sub_title(&repository.name)
        );
        match self
            .gh
            .create_from_source(&repository, &path, &self.git)
            .await?
        {
            SourceSetup::Created { url } => {
                let title = TitleFormat::success("Repository created");
                match url {
                    Some(url) => println!("{}", title.sub_title(url)),
                    None => println!("{title}"),
                }
            }
            SourceSetup::RemoteRecovered { url } => {
                println!(
                    "{}",
                    TitleFormat::warning("gh could not add 'origin', it was set manually")
                        .sub_title(url)
                );
            }
        }

        if needs_commit {
            self.git.stage_all(&path).await.into_result()?;
            if !self.git.has_staged_changes(&path).await {
                println!("{}", TitleFormat::info("No new changes staged"));
                needs_commit = false;
            }
        }

        if needs_commit {
            let default = if already_git { "Update project files" } else { "Initial commit" };
            let Some(message) = EasySelect::input("Commit message:")
                .with_default(default)
                .prompt()?
            else {
                println!("Commit cancelled, nothing was pushed.");
                return Ok(());
            };
            let report = self.git.commit(&path, &message).await.into_result()?;
            self.report("Project files committed", &report);
        }

        let branch = resolve_branch(self.git.current_branch(&path).await.as_deref());
        println!(
            "{}",
            TitleFormat::action("Pushing").sub_title(format!("{branch} to origin/{branch}"))
        );
        let report = self.git.push(&path, "origin", &branch, true).await;
        self.report("Project pushed", &report);

        self.session.select(path);
        Ok(())
    }

    /// Asks for a repository path until a valid one is chosen or the user
    /// cancels. Offers to initialize plain directories.
    async fn choose_repository(&mut self) -> Result<bool> {
        loop {
            let default = self
                .session
                .current()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| ".".to_string());
            let Some(input) = EasySelect::input("Path to your local git repository:")
                .with_default(default)
                .prompt()?
            else {
                println!("Repository selection cancelled.");
                return Ok(false);
            };

            let path = self.resolve_path(Path::new(input.trim()));
            if !path.is_dir() {
                println!(
                    "{}",
                    TitleFormat::error(format!("'{}' is not a directory", path.display()))
                );
                continue;
            }
            if is_git_repository(&path) {
                self.session.select(path.clone());
                println!(
                    "{}",
                    TitleFormat::success("Current repository").sub_title(path.display().to_string())
                );
                return Ok(true);
            }

            let init = EasySelect::confirm(format!(
                "'{}' is not a git repository. Initialize it?",
                path.display()
            ))
            .prompt()?;
            if init == Some(true) {
                self.git.init(&path).await?;
                println!(
                    "{}",
                    TitleFormat::success("Initialized git repository")
                        .sub_title(path.display().to_string())
                );
                self.session.select(path);
                return Ok(true);
            }
            println!(
                "{}",
                TitleFormat::info("Not initialized, choose a directory that is a git repository")
            );
        }
    }

    async fn local_menu(&mut self) -> Result<()> {
        loop {
            if !self.session.is_valid() {
                if let Some(stale) = self.session.current() {
                    println!(
                        "{}",
                        TitleFormat::warning(format!(
                            "'{}' is no longer a valid git repository",
                            stale.display()
                        ))
                    );
                    self.session.clear();
                }
                if !self.choose_repository().await? {
                    return Ok(());
                }
            }
            let Some(repo) = self.session.current().map(Path::to_path_buf) else {
                return Ok(());
            };

            self.clear();
            self.header(
                &format!("Local repository: {}", self.session.display_name()),
                &[repo.display().to_string()],
            );
            let items: Vec<LocalMenu> = LocalMenu::iter().collect();
            let Some(choice) = self.choose("What would you like to do?", items, 0)? else {
                return Ok(());
            };
            self.clear();
            tracing::debug!(?choice, "Local menu");

            let result = match choice {
                LocalMenu::Status => self.status(&repo).await,
                LocalMenu::Browse => self.browse(&repo).await,
                LocalMenu::Stage => self.stage(&repo).await,
                LocalMenu::Commit => self.commit(&repo).await,
                LocalMenu::Push => self.push(&repo).await,
                LocalMenu::Pull => self.pull(&repo).await,
                LocalMenu::ChangeRepository => {
                    if let Err(error) = self.choose_repository().await {
                        Self::print_error(&error);
                        Self::wait("\nPress Enter to continue...");
                    }
                    continue;
                }
                LocalMenu::Back => return Ok(()),
            };
            if let Err(error) = &result {
                Self::print_error(error);
            }
            if choice != LocalMenu::Browse || result.is_err() {
                Self::wait("\nPress Enter to continue...");
            }
        }
    }

    async fn status(&self, repo: &Path) -> Result<()> {
        println!("{}", TitleFormat::info("git status").sub_title(repository_name(repo)));
        let result = self.git.status(repo).await;
        if !result.success() {
            return Err(Error::command(&result).into());
        }
        Ok(())
    }

    async fn stage(&self, repo: &Path) -> Result<()> {
        self.header("Stage changes", &[]);
        let files = self.git.changed_files(repo).await?;
        if files.is_empty() {
            println!("{}", TitleFormat::success("No changes to stage"));
            return Ok(());
        }

        let mut choices = vec![StageChoice::All];
        choices.extend(files.into_iter().map(StageChoice::File));
        let Some(selected) =
            EasySelect::multi_select("Select files to stage:", choices).prompt()?
        else {
            println!("Staging cancelled.");
            return Ok(());
        };

        let report = if selected.contains(&StageChoice::All) {
            self.git.stage_all(repo).await
        } else {
            let files: Vec<String> = selected
                .into_iter()
                .filter_map(|choice| match choice {
                    StageChoice::File(path) => Some(path),
                    StageChoice::All => None,
                })
                .collect();
            self.git.stage(repo, &files).await
        };
        self.report("Changes staged", &report);
        Ok(())
    }

    async fn commit(&self, repo: &Path) -> Result<()> {
        self.header("Commit changes", &[]);
        if !self.git.has_staged_changes(repo).await {
            println!("{}", TitleFormat::info("No changes staged for commit"));
            if !self.git.has_unstaged_changes(repo).await {
                return Ok(());
            }
            let stage_all =
                EasySelect::confirm("Unstaged changes exist. Stage all and commit?").prompt()?;
            if stage_all != Some(true) {
                println!("Commit cancelled.");
                return Ok(());
            }
            self.git.stage_all(repo).await.into_result()?;
            if !self.git.has_staged_changes(repo).await {
                return Ok(());
            }
        }

        let Some(message) = EasySelect::input("Commit message:").prompt()? else {
            println!("Commit cancelled.");
            return Ok(());
        };
        let report = self.git.commit(repo, message.trim()).await;
        self.report("Changes committed", &report);
        Ok(())
    }

    async fn push(&self, repo: &Path) -> Result<()> {
        self.header("Push changes", &[]);
        let branch = resolve_branch(self.git.current_branch(repo).await.as_deref());
        let remotes = self.git.remotes(repo).await;
        let Some(preferred) = preferred_remote(&remotes) else {
            bail!("No remotes configured for this repository");
        };

        let remote = if remotes.len() > 1 {
            let cursor = remotes.iter().position(|r| r == preferred).unwrap_or_default();
            let Some(remote) = EasySelect::select("Remote to push to:", remotes.clone())
                .starting_cursor(cursor)
                .prompt()?
            else {
                println!("Push cancelled.");
                return Ok(());
            };
            remote
        } else {
            preferred.to_string()
        };

        let has_upstream = self.git.has_upstream(repo, &branch).await;
        if !has_upstream {
            println!(
                "{}",
                TitleFormat::info(format!("Branch '{branch}' has no upstream on '{remote}'"))
            );
            let confirmed =
                EasySelect::confirm(format!("Set upstream to '{remote}/{branch}' and push?"))
                    .default(true)
                    .prompt()?;
            if confirmed != Some(true) {
                println!("Push cancelled.");
                return Ok(());
            }
        }

        println!(
            "{}",
            TitleFormat::action("Pushing").sub_title(format!("{branch} to {remote}"))
        );
        let report = self.git.push(repo, &remote, &branch, !has_upstream).await;
        self.report("Changes pushed", &report);
        Ok(())
    }

    async fn pull(&self, repo: &Path) -> Result<()> {
        self.header("Pull changes", &[]);
        println!("{}", TitleFormat::action("Pulling"));
        let report = self.git.pull(repo).await;
        self.report("Changes pulled", &report);
        Ok(())
    }

    async fn remote_menu(&mut self) -> Result<()> {
        loop {
            self.clear();
            self.header("Manage remote GitHub repositories", &[]);
            let items: Vec<RemoteMenu> = RemoteMenu::iter().collect();
            let Some(choice) = self.choose("What would you like to do?", items, 0)? else {
                return Ok(());
            };
            self.clear();
            tracing::debug!(?choice, "Remote menu");

            let result = match choice {
                RemoteMenu::View => self.view_remotes().await,
                RemoteMenu::Rename => self.rename_remote().await,
                RemoteMenu::EditDescription => self.edit_remote_description().await,
                RemoteMenu::Delete => self.delete_remote().await,
                RemoteMenu::Back => return Ok(()),
            };
            if let Err(error) = &result {
                Self::print_error(error);
            }
            Self::wait("\nPress Enter to continue...");
        }
    }

    async fn fetch_repositories(&self) -> Result<Vec<RemoteRepository>> {
        self.gh.ensure_ready().await?;
        println!("{}", TitleFormat::action("Fetching your remote repositories"));
        let repositories = self.gh.list_repositories(self.env.repo_list_limit).await?;
        if repositories.is_empty() {
            println!("{}", TitleFormat::info("No remote repositories found"));
        }
        Ok(repositories)
    }

    async fn pick_repository(
        &self,
        message: &str,
        with_description: bool,
    ) -> Result<Option<RemoteRepository>> {
        let repositories = self.fetch_repositories().await?;
        if repositories.is_empty() {
            return Ok(None);
        }
        self.clear();

        let labelled: Vec<Labelled<RemoteRepository>> = repositories
            .into_iter()
            .map(|repo| {
                let label = if with_description {
                    format!("{repo} - {}", truncate_chars(repo.description_or_default(), 50))
                } else {
                    repo.to_string()
                };
                Labelled { value: repo, label }
            })
            .collect();

        let selected = EasySelect::select(message, labelled)
            .page_size(15)
            .help_message("↑↓ to move, enter to select, type to filter by name")
            .prompt()?;
        Ok(selected.map(|labelled| labelled.value))
    }

    async fn view_remotes(&self) -> Result<()> {
        let repositories = self.fetch_repositories().await?;
        if repositories.is_empty() {
            return Ok(());
        }
        self.clear();
        self.header("Your remote GitHub repositories", &[]);
        for repo in &repositories {
            let description = repo.description.as_deref().unwrap_or("N/A");
            println!(
                "  ➡️  {:<35} (Vis: {:<7} | Desc: {:<35} | Upd: {})",
                repo.name_with_owner,
                repo.visibility.as_deref().unwrap_or("N/A"),
                truncate_chars(description, 30),
                repo.updated_date()
            );
        }
        println!("{}", "-".repeat(self.layout.width().min(100)));
        Ok(())
    }

    async fn rename_remote(&self) -> Result<()> {
        let Some(repo) = self.pick_repository("Select repository to RENAME:", false).await? else {
            println!("Rename cancelled.");
            return Ok(());
        };
        self.clear();
        println!("{}", TitleFormat::info("Renaming").sub_title(&repo.name_with_owner));

        let Some(new_name) = EasySelect::input("New name (without owner):")
            .with_validator(|name| validate_repository_name(name).map_err(|e| e.to_string()))
            .prompt()?
        else {
            println!("Rename cancelled.");
            return Ok(());
        };

        let report = self.gh.rename(&repo.name_with_owner, &new_name).await?;
        if self.report(&format!("Renamed to '{new_name}'"), &report) {
            println!(
                "{}",
                TitleFormat::info("Update the remote URL of local clones if needed")
            );
        }
        Ok(())
    }

    async fn edit_remote_description(&self) -> Result<()> {
        let Some(repo) = self
            .pick_repository("Select repository to edit:", true)
            .await?
        else {
            println!("Description editing cancelled.");
            return Ok(());
        };
        self.clear();

        let current = match self.gh.description(&repo.name_with_owner).await {
            Ok(description) => description,
            Err(error) => {
                println!(
                    "{}",
                    TitleFormat::warning(format!("Could not fetch current description: {error}"))
                );
                String::new()
            }
        };
        self.header(
            &format!("Edit description for {}", repo.name_with_owner),
            &[if current.is_empty() {
                "Current description: (empty)".to_string()
            } else {
                format!("Current description: \"{current}\"")
            }],
        );

        let Some(description) =
            EasySelect::input("New description (leave blank to clear, Esc to cancel):")
                .allow_empty(true)
                .with_initial_value(current)
                .prompt()?
        else {
            println!("Description editing cancelled.");
            return Ok(());
        };

        let description = description.trim();
        let report = self
            .gh
            .edit_description(&repo.name_with_owner, description)
            .await;
        let what = if description.is_empty() {
            "Description cleared".to_string()
        } else {
            format!("Description updated to \"{description}\"")
        };
        self.report(&what, &report);
        Ok(())
    }

    async fn delete_remote(&self) -> Result<()> {
        let Some(repo) = self.pick_repository("Select repository to DELETE:", false).await? else {
            println!("Deletion cancelled.");
            return Ok(());
        };
        let name = repo.name_with_owner;
        self.clear();
        println!(
            "{}",
            TitleFormat::warning(format!("You are about to delete '{name}'. This is IRREVERSIBLE."))
        );

        let confirmed = EasySelect::confirm(format!("Proceed with deleting '{name}'?")).prompt()?;
        if confirmed != Some(true) {
            println!("Deletion cancelled.");
            return Ok(());
        }

        self.clear();
        println!("🚨 FINAL CONFIRMATION FOR DELETING '{name}' 🚨");
        let typed = EasySelect::input(format!("Type the full repository name ('{name}'):"))
            .prompt()?;
        if typed.as_deref().map(str::trim) != Some(name.as_str()) {
            println!("Name mismatch. Deletion cancelled.");
            return Ok(());
        }

        println!(
            "{}",
            TitleFormat::info(format!("'{}' will ask for a final confirmation", self.gh.program()))
        );
        let report = self.gh.delete(&name).await;
        if !self.report(&format!("Repository '{name}' deleted"), &report) {
            println!("The repository was not deleted or the gh prompt was cancelled.");
        }
        Ok(())
    }
}

/// Prompt option with a custom label.
struct Labelled<T> {
    value: T,
    label: String,
}

impl<T> Display for Labelled<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
