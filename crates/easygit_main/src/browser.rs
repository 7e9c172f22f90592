use std::path::Path;

use anyhow::Result;
use easygit_display::TitleFormat;
use easygit_domain::browse::{self, Action, Browser, Command, FileAction};
use easygit_domain::{CommandExecutor, repository_name};
use easygit_infra::{Editor, create_empty_file, list_entries, read_preview};
use easygit_select::{EasySelect, pause};
use strum::IntoEnumIterator;

use crate::menu::BrowseChoice;
use crate::ui::UI;

impl<E: CommandExecutor> UI<E> {
    /// File browser rooted at `repo`. Loops over [`browse::update`] until the
    /// user goes back to the local menu.
    pub(crate) async fn browse(&self, repo: &Path) -> Result<()> {
        let mut state = Browser::new();
        let name = repository_name(repo);

        loop {
            self.clear();
            self.header(&format!("Files in: {}", state.display(&name)), &[]);

            let entries = list_entries(&repo.join(state.cwd())).await?;
            let mut choices = Vec::with_capacity(entries.len() + 3);
            if !state.is_root() {
                choices.push(BrowseChoice::Up);
            }
            choices.extend(entries.into_iter().map(BrowseChoice::Entry));
            choices.push(BrowseChoice::CreateFile);
            choices.push(BrowseChoice::Back);

            let Some(choice) = EasySelect::select("Select an item or action:", choices)
                .page_size(20)
                .prompt()?
            else {
                return Ok(());
            };

            let action = match choice {
                BrowseChoice::Up => Action::Up,
                BrowseChoice::Entry(entry) if entry.is_dir => Action::Enter(entry.name),
                BrowseChoice::Entry(entry) => Action::Open(entry.name),
                BrowseChoice::CreateFile => {
                    let Some(file_name) =
                        EasySelect::input("New file name (e.g. src/script.py):").prompt()?
                    else {
                        continue;
                    };
                    Action::Create(file_name)
                }
                BrowseChoice::Back => Action::Exit,
            };

            let mut command = browse::update(&mut state, action);
            loop {
                command = match command {
                    Command::Empty => break,
                    Command::Exit => return Ok(()),
                    Command::Reject(error) => {
                        println!("{}", TitleFormat::error(error.to_string()));
                        Self::pause_browser("Press Enter to return to the file list...");
                        break;
                    }
                    Command::ChooseFileAction(path) => {
                        self.clear();
                        println!("{}", TitleFormat::info("File").sub_title(path.display().to_string()));
                        let actions: Vec<FileAction> = FileAction::iter().collect();
                        let Some(file_action) =
                            EasySelect::select("What do you want to do?", actions).prompt()?
                        else {
                            break;
                        };
                        browse::update(&mut state, Action::File { action: file_action, path })
                    }
                    Command::Edit(path) => {
                        self.edit(&repo.join(path)).await;
                        break;
                    }
                    Command::View(path) => {
                        self.clear();
                        self.view(&repo.join(path)).await?;
                        Self::pause_browser("\nPress Enter to return to the file list...");
                        break;
                    }
                    Command::Create(path) => {
                        self.create(&repo.join(path)).await?;
                        break;
                    }
                };
            }
        }
    }

    fn pause_browser(message: &str) {
        if let Err(error) = pause(message) {
            tracing::debug!(%error, "Pause interrupted");
        }
    }

    async fn edit(&self, path: &Path) {
        let editor = Editor::new(self.executor.as_ref(), &self.env.editor);
        let result = editor.edit(path).await;
        if result.success() {
            println!("{}", TitleFormat::success("Finished editing").sub_title(path.display().to_string()));
        } else {
            let reason = result
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| format!("exit code {}", result.exit_code()));
            println!(
                "{}",
                TitleFormat::warning(format!("Editor '{}' did not finish cleanly", self.env.editor))
                    .sub_title(reason)
            );
            Self::pause_browser("Press Enter to continue...");
        }
    }

    async fn view(&self, path: &Path) -> Result<()> {
        let limit = self.env.view_max_lines;
        self.header(
            &format!("Content of {} (first {limit} lines)", repository_name(path)),
            &[],
        );
        let preview = read_preview(path, limit).await?;
        if preview.is_empty() {
            println!("(File is empty)");
        }
        for line in &preview.lines {
            println!("{line}");
        }
        if preview.truncated {
            println!("... (output truncated at {limit} lines)");
        }
        Ok(())
    }

    async fn create(&self, path: &Path) -> Result<()> {
        if create_empty_file(path).await? {
            println!("{}", TitleFormat::success("Created").sub_title(path.display().to_string()));
            self.edit(path).await;
            return Ok(());
        }

        println!(
            "{}",
            TitleFormat::warning(format!("'{}' already exists", path.display()))
        );
        let edit = EasySelect::confirm("Edit the existing file?")
            .default(true)
            .prompt()?;
        if edit == Some(true) {
            self.edit(path).await;
        }
        Ok(())
    }
}
