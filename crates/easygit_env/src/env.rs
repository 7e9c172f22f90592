use std::path::PathBuf;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

pub const VERSION: &str = match option_env!("APP_VERSION") {
    Some(val) => val,
    None => env!("CARGO_PKG_VERSION"),
};

#[derive(Debug, Setters, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[setters(into)]
/// Represents the environment in which the application is running.
pub struct Environment {
    /// The operating system of the environment.
    pub os: String,
    /// The current working directory.
    pub cwd: PathBuf,
    /// The home directory.
    pub home: Option<PathBuf>,
    /// The base path relative to which logs are stored.
    pub base_path: PathBuf,
    /// Program used to open files for editing.
    /// Controlled by EASYGIT_EDITOR, then EDITOR.
    pub editor: String,
    /// The git executable.
    /// Controlled by EASYGIT_GIT environment variable.
    pub git_command: String,
    /// The GitHub CLI executable.
    /// Controlled by EASYGIT_GH environment variable.
    pub gh_command: String,
    /// Whether to clear the terminal before each menu.
    /// Controlled by EASYGIT_CLEAR_SCREEN environment variable.
    pub clear_screen: bool,
    /// Whether menu titles are centered in the terminal.
    /// Controlled by EASYGIT_CENTER_MENUS environment variable.
    pub center_menus: bool,
    /// Maximum number of repositories fetched from GitHub.
    /// Controlled by EASYGIT_REPO_LIMIT environment variable.
    pub repo_list_limit: usize,
    /// Maximum number of lines shown when viewing a file.
    /// Controlled by EASYGIT_VIEW_LINES environment variable.
    pub view_max_lines: usize,
}

/// Editor used when neither EASYGIT_EDITOR nor EDITOR is set.
pub fn default_editor() -> &'static str {
    if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            cwd: PathBuf::from("."),
            home: None,
            base_path: PathBuf::from(".easygit"),
            editor: default_editor().to_string(),
            git_command: "git".to_string(),
            gh_command: "gh".to_string(),
            clear_screen: true,
            center_menus: true,
            repo_list_limit: 100,
            view_max_lines: 50,
        }
    }
}

impl Environment {
    pub fn log_path(&self) -> PathBuf {
        self.base_path.join("logs")
    }
}
