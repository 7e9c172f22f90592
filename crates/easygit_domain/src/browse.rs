//! Repository file browser as a state machine.
//!
//! The state is the directory being shown, relative to the repository root.
//! [`update`] applies one user action and returns the side effect the caller
//! has to perform; it never touches the filesystem.

use std::path::{Component, Path, PathBuf};

use strum_macros::{Display, EnumIter};

use crate::Error;

/// Directory currently shown, relative to the repository root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Browser {
    cwd: PathBuf,
}

/// What to do with a selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum FileAction {
    #[strum(to_string = "Edit file")]
    Edit,
    #[strum(to_string = "View file content")]
    View,
    #[strum(to_string = "Go back to file list")]
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Descend into a child directory.
    Enter(String),
    /// Go to the parent directory.
    Up,
    /// A file in the current directory was picked.
    Open(String),
    /// The user chose what to do with a previously opened file.
    File { action: FileAction, path: PathBuf },
    /// Create a new file relative to the current directory.
    Create(String),
    /// Leave the browser.
    Exit,
}

/// Side effect requested by [`update`]. Paths are relative to the repository
/// root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    ChooseFileAction(PathBuf),
    Edit(PathBuf),
    View(PathBuf),
    Create(PathBuf),
    Reject(Error),
    Exit,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn is_root(&self) -> bool {
        self.cwd.as_os_str().is_empty()
    }

    /// Label for headers, e.g. `repo/src/bin`.
    pub fn display(&self, repository_name: &str) -> String {
        if self.is_root() {
            repository_name.to_string()
        } else {
            format!("{}/{}", repository_name, self.cwd.display())
        }
    }
}

/// Validates a single directory entry name chosen from a listing.
pub fn validate_entry_name(name: &str) -> Result<(), Error> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        (None, _) => Err(Error::EmptyName),
        (Some(Component::ParentDir), _) => Err(Error::ParentTraversal(name.to_string())),
        (Some(Component::RootDir | Component::Prefix(_)), _) => {
            Err(Error::AbsolutePath(name.to_string()))
        }
        _ => Err(Error::ParentTraversal(name.to_string())),
    }
}

/// Validates a user-typed file name. Nested relative paths are accepted,
/// absolute paths and `..` components are not.
pub fn validate_new_file_name(name: &str) -> Result<(), Error> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    let path = Path::new(name);
    if path.is_absolute() || name.starts_with('/') || name.starts_with('\\') {
        return Err(Error::AbsolutePath(name.to_string()));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(Error::ParentTraversal(name.to_string()));
    }
    Ok(())
}

pub fn update(state: &mut Browser, action: impl Into<Action>) -> Command {
    match action.into() {
        Action::Enter(name) => match validate_entry_name(&name) {
            Ok(()) => {
                state.cwd.push(name);
                Command::Empty
            }
            Err(err) => Command::Reject(err),
        },
        Action::Up => {
            state.cwd.pop();
            Command::Empty
        }
        Action::Open(name) => match validate_entry_name(&name) {
            Ok(()) => Command::ChooseFileAction(state.cwd.join(name)),
            Err(err) => Command::Reject(err),
        },
        Action::File { action, path } => match action {
            FileAction::Edit => Command::Edit(path),
            FileAction::View => Command::View(path),
            FileAction::Back => Command::Empty,
        },
        Action::Create(name) => match validate_new_file_name(&name) {
            Ok(()) => Command::Create(state.cwd.join(name.trim())),
            Err(err) => Command::Reject(err),
        },
        Action::Exit => Command::Exit,
    }
}
