use std::fmt;

use easygit_display::Layout;
use easygit_infra::DirEntry;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MainMenu {
    #[strum(to_string = "🔑 Authenticate GitHub account")]
    Authenticate,
    #[strum(to_string = "☁️  Create new empty GitHub repo (and clone)")]
    CreateRepository,
    #[strum(to_string = "🚀 Push existing local project to new GitHub repo")]
    PushProject,
    #[strum(to_string = "💻 Work with local repository")]
    WorkLocal,
    #[strum(to_string = "🛠️  Manage remote GitHub repositories")]
    ManageRemote,
    #[strum(to_string = "🚪 Exit")]
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum LocalMenu {
    #[strum(to_string = "📊 View status")]
    Status,
    #[strum(to_string = "📝 Browse / modify files")]
    Browse,
    #[strum(to_string = "➕ Stage changes")]
    Stage,
    #[strum(to_string = "✉️  Commit changes")]
    Commit,
    #[strum(to_string = "⬆️  Push changes")]
    Push,
    #[strum(to_string = "⬇️  Pull changes")]
    Pull,
    #[strum(to_string = "🔄 Change current repository")]
    ChangeRepository,
    #[strum(to_string = "🔙 Back to main menu")]
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum RemoteMenu {
    #[strum(to_string = "👁️  View my remote repositories")]
    View,
    #[strum(to_string = "✏️  Rename remote repository")]
    Rename,
    #[strum(to_string = "📜 Edit remote repository description")]
    EditDescription,
    #[strum(to_string = "🗑️  Delete remote repository")]
    Delete,
    #[strum(to_string = "🔙 Back to main menu")]
    Back,
}

/// One row of the file browser listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseChoice {
    Up,
    Entry(DirEntry),
    CreateFile,
    Back,
}

impl fmt::Display for BrowseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowseChoice::Up => f.write_str("⬆️  [Go up a directory]"),
            BrowseChoice::Entry(entry) => write!(f, "{entry}"),
            BrowseChoice::CreateFile => f.write_str("➕ [Create new file here]"),
            BrowseChoice::Back => f.write_str("🔙 [Back to local repository menu]"),
        }
    }
}

/// Entries offered by the stage prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageChoice {
    All,
    File(String),
}

impl fmt::Display for StageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageChoice::All => f.write_str("[Stage ALL changes] (git add .)"),
            StageChoice::File(path) => f.write_str(path),
        }
    }
}

/// A prompt option whose label may carry layout padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption<T> {
    pub value: T,
    label: String,
}

impl<T> fmt::Display for MenuOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Wraps `values` as prompt options. With centering enabled the labels are
/// indented as one block so they stay aligned with each other.
pub fn options<T: fmt::Display>(values: Vec<T>, layout: &Layout) -> Vec<MenuOption<T>> {
    let labels: Vec<String> = values.iter().map(ToString::to_string).collect();
    let widest = labels
        .iter()
        .map(|label| console::measure_text_width(label))
        .max()
        .unwrap_or_default();
    // Room for the prompt's own highlight prefix.
    let pad = " ".repeat(layout.indent(widest + 2));

    values
        .into_iter()
        .zip(labels)
        .map(|(value, label)| MenuOption { value, label: format!("{pad}{label}") })
        .collect()
}
