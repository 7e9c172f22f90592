use std::path::{Path, PathBuf};

/// The repository the user is currently working on.
///
/// Owned by the menu layer and handed to workflows; only one repository is
/// active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    repository: Option<PathBuf>,
}

impl Session {
    pub fn new(repository: Option<PathBuf>) -> Self {
        Self { repository }
    }

    pub fn current(&self) -> Option<&Path> {
        self.repository.as_deref()
    }

    pub fn select(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::info!(repository = %path.display(), "Active repository changed");
        self.repository = Some(path);
    }

    pub fn clear(&mut self) {
        self.repository = None;
    }

    pub fn is_selected(&self) -> bool {
        self.repository.is_some()
    }

    /// Basename of the active repository, `N/A` when none is selected.
    pub fn display_name(&self) -> String {
        self.repository
            .as_deref()
            .map(repository_name)
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// True when a repository is selected and still looks like a git checkout.
    pub fn is_valid(&self) -> bool {
        self.repository.as_deref().is_some_and(is_git_repository)
    }
}

/// A directory is treated as a repository when it contains `.git`.
pub fn is_git_repository(path: &Path) -> bool {
    path.is_dir() && path.join(".git").exists()
}

pub fn repository_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_session_select_and_clear() {
        let mut fixture = Session::default();
        assert!(!fixture.is_selected());
        assert_eq!(fixture.display_name(), "N/A");

        fixture.select("/work/demo");
        assert_eq!(fixture.current(), Some(Path::new("/work/demo")));
        assert_eq!(fixture.display_name(), "demo");

        fixture.clear();
        assert_eq!(fixture.current(), None);
    }

    #[test]
    fn test_is_git_repository() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_git_repository(dir.path()));

        std::fs::create_dir(dir.path().join(".git")).unwrap();
        assert!(is_git_repository(dir.path()));

        let session = Session::new(Some(dir.path().to_path_buf()));
        assert!(session.is_valid());
    }

    #[test]
    fn test_missing_directory_is_not_valid() {
        let fixture = Session::new(Some(PathBuf::from("/definitely/not/here")));
        assert!(!fixture.is_valid());
    }
}
