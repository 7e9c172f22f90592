use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// Entry of a directory listing shown by the file browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl fmt::Display for DirEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dir {
            write!(f, "📁 {}/", self.name)
        } else {
            write!(f, "📄 {}", self.name)
        }
    }
}

/// Lists `dir` sorted by name, hiding the `.git` directory.
pub async fn list_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut reader = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to list directory {}", dir.display()))?;

    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == ".git" {
            continue;
        }
        // Follows symlinks so a link to a directory can be entered.
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        entries.push(DirEntry { name, is_dir });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Leading lines of a text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub lines: Vec<String>,
    pub truncated: bool,
}

impl FilePreview {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Reads at most `max_lines` lines; invalid UTF-8 is replaced.
pub async fn read_preview(path: &Path, max_lines: usize) -> Result<FilePreview> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let mut lines = content.lines();
    let head: Vec<String> = lines.by_ref().take(max_lines).map(str::to_string).collect();
    let truncated = lines.next().is_some();

    Ok(FilePreview { lines: head, truncated })
}

/// Creates an empty file, including missing parent directories. Returns
/// `false` when the file already existed.
pub async fn create_empty_file(path: &Path) -> Result<bool> {
    if tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("Failed to create file {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn test_list_entries_sorted_and_hides_git() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();

        let actual = list_entries(dir.path()).await.unwrap();
        let expected = vec![
            DirEntry { name: "a.txt".into(), is_dir: false },
            DirEntry { name: "b.txt".into(), is_dir: false },
            DirEntry { name: "src".into(), is_dir: true },
        ];
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_list_missing_directory_fails() {
        let actual = list_entries(Path::new("/definitely/not/here")).await;
        assert!(actual.is_err());
    }

    #[test]
    fn test_dir_entry_display() {
        let dir = DirEntry { name: "src".into(), is_dir: true };
        let file = DirEntry { name: "main.rs".into(), is_dir: false };

        assert_eq!(dir.to_string(), "📁 src/");
        assert_eq!(file.to_string(), "📄 main.rs");
    }

    #[tokio::test]
    async fn test_read_preview_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("long.txt");
        std::fs::write(&path, "1\n2\n3\n4\n").unwrap();

        let actual = read_preview(&path, 2).await.unwrap();
        let expected = FilePreview { lines: vec!["1".into(), "2".into()], truncated: true };
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_read_preview_exact_fit_is_not_truncated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.txt");
        std::fs::write(&path, "1\n2\n").unwrap();

        let actual = read_preview(&path, 2).await.unwrap();
        assert!(!actual.truncated);
        assert_eq!(actual.lines.len(), 2);
    }

    #[tokio::test]
    async fn test_read_preview_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        let actual = read_preview(&path, 50).await.unwrap();
        assert!(actual.is_empty());
    }

    #[tokio::test]
    async fn test_create_empty_file_with_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dir/new.rs");

        let created = create_empty_file(&path).await.unwrap();
        let again = create_empty_file(&path).await.unwrap();

        assert!(created);
        assert!(!again);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
