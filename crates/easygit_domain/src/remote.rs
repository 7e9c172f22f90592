use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::Error;

/// Fields requested from `gh repo list --json`.
pub const REPOSITORY_JSON_FIELDS: &str = "nameWithOwner,name,visibility,updatedAt,description";

/// A repository as reported by the GitHub CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRepository {
    pub name_with_owner: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RemoteRepository {
    /// Parses the JSON array printed by `gh repo list --json`.
    pub fn parse_list(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }

    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|desc| !desc.is_empty())
            .unwrap_or("No description")
    }

    /// Date part of `updatedAt`, `N/A` when missing.
    pub fn updated_date(&self) -> &str {
        self.updated_at
            .as_deref()
            .map(|date| date.get(..10).unwrap_or(date))
            .unwrap_or("N/A")
    }
}

impl fmt::Display for RemoteRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.name_with_owner,
            self.visibility.as_deref().unwrap_or("N/A")
        )
    }
}

/// Body of `gh repo view <repo> --json description`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryDescription {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
    Internal,
}

impl Visibility {
    /// Flag understood by `gh repo create`.
    pub fn flag(&self) -> String {
        format!("--{self}")
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "private" => Ok(Self::Private),
            "public" => Ok(Self::Public),
            "internal" => Ok(Self::Internal),
            _ => Err(Error::UnknownVisibility(s.to_string())),
        }
    }
}

/// Checks a bare repository name (no owner prefix).
pub fn validate_repository_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    if name.contains('/') || name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidRepositoryName(name.to_string()));
    }
    Ok(())
}

/// Finds the first `https://github.com/...` line in gh output.
pub fn extract_repository_url(output: &str) -> Option<&str> {
    output
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("https://github.com/"))
}

/// Shortens `text` to `max` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_repo_list() {
        let fixture = r#"[{"nameWithOwner":"me/demo","name":"demo","visibility":"PUBLIC","updatedAt":"2024-05-01T10:00:00Z","description":"A demo"},{"nameWithOwner":"me/empty","name":"empty","visibility":"PRIVATE","updatedAt":"2024-05-02T10:00:00Z","description":null}]"#;

        let actual = RemoteRepository::parse_list(fixture).unwrap();

        assert_eq!(actual.len(), 2);
        assert_eq!(actual[0].name_with_owner, "me/demo");
        assert_eq!(actual[0].updated_date(), "2024-05-01");
        assert_eq!(actual[1].description_or_default(), "No description");
        assert_eq!(actual[1].to_string(), "me/empty (PRIVATE)");
    }

    #[test]
    fn test_parse_empty_list() {
        let actual = RemoteRepository::parse_list("[]").unwrap();
        assert!(actual.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_an_error() {
        let actual = RemoteRepository::parse_list("not json");
        assert!(actual.is_err());
    }

    #[test]
    fn test_missing_optional_fields() {
        let fixture = r#"[{"nameWithOwner":"me/bare"}]"#;

        let actual = RemoteRepository::parse_list(fixture).unwrap();

        assert_eq!(actual[0].updated_date(), "N/A");
        assert_eq!(actual[0].to_string(), "me/bare (N/A)");
    }

    #[test]
    fn test_visibility_flag_and_parse() {
        assert_eq!(Visibility::default(), Visibility::Private);
        assert_eq!(Visibility::Public.flag(), "--public");
        assert_eq!("Internal".parse::<Visibility>(), Ok(Visibility::Internal));
        assert_eq!(
            "secret".parse::<Visibility>(),
            Err(Error::UnknownVisibility("secret".into()))
        );
    }

    #[test]
    fn test_validate_repository_name() {
        assert_eq!(validate_repository_name("good-name"), Ok(()));
        assert_eq!(validate_repository_name(""), Err(Error::EmptyName));
        assert_eq!(
            validate_repository_name("me/demo"),
            Err(Error::InvalidRepositoryName("me/demo".into()))
        );
        assert_eq!(
            validate_repository_name("two words"),
            Err(Error::InvalidRepositoryName("two words".into()))
        );
    }

    #[test]
    fn test_extract_repository_url() {
        let fixture = "✓ Created repository me/demo on GitHub\n  https://github.com/me/demo\n";

        let actual = extract_repository_url(fixture);
        let expected = Some("https://github.com/me/demo");
        assert_eq!(actual, expected);
        assert_eq!(extract_repository_url("no url here"), None);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdefghij", 4), "abcd...");
    }
}
