/// Branch name given to every repository this tool initializes, and the
/// fallback when the current branch cannot be determined.
pub const DEFAULT_BRANCH: &str = "main";

/// Picks the branch to push from `git rev-parse --abbrev-ref HEAD` output.
///
/// A detached head reports `HEAD`; that and an empty answer fall back to
/// [`DEFAULT_BRANCH`].
pub fn resolve_branch(rev_parse_output: Option<&str>) -> String {
    rev_parse_output
        .map(str::trim)
        .filter(|branch| !branch.is_empty() && *branch != "HEAD")
        .unwrap_or(DEFAULT_BRANCH)
        .to_string()
}

/// Picks the remote to push to when the user is not asked.
///
/// A single remote is used as is; otherwise `origin` is preferred, then the
/// first listed remote.
pub fn preferred_remote(remotes: &[String]) -> Option<&str> {
    match remotes {
        [] => None,
        [only] => Some(only.as_str()),
        _ => remotes
            .iter()
            .find(|remote| *remote == "origin")
            .or_else(|| remotes.first())
            .map(String::as_str),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resolve_branch() {
        assert_eq!(resolve_branch(Some("develop\n")), "develop");
        assert_eq!(resolve_branch(Some("HEAD")), "main");
        assert_eq!(resolve_branch(Some("")), "main");
        assert_eq!(resolve_branch(None), "main");
    }

    #[test]
    fn test_preferred_remote() {
        let none: Vec<String> = vec![];
        let single = vec!["upstream".to_string()];
        let with_origin = vec!["fork".to_string(), "origin".to_string()];
        let without_origin = vec!["fork".to_string(), "upstream".to_string()];

        assert_eq!(preferred_remote(&none), None);
        assert_eq!(preferred_remote(&single), Some("upstream"));
        assert_eq!(preferred_remote(&with_origin), Some("origin"));
        assert_eq!(preferred_remote(&without_origin), Some("fork"));
    }
}
