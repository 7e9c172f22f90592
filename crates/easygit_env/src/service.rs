use std::path::{Path, PathBuf};

use crate::{Environment, default_editor};

/// Resolves the [`Environment`] from `.env` files and process variables.
#[derive(Debug, Default, Clone)]
pub struct EnvironmentService;

impl EnvironmentService {
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self) -> Environment {
        let cwd = std::env::current_dir().unwrap_or(PathBuf::from("."));
        Self::load_all(&cwd);
        Self::resolve(cwd, dirs::home_dir(), |key| std::env::var(key).ok())
    }

    /// Builds the environment from an arbitrary variable lookup.
    pub fn resolve(
        cwd: PathBuf,
        home: Option<PathBuf>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Environment {
        let defaults = Environment::default();
        let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let editor = non_empty("EASYGIT_EDITOR")
            .or_else(|| non_empty("EDITOR"))
            .unwrap_or_else(|| default_editor().to_string());

        let base_path = home
            .as_ref()
            .map(|home| home.join(".easygit"))
            .unwrap_or(PathBuf::from(".").join(".easygit"));

        Environment {
            os: std::env::consts::OS.to_string(),
            cwd,
            home,
            base_path,
            editor,
            git_command: non_empty("EASYGIT_GIT").unwrap_or(defaults.git_command),
            gh_command: non_empty("EASYGIT_GH").unwrap_or(defaults.gh_command),
            clear_screen: non_empty("EASYGIT_CLEAR_SCREEN")
                .and_then(|val| parse_bool(&val))
                .unwrap_or(defaults.clear_screen),
            center_menus: non_empty("EASYGIT_CENTER_MENUS")
                .and_then(|val| parse_bool(&val))
                .unwrap_or(defaults.center_menus),
            repo_list_limit: non_empty("EASYGIT_REPO_LIMIT")
                .and_then(|val| val.trim().parse::<usize>().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.repo_list_limit),
            view_max_lines: non_empty("EASYGIT_VIEW_LINES")
                .and_then(|val| val.trim().parse::<usize>().ok())
                .filter(|lines| *lines > 0)
                .unwrap_or(defaults.view_max_lines),
        }
    }

    /// Load all `.env` files with priority to lower (closer) files.
    ///
    /// Variables already present in the process environment are never
    /// overwritten.
    fn load_all(cwd: &Path) {
        let mut paths = vec![];
        let mut current = PathBuf::new();

        for component in cwd.components() {
            current.push(component);
            paths.push(current.clone());
        }

        paths.reverse();

        for path in paths {
            let env_file = path.join(".env");
            if env_file.is_file() {
                match dotenvy::from_path(&env_file) {
                    Ok(()) => tracing::debug!(path = %env_file.display(), "Loaded .env file"),
                    Err(err) => {
                        tracing::warn!(path = %env_file.display(), error = %err, "Failed to load .env file")
                    }
                }
            }
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::{env, fs};

    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use tempfile::tempdir;

    use super::*;

    fn resolve_with(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvironmentService::resolve(
            PathBuf::from("/work"),
            Some(PathBuf::from("/home/user")),
            |key| vars.get(key).cloned(),
        )
    }

    fn write_env_file(dir: &Path, content: &str) {
        fs::write(dir.join(".env"), content).unwrap();
    }

    #[test]
    fn test_defaults_without_variables() {
        let actual = resolve_with(&[]);

        assert_eq!(actual.editor, default_editor());
        assert_eq!(actual.git_command, "git");
        assert_eq!(actual.gh_command, "gh");
        assert!(actual.clear_screen);
        assert!(actual.center_menus);
        assert_eq!(actual.repo_list_limit, 100);
        assert_eq!(actual.view_max_lines, 50);
        assert_eq!(actual.base_path, PathBuf::from("/home/user/.easygit"));
        assert_eq!(actual.log_path(), PathBuf::from("/home/user/.easygit/logs"));
    }

    #[test]
    fn test_editor_precedence() {
        let both = resolve_with(&[("EASYGIT_EDITOR", "vim"), ("EDITOR", "emacs")]);
        let only_editor = resolve_with(&[("EDITOR", "emacs")]);
        let blank = resolve_with(&[("EASYGIT_EDITOR", "  "), ("EDITOR", "micro")]);

        assert_eq!(both.editor, "vim");
        assert_eq!(only_editor.editor, "emacs");
        assert_eq!(blank.editor, "micro");
    }

    #[test]
    fn test_overrides_are_parsed() {
        let actual = resolve_with(&[
            ("EASYGIT_GH", "/opt/gh"),
            ("EASYGIT_CLEAR_SCREEN", "no"),
            ("EASYGIT_CENTER_MENUS", "0"),
            ("EASYGIT_REPO_LIMIT", "25"),
            ("EASYGIT_VIEW_LINES", "10"),
        ]);

        assert_eq!(actual.gh_command, "/opt/gh");
        assert!(!actual.clear_screen);
        assert!(!actual.center_menus);
        assert_eq!(actual.repo_list_limit, 25);
        assert_eq!(actual.view_max_lines, 10);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let actual = resolve_with(&[
            ("EASYGIT_REPO_LIMIT", "lots"),
            ("EASYGIT_VIEW_LINES", "0"),
            ("EASYGIT_CLEAR_SCREEN", "maybe"),
        ]);

        assert_eq!(actual.repo_list_limit, 100);
        assert_eq!(actual.view_max_lines, 50);
        assert!(actual.clear_screen);
    }

    #[test]
    #[serial]
    fn test_load_all_nested_envs_override() {
        let root = tempdir().unwrap();
        let subdir = root.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        write_env_file(root.path(), "EASYGIT_TEST_NESTED=ROOT\nEASYGIT_TEST_ROOT_ONLY=ROOT");
        write_env_file(&subdir, "EASYGIT_TEST_NESTED=SUB");

        EnvironmentService::load_all(&subdir);

        assert_eq!(env::var("EASYGIT_TEST_NESTED").unwrap(), "SUB");
        assert_eq!(env::var("EASYGIT_TEST_ROOT_ONLY").unwrap(), "ROOT");
        unsafe {
            env::remove_var("EASYGIT_TEST_NESTED");
            env::remove_var("EASYGIT_TEST_ROOT_ONLY");
        }
    }

    #[test]
    #[serial]
    fn test_process_env_wins_over_env_file() {
        let root = tempdir().unwrap();
        write_env_file(root.path(), "EASYGIT_TEST_PRECEDENCE=FILE");

        unsafe {
            env::set_var("EASYGIT_TEST_PRECEDENCE", "PROCESS");
        }

        EnvironmentService::load_all(root.path());

        assert_eq!(env::var("EASYGIT_TEST_PRECEDENCE").unwrap(), "PROCESS");
        unsafe {
            env::remove_var("EASYGIT_TEST_PRECEDENCE");
        }
        assert!(env::var("EASYGIT_TEST_PRECEDENCE").is_err());
    }
}
