use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use derive_setters::Setters;

/// A fully described request to run an external program.
///
/// `args[0]` is the program, the remaining entries are passed verbatim. No
/// shell is involved, so arguments never need quoting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct Invocation {
    #[setters(skip)]
    args: Vec<String>,
    /// Directory to run in; the caller's current directory when `None`.
    #[setters(strip_option)]
    cwd: Option<PathBuf>,
    /// Capture stdout/stderr instead of inheriting the terminal.
    capture: bool,
    /// Variables layered on top of the inherited environment.
    #[setters(skip)]
    env: BTreeMap<String, String>,
}

impl Invocation {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { args: args.into_iter().map(Into::into).collect(), ..Default::default() }
    }

    /// Appends more arguments to the command line.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds an environment override. Later values win on key collision.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn arguments(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn is_captured(&self) -> bool {
        self.capture
    }

    pub fn env_overrides(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arg in &self.args {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                write!(f, "'{}'", arg.replace('\'', "'\\''"))?;
            } else {
                f.write_str(arg)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_builder_collects_program_and_arguments() {
        let fixture = Invocation::new(["git", "commit"]).args(["-m", "init"]).capture(true);

        assert_eq!(fixture.program(), Some("git"));
        assert_eq!(fixture.arguments(), &["commit", "-m", "init"]);
        assert!(fixture.is_captured());
        assert_eq!(fixture.working_dir(), None);
    }

    #[test]
    fn test_env_override_last_write_wins() {
        let fixture = Invocation::new(["env"]).env("KEY", "one").env("KEY", "two");

        let actual = fixture.env_overrides().get("KEY").cloned();
        let expected = Some("two".to_string());
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_empty_invocation_has_no_program() {
        let fixture = Invocation::new(Vec::<String>::new());

        assert!(fixture.is_empty());
        assert_eq!(fixture.program(), None);
        assert!(fixture.arguments().is_empty());
    }

    #[test]
    fn test_display_quotes_arguments_with_spaces() {
        let fixture = Invocation::new(["git", "commit", "-m", "first commit"]);

        let actual = fixture.to_string();
        let expected = "git commit -m 'first commit'";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_cwd_setter() {
        let fixture = Invocation::new(["git", "status"]).cwd("/tmp/repo");

        assert_eq!(fixture.working_dir(), Some(Path::new("/tmp/repo")));
    }
}
