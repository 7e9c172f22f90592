use std::path::PathBuf;

use clap::Parser;
use easygit_env::Environment;

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"), about = "Menu-driven helper for git and the GitHub CLI")]
pub struct Cli {
    /// Local repository to work on.
    ///
    /// Selected before the main menu is shown; ignored with a warning when
    /// the path is not a git repository.
    #[arg(long, short = 'r')]
    pub repo: Option<PathBuf>,

    /// Keep previous output instead of clearing the screen between menus.
    #[arg(long, default_value_t = false)]
    pub no_clear: bool,

    /// Left-align menus instead of centering them.
    #[arg(long, default_value_t = false)]
    pub no_center: bool,
}

impl Cli {
    /// Flags override the values resolved from the environment.
    pub fn apply(&self, env: Environment) -> Environment {
        let mut env = env;
        if self.no_clear {
            env = env.clear_screen(false);
        }
        if self.no_center {
            env = env.center_menus(false);
        }
        env
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let fixture = Cli::try_parse_from(["easygit"]).unwrap();

        assert_eq!(fixture.repo, None);
        assert!(!fixture.no_clear);
        assert!(!fixture.no_center);
    }

    #[test]
    fn test_flags_override_environment() {
        let fixture = Cli::try_parse_from(["easygit", "--repo", "/work/demo", "--no-clear"]).unwrap();

        let actual = fixture.apply(Environment::default());

        assert_eq!(fixture.repo, Some(PathBuf::from("/work/demo")));
        assert!(!actual.clear_screen);
        assert!(actual.center_menus);
    }

    #[test]
    fn test_no_center() {
        let fixture = Cli::try_parse_from(["easygit", "--no-center"]).unwrap();

        let actual = fixture.apply(Environment::default());

        assert!(!actual.center_menus);
        assert!(actual.clear_screen);
    }
}
