//! Terminal colour policy.
//!
//! Colour is decided once at startup from `NO_COLOR`, `EASYGIT_COLOR` and
//! whether stdout is a terminal. Every styled string goes through
//! [`palette`], which returns plain text when colour is off.

use std::env;
use std::io::IsTerminal;
use std::str::FromStr;
use std::sync::OnceLock;

use colored::ColoredString;

/// Value of `EASYGIT_COLOR`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" | "true" | "1" | "yes" | "on" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" | "false" | "0" | "no" | "off" => Ok(Self::Never),
            other => Err(format!(
                "Invalid color mode '{other}', expected always, auto or never"
            )),
        }
    }
}

/// Resolved colour decision for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConfig {
    /// Reads the process environment and probes stdout.
    pub fn new() -> Self {
        Self::resolve(
            env::var("NO_COLOR").ok().as_deref(),
            env::var("EASYGIT_COLOR").ok().as_deref(),
            std::io::stdout().is_terminal(),
        )
    }

    /// A non-empty `NO_COLOR` always disables colour. An unparsable
    /// `EASYGIT_COLOR` is ignored with a warning and treated as `auto`.
    pub fn resolve(no_color: Option<&str>, setting: Option<&str>, is_terminal: bool) -> Self {
        if no_color.is_some_and(|value| !value.is_empty()) {
            return Self { enabled: false };
        }

        let mode = setting
            .map(ColorMode::from_str)
            .transpose()
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "Ignoring EASYGIT_COLOR");
                None
            })
            .unwrap_or_default();

        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        };
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

static COLOR_CONFIG: OnceLock<ColorConfig> = OnceLock::new();

/// Installs the process-wide colour decision. Later calls are ignored.
pub fn init_color_config(config: ColorConfig) {
    if COLOR_CONFIG.set(config).is_err() {
        tracing::debug!("Color config already initialized");
    }
}

fn paint(text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
    COLOR_CONFIG.get_or_init(ColorConfig::new).paint(text, style)
}

/// Colours readable on both light and dark backgrounds.
pub mod palette {
    use colored::Colorize;

    use super::paint;

    pub fn yellow(text: &str) -> String {
        paint(text, |s| s.truecolor(184, 134, 11))
    }

    pub fn white(text: &str) -> String {
        paint(text, |s| s.normal())
    }

    pub fn dimmed(text: &str) -> String {
        paint(text, |s| s.truecolor(107, 114, 128))
    }

    pub fn red(text: &str) -> String {
        paint(text, |s| s.truecolor(220, 38, 127))
    }

    pub fn green(text: &str) -> String {
        paint(text, |s| s.truecolor(34, 197, 94))
    }

    pub fn cyan(text: &str) -> String {
        paint(text, |s| s.truecolor(6, 182, 212))
    }

    pub fn bold(text: &str) -> String {
        paint(text, |s| s.bold())
    }
}

#[cfg(test)]
mod tests {
    use colored::Colorize;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_color_mode_from_str() {
        let fixtures = vec![
            ("always", ColorMode::Always),
            ("TRUE", ColorMode::Always),
            (" auto ", ColorMode::Auto),
            ("never", ColorMode::Never),
            ("off", ColorMode::Never),
        ];

        for (input, expected) in fixtures {
            let actual = ColorMode::from_str(input).unwrap();
            assert_eq!(actual, expected, "Failed for input: {input}");
        }
    }

    #[test]
    fn test_color_mode_from_str_invalid() {
        let actual = ColorMode::from_str("sometimes");
        assert!(actual.is_err());
    }

    #[test]
    fn test_no_color_wins_over_setting() {
        let actual = ColorConfig::resolve(Some("1"), Some("always"), true);
        assert!(!actual.is_enabled());
    }

    #[test]
    fn test_empty_no_color_is_ignored() {
        let actual = ColorConfig::resolve(Some(""), Some("always"), false);
        assert!(actual.is_enabled());
    }

    #[test]
    fn test_auto_follows_terminal() {
        assert!(ColorConfig::resolve(None, None, true).is_enabled());
        assert!(!ColorConfig::resolve(None, None, false).is_enabled());
        assert!(!ColorConfig::resolve(None, Some("never"), true).is_enabled());
    }

    #[test]
    fn test_invalid_setting_falls_back_to_auto() {
        assert!(ColorConfig::resolve(None, Some("sometimes"), true).is_enabled());
        assert!(!ColorConfig::resolve(None, Some("sometimes"), false).is_enabled());
    }

    #[test]
    fn test_paint_with_colors_disabled() {
        let fixture = ColorConfig::resolve(None, Some("never"), true);
        let actual = fixture.paint("test", |s| s.red());
        let expected = "test";
        assert_eq!(actual, expected);
    }
}
