use std::fmt::Display;

use anyhow::{Context, Result};
use console::Term;
use inquire::error::CustomUserError;
use inquire::ui::{RenderConfig, Styled};
use inquire::validator::Validation;
use inquire::{Confirm, InquireError, MultiSelect, Select, Text};

/// Entry point for every interactive prompt in the application.
///
/// Each builder's `prompt` returns `Ok(None)` when the user cancels with
/// Esc or Ctrl+C so callers can treat cancellation as a normal outcome.
pub struct EasySelect;

fn render_config() -> RenderConfig<'static> {
    RenderConfig::default()
        .with_scroll_up_prefix(Styled::new("⇡"))
        .with_scroll_down_prefix(Styled::new("⇣"))
        .with_highlighted_option_prefix(Styled::new("➤"))
}

/// Maps user cancellation to `None` and everything else to an error.
fn cancellable<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            tracing::debug!("Prompt cancelled");
            Ok(None)
        }
        Err(error) => Err(error).context("Prompt failed"),
    }
}

/// Builder for single-choice prompts
#[derive(derive_setters::Setters)]
pub struct SelectBuilder<T> {
    #[setters(skip)]
    message: String,
    #[setters(skip)]
    options: Vec<T>,
    #[setters(strip_option)]
    starting_cursor: Option<usize>,
    #[setters(strip_option, into)]
    help_message: Option<String>,
    #[setters(strip_option)]
    page_size: Option<usize>,
}

/// Builder for yes/no prompts
#[derive(derive_setters::Setters)]
pub struct ConfirmBuilder {
    #[setters(skip)]
    message: String,
    default: bool,
}

/// Builder for free-text prompts
pub struct InputBuilder {
    message: String,
    allow_empty: bool,
    default: Option<String>,
    initial_value: Option<String>,
    validator: Option<fn(&str) -> std::result::Result<(), String>>,
}

/// Builder for multi-choice prompts
pub struct MultiSelectBuilder<T> {
    message: String,
    options: Vec<T>,
}

impl EasySelect {
    pub fn select<T>(message: impl Into<String>, options: Vec<T>) -> SelectBuilder<T> {
        SelectBuilder {
            message: message.into(),
            options,
            starting_cursor: None,
            help_message: None,
            page_size: None,
        }
    }

    /// Defaults to "no"; destructive questions should keep it that way.
    pub fn confirm(message: impl Into<String>) -> ConfirmBuilder {
        ConfirmBuilder { message: message.into(), default: false }
    }

    pub fn input(message: impl Into<String>) -> InputBuilder {
        InputBuilder {
            message: message.into(),
            allow_empty: false,
            default: None,
            initial_value: None,
            validator: None,
        }
    }

    pub fn multi_select<T>(message: impl Into<String>, options: Vec<T>) -> MultiSelectBuilder<T> {
        MultiSelectBuilder { message: message.into(), options }
    }
}

impl<T: Display> SelectBuilder<T> {
    /// # Returns
    ///
    /// - `Ok(Some(T))` - User selected an option
    /// - `Ok(None)` - No options available or user cancelled
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal interaction fails for reasons other
    /// than user cancellation
    pub fn prompt(self) -> Result<Option<T>> {
        if self.options.is_empty() {
            return Ok(None);
        }

        let len = self.options.len();
        let mut select = Select::new(&self.message, self.options)
            .with_render_config(render_config())
            .with_help_message(
                self.help_message
                    .as_deref()
                    .unwrap_or("↑↓ to move, enter to select, type to filter"),
            );

        if let Some(cursor) = self.starting_cursor
            && cursor < len
        {
            select = select.with_starting_cursor(cursor);
        }

        if let Some(page_size) = self.page_size {
            select = select.with_page_size(page_size);
        }

        cancellable(select.prompt())
    }
}

impl ConfirmBuilder {
    pub fn prompt(self) -> Result<Option<bool>> {
        let confirm = Confirm::new(&self.message)
            .with_render_config(render_config())
            .with_default(self.default);
        cancellable(confirm.prompt())
    }
}

impl InputBuilder {
    /// Allow empty input
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Value returned when the user submits nothing
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Pre-filled, editable text
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Rejects input until `check` returns `Ok`.
    pub fn with_validator(mut self, check: fn(&str) -> std::result::Result<(), String>) -> Self {
        self.validator = Some(check);
        self
    }

    /// # Returns
    ///
    /// - `Ok(Some(String))` - User provided input
    /// - `Ok(None)` - User cancelled
    pub fn prompt(self) -> Result<Option<String>> {
        let mut text = Text::new(&self.message).with_render_config(render_config());

        if let Some(default) = self.default.as_deref() {
            text = text.with_default(default);
        }

        if let Some(initial) = self.initial_value.as_deref() {
            text = text.with_initial_value(initial);
        }

        if !self.allow_empty && self.default.is_none() {
            text = text.with_validator(|value: &str| {
                Ok::<_, CustomUserError>(if value.trim().is_empty() {
                    Validation::Invalid("Input cannot be empty".into())
                } else {
                    Validation::Valid
                })
            });
        }

        if let Some(check) = self.validator {
            text = text.with_validator(move |value: &str| {
                Ok::<_, CustomUserError>(match check(value) {
                    Ok(()) => Validation::Valid,
                    Err(reason) => Validation::Invalid(reason.into()),
                })
            });
        }

        cancellable(text.prompt())
    }
}

impl<T: Display> MultiSelectBuilder<T> {
    /// # Returns
    ///
    /// - `Ok(Some(Vec<T>))` - User selected one or more options
    /// - `Ok(None)` - Nothing selected, no options, or user cancelled
    pub fn prompt(self) -> Result<Option<Vec<T>>> {
        if self.options.is_empty() {
            return Ok(None);
        }

        let multi_select = MultiSelect::new(&self.message, self.options)
            .with_render_config(render_config())
            .with_help_message("↑↓ to move, space to toggle, enter to confirm");

        Ok(cancellable(multi_select.prompt())?.filter(|selected| !selected.is_empty()))
    }
}

/// Prints `message` and blocks until the user presses Enter.
pub fn pause(message: &str) -> Result<()> {
    let term = Term::stdout();
    term.write_str(message)?;
    term.read_line().context("Failed to read from terminal")?;
    Ok(())
}
