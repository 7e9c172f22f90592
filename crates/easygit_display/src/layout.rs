use console::{Term, measure_text_width};
use terminal_size::{Width, terminal_size};

const FALLBACK_WIDTH: usize = 80;

/// Columns available on stdout, or 80 when it is not a terminal.
pub fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .filter(|w| *w > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Clears the terminal. Failures are ignored since output may be piped.
pub fn clear_screen() {
    if let Err(error) = Term::stdout().clear_screen() {
        tracing::debug!(%error, "Unable to clear screen");
    }
}

/// Controls how headers and menu text are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    center: bool,
    width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { center: true, width: FALLBACK_WIDTH }
    }
}

impl Layout {
    pub fn new(center: bool, width: usize) -> Self {
        Self { center, width }
    }

    /// Uses the current terminal width.
    pub fn detect(center: bool) -> Self {
        Self::new(center, terminal_width())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Pads `text` on the left so it sits in the middle of the line. Text
    /// wider than the terminal is returned unchanged.
    pub fn line(&self, text: &str) -> String {
        if !self.center {
            return text.to_string();
        }
        let visible = measure_text_width(text);
        if visible >= self.width {
            return text.to_string();
        }
        let pad = (self.width - visible) / 2;
        format!("{}{}", " ".repeat(pad), text)
    }

    /// A framed header block, e.g. the menu title and the selected repository.
    pub fn header(&self, title: &str, details: &[String]) -> String {
        let rule_width = details
            .iter()
            .map(|d| measure_text_width(d))
            .chain(std::iter::once(measure_text_width(title)))
            .max()
            .unwrap_or_default()
            .min(self.width)
            + 4;
        let rule = "═".repeat(rule_width.min(self.width));

        let mut lines = vec![self.line(&rule), self.line(title)];
        lines.extend(details.iter().map(|d| self.line(d)));
        lines.push(self.line(&rule));
        lines.join("\n")
    }

    /// Left margin that aligns prompt options under a centered header.
    pub fn indent(&self, content_width: usize) -> usize {
        if !self.center || content_width >= self.width {
            0
        } else {
            (self.width - content_width) / 2
        }
    }
}
