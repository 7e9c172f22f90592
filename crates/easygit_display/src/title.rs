use std::fmt::{self, Display, Formatter};

use derive_setters::Setters;

use crate::color::palette;

#[derive(Clone, Debug, PartialEq)]
pub enum Category {
    Action,
    Info,
    Success,
    Warning,
    Error,
}

/// One status line, e.g. `⏺ Pushing branch main origin`.
#[derive(Clone, Setters, Debug, PartialEq)]
#[setters(into, strip_option)]
pub struct TitleFormat {
    pub title: String,
    pub sub_title: Option<String>,
    pub category: Category,
}

impl TitleFormat {
    fn new(message: impl Into<String>, category: Category) -> Self {
        Self { title: message.into(), sub_title: None, category }
    }

    /// Something is about to happen
    pub fn action(message: impl Into<String>) -> Self {
        Self::new(message, Category::Action)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Category::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Category::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Category::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Category::Error)
    }

    pub fn render(&self, dim_sub_title: bool) -> String {
        let icon = match self.category {
            Category::Action => palette::yellow("⏺"),
            Category::Info => palette::cyan("⏺"),
            Category::Success => palette::green("⏺"),
            Category::Warning => palette::yellow("⏺"),
            Category::Error => palette::red("⏺"),
        };

        let title = match self.category {
            Category::Action | Category::Info => palette::white(&self.title),
            Category::Success => palette::bold(&palette::white(&self.title)),
            Category::Warning => palette::yellow(&format!("WARNING: {}", self.title)),
            Category::Error => {
                palette::red(&format!("{} {}", palette::bold("ERROR:"), self.title))
            }
        };

        let mut buf = format!("{icon} {title}");
        if let Some(ref sub_title) = self.sub_title {
            let sub_title = if dim_sub_title {
                palette::dimmed(sub_title)
            } else {
                sub_title.clone()
            };
            buf.push_str(&format!(" {sub_title}"));
        }
        buf
    }
}

impl Display for TitleFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(true))
    }
}
