pub mod color;
pub mod layout;
pub mod title;

pub use color::{ColorConfig, ColorMode, init_color_config};
pub use layout::{Layout, clear_screen, terminal_width};
pub use title::{Category, TitleFormat};
