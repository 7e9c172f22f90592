mod browser;
mod cli;
mod logging;
mod menu;
mod ui;

pub use cli::Cli;
pub use logging::init_logging;
pub use ui::UI;
