mod editor;
mod executor;
mod fs;

pub use editor::*;
pub use executor::*;
pub use fs::*;
