mod error;
mod gh;
mod git;
mod report;

#[cfg(test)]
mod mock;

pub use error::*;
pub use gh::*;
pub use git::*;
pub use report::*;
