pub mod browse;
mod branch;
mod error;
mod execution;
mod executor;
mod invocation;
pub mod outcome;
mod remote;
mod session;

pub use branch::*;
pub use error::*;
pub use execution::*;
pub use executor::*;
pub use invocation::*;
pub use outcome::{Notice, Outcome, classify};
pub use remote::*;
pub use session::*;
