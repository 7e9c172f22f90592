mod env;
mod service;

pub use env::*;
pub use service::*;
