/// Errors raised by domain validation.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid name '{0}': '..' is not allowed")]
    ParentTraversal(String),

    #[error("Invalid name '{0}': absolute paths are not allowed")]
    AbsolutePath(String),

    #[error("Invalid repository name '{0}': must not contain '/' or whitespace")]
    InvalidRepositoryName(String),

    #[error("Unknown visibility '{0}', expected private, public or internal")]
    UnknownVisibility(String),
}

pub type Result<T> = std::result::Result<T, Error>;
