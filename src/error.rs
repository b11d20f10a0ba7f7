use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A map needs at least one bucket to hash into.
    #[error("bucket capacity must be at least 1")]
    ZeroCapacity,

    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),

    #[error("cannot draw from empty set")]
    EmptySet,

    /// Malformed operation script. `line` is 1-based.
    #[error("line {line}: {message}")]
    Script { line: usize, message: String },
}
