use std::fmt;

/// Result type for rattle-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A stage token did not name any pipeline stage
    InvalidStage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidStage(token) => write!(f, "Invalid deal stage: {}", token),
        }
    }
}

impl std::error::Error for Error {}
