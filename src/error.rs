/// Error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An empty sequence was aggregated while
    /// [`EmptyInput::Reject`](crate::EmptyInput::Reject) was configured.
    EmptyInput,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "EmptyInput",)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
