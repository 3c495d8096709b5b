use std::collections::TryReserveError;

/// Represents errors that can occur while building or filling a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A table needs at least one bucket
    ZeroBuckets,

    /// Storage for the bucket array, a record, or a string copy could not be reserved
    Allocation(TryReserveError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroBuckets => write!(f, "ChainTableError: bucket count must be non-zero"),
            Self::Allocation(e) => write!(f, "ChainTableError: allocation failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ZeroBuckets => None,
            Self::Allocation(e) => Some(e),
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(value: TryReserveError) -> Self {
        Self::Allocation(value)
    }
}

/// Table result
pub type Result<T> = std::result::Result<T, Error>;
