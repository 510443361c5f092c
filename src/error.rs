use std::fmt;

/// Crate-local error type. Library code returns `Result<T, Error>` so call
/// sites can pattern-match on failure kind; the CLI binary converts to
/// `anyhow::Result` at its own boundary (SPEC_FULL.md §4.9/§7).
#[derive(Debug)]
pub enum Error {
    InvariantViolation(String),
    Snapshot(std::io::Error),
    Serialize(bincode::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
            Error::Snapshot(e) => write!(f, "snapshot I/O error: {e}"),
            Error::Serialize(e) => write!(f, "snapshot serialization error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvariantViolation(_) => None,
            Error::Snapshot(e) => Some(e),
            Error::Serialize(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Snapshot(e)
    }
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::Serialize(e)
    }
}
