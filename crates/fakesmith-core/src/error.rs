use thiserror::Error;

/// Core error type shared across fakesmith crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input to a checksum function (wrong length, bad characters).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias for results returned by fakesmith crates.
pub type Result<T> = std::result::Result<T, Error>;
