use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when no character class is enabled.
    #[error("select at least one option")]
    NoClassSelected,

    /// Error generated parsing an unknown character class name.
    #[error("unknown character class '{0}'")]
    UnknownClass(String),

    /// Error generated when a length range has no width or
    /// cannot fit one character of every class.
    #[error("invalid length range {0}..={1}")]
    InvalidRange(usize, usize),
}
