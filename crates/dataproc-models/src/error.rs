//! Error types for the `dataproc-models` crate.
//!
//! Input validation in [`crate::process`] returns variants of [`ModelError`].

/// Errors produced when validating a processing request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The input was empty or contained only whitespace.
    #[error("Input data cannot be empty")]
    BlankInput,

    /// The input exceeded the accepted length.
    #[error("Data cannot exceed {max} characters (got {len})")]
    TooLong {
        /// Length of the rejected input, in characters.
        len: usize,
        /// Maximum accepted length, in characters.
        max: usize,
    },
}
