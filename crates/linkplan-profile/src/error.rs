//! Error types for profile parsing.

use thiserror::Error;

/// Errors that can occur when parsing a terrain profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The input contained no non-empty lines.
    #[error("Profile text is empty")]
    Empty,

    /// Fewer than two valid samples remained after skipping malformed rows.
    #[error("Profile needs at least 2 valid samples, found {found}")]
    InsufficientSamples {
        /// Number of valid samples that were parsed.
        found: usize,
    },
}
