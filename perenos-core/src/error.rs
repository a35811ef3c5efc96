//! Core error types

use thiserror::Error;

/// Errors raised while configuring a processor
///
/// Processing itself is total over its input alphabet and never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflowError {
    /// Line width below the supported minimum
    #[error("line width {width} is too small, the minimum is {min}")]
    WidthTooSmall {
        /// The rejected width
        width: usize,
        /// The minimum accepted width
        min: usize,
    },

    /// Unknown processing mode name
    #[error("unknown mode '{0}', expected 'reflow' or 'words'")]
    InvalidMode(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ReflowError>;
