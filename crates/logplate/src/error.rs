//! Error types for the logplate crate.

use thiserror::Error;

/// Errors that can occur when rendering a template or extracting pairs.
///
/// Template parsing itself never fails: malformed or unmatched braces
/// degrade to literal text. Both variants here signal a caller bug, not an
/// environmental failure, so retrying is never appropriate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Requested pair index is outside `0..=placeholder_count`.
    #[error("pair index {index} is out of range for {count} placeholders")]
    IndexOutOfRange { index: usize, count: usize },

    /// A placeholder referenced an argument that was not supplied.
    #[error("placeholder {{{index}}} has no argument ({supplied} supplied)")]
    FormatArgumentMismatch { index: usize, supplied: usize },
}

/// Result type for logplate operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
