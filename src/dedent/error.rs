//! Errors raised by the fragment-and-values entry points

use std::fmt;

/// Errors that can occur while dedenting a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DedentError {
    /// No fragments were supplied; a template always has at least one
    EmptyTemplate,
    /// Values must sit between fragments, so there is one fewer of them
    ValueCountMismatch { fragments: usize, values: usize },
    /// A `{` or `}` that is neither a placeholder nor an escape
    UnbalancedBrace { offset: usize },
    /// A placeholder with a name, index or format spec
    UnsupportedPlaceholder { offset: usize },
}

impl fmt::Display for DedentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DedentError::EmptyTemplate => write!(f, "Template has no fragments"),
            DedentError::ValueCountMismatch { fragments, values } => write!(
                f,
                "Expected {} value(s) for {} fragment(s), got {}",
                fragments.saturating_sub(1),
                fragments,
                values
            ),
            DedentError::UnbalancedBrace { offset } => {
                write!(f, "Unbalanced brace at byte {}", offset)
            }
            DedentError::UnsupportedPlaceholder { offset } => {
                write!(f, "Only `{{}}` placeholders are supported (byte {})", offset)
            }
        }
    }
}

impl std::error::Error for DedentError {}

impl From<DedentError> for String {
    fn from(err: DedentError) -> Self {
        err.to_string()
    }
}
