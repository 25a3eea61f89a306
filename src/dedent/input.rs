//! The two calling conventions, as one type

use super::error::DedentError;
use super::transform::{dedent, dedent_template};
use std::fmt::{self, Display};

/// Input accepted by the transformer.
///
/// A plain string is a template with a single fragment and no values.
/// Fragments may be borrowed (`&str`, the default) or owned (`String`).
pub enum Input<'a, S = &'a str> {
    Text(&'a str),
    Template {
        fragments: &'a [S],
        values: &'a [&'a dyn Display],
    },
}

impl<'a, S: AsRef<str>> Input<'a, S> {
    pub fn template(fragments: &'a [S], values: &'a [&'a dyn Display]) -> Self {
        Input::Template { fragments, values }
    }

    pub fn dedent(&self) -> Result<String, DedentError> {
        match self {
            Input::Text(text) => Ok(dedent(text)),
            Input::Template { fragments, values } => dedent_template(*fragments, *values),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

// Only references are held, so copying never needs `S: Copy`.
impl<S> Clone for Input<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Input<'_, S> {}

impl<S: AsRef<str>> fmt::Debug for Input<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Template { fragments, values } => f
                .debug_struct("Template")
                .field(
                    "fragments",
                    &fragments.iter().map(AsRef::as_ref).collect::<Vec<&str>>(),
                )
                .field("values", &values.len())
                .finish(),
        }
    }
}
