//! Templates written with `{}` placeholders
//!
//! [`Template::parse`] splits a string at every `{}` into the fragment
//! sequence the transformer works on, so an indented literal can be written
//! once and filled in later. Braces are escaped the way `format!` escapes
//! them: `{{` and `}}` stand for a literal `{` and `}`.

use super::error::DedentError;
use super::transform::dedent_template;
use std::fmt::Display;
use std::str::FromStr;

/// A fragment sequence parsed from a placeholder string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    fragments: Vec<String>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, DedentError> {
        let mut fragments = Vec::new();
        let mut current = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' => match chars.peek() {
                    Some((_, '{')) => {
                        chars.next();
                        current.push('{');
                    }
                    Some((_, '}')) => {
                        chars.next();
                        fragments.push(std::mem::take(&mut current));
                    }
                    _ if closes_placeholder(&source[offset + 1..]) => {
                        return Err(DedentError::UnsupportedPlaceholder { offset });
                    }
                    _ => return Err(DedentError::UnbalancedBrace { offset }),
                },
                '}' => match chars.peek() {
                    Some((_, '}')) => {
                        chars.next();
                        current.push('}');
                    }
                    _ => return Err(DedentError::UnbalancedBrace { offset }),
                },
                _ => current.push(c),
            }
        }

        fragments.push(current);
        Ok(Template { fragments })
    }

    /// The literal text between placeholders, with escapes resolved.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn placeholder_count(&self) -> usize {
        self.fragments.len() - 1
    }

    /// Dedent the fragments and fill the placeholders with `values`, in order.
    pub fn render(&self, values: &[&dyn Display]) -> Result<String, DedentError> {
        tracing::trace!(
            placeholders = self.placeholder_count(),
            values = values.len(),
            "rendering template"
        );
        dedent_template(&self.fragments, values)
    }
}

/// Whether the next brace in `rest` is a lone `}` closing an open `{`.
/// A `}}` escape or another `{` means the open brace is unbalanced.
fn closes_placeholder(rest: &str) -> bool {
    match rest.find(|c| c == '{' || c == '}') {
        Some(i) => {
            let brace = &rest[i..];
            brace.starts_with('}') && !brace.starts_with("}}")
        }
        None => false,
    }
}

impl FromStr for Template {
    type Err = DedentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::parse(s)
    }
}

/// Dedent a `{}` template and interpolate the arguments.
///
/// Expands to a `Result<String, DedentError>`: the template is parsed at run
/// time, so a brace error or a wrong number of arguments is reported rather
/// than rejected at compile time.
///
/// ```rust
/// let name = "world";
/// let text = dedent::dedent!("
///     Hello {}!
///       Bye.
///     ", name).unwrap();
/// assert_eq!(text, "Hello world!\n  Bye.");
/// ```
#[macro_export]
macro_rules! dedent {
    ($template:expr $(,)?) => {
        $crate::Template::parse($template).and_then(|template| template.render(&[]))
    };
    ($template:expr, $($value:expr),+ $(,)?) => {
        $crate::Template::parse($template).and_then(|template| {
            template.render(&[$(&$value as &dyn ::std::fmt::Display),+])
        })
    };
}
