//! Dedent transformer
//!
//! Turns a fragment sequence and the values interpolated between its
//! fragments into a single string. The fragments go through five passes, in
//! this order:
//!
//! 1. The trailing blank line of the last fragment is dropped.
//! 2. Every fragment is surveyed for line starts (see [`IndentSurvey`]).
//! 3. The smallest indentation found becomes the common size.
//! 4. That many tabs/spaces are removed after every line break.
//! 5. The leading blank line of the first fragment is dropped.
//!
//! Values are interpolated last, so their own line breaks and indentation are
//! never touched.

use super::error::DedentError;
use super::patterns::{LEADING_BLANK_LINE, TRAILING_BLANK_LINE};
use super::survey::IndentSurvey;
use std::fmt::Display;

/// Dedent a plain string.
///
/// This is the single-fragment form of [`dedent_template`] and cannot fail.
///
/// ```rust
/// let text = dedent::dedent("
///     Hello
///       World
///     ");
/// assert_eq!(text, "Hello\n  World");
/// ```
pub fn dedent(text: &str) -> String {
    dedent_fragments(vec![text.to_owned()]).concat()
}

/// Dedent a fragment sequence and interpolate `values` between its fragments.
///
/// `values[i]` lands between `fragments[i]` and `fragments[i + 1]`, rendered
/// with its `Display` implementation.
pub fn dedent_template<S: AsRef<str>>(
    fragments: &[S],
    values: &[&dyn Display],
) -> Result<String, DedentError> {
    check_arity(fragments.len(), values.len())?;
    let fragments = fragments.iter().map(|f| f.as_ref().to_owned()).collect();
    Ok(interpolate(dedent_fragments(fragments), values))
}

/// The indentation that would be stripped from `fragments`, or `None` when
/// they contain no line start at all.
pub fn common_indent<S: AsRef<str>>(fragments: &[S]) -> Option<usize> {
    let last = fragments.len().checked_sub(1)?;
    let survey = IndentSurvey::from_fragments(fragments.iter().enumerate().map(|(i, f)| {
        if i == last {
            trim_trailing_blank_line(f.as_ref())
        } else {
            f.as_ref()
        }
    }));
    survey.common_size()
}

pub(crate) fn check_arity(fragments: usize, values: usize) -> Result<(), DedentError> {
    if fragments == 0 {
        return Err(DedentError::EmptyTemplate);
    }
    if values + 1 != fragments {
        return Err(DedentError::ValueCountMismatch { fragments, values });
    }
    Ok(())
}

/// Run the five fragment passes. Empty input is returned as is.
pub(crate) fn dedent_fragments(mut fragments: Vec<String>) -> Vec<String> {
    if let Some(last) = fragments.last_mut() {
        let keep = trim_trailing_blank_line(last).len();
        last.truncate(keep);
    }

    let survey = IndentSurvey::from_fragments(&fragments);
    let size = survey.common_size();
    tracing::trace!(
        candidates = survey.candidates().len(),
        suppressed = survey.is_suppressed(),
        size = ?size,
        "surveyed indentation"
    );

    if let Some(size) = size.filter(|&size| size > 0) {
        for fragment in fragments.iter_mut() {
            *fragment = strip_indent(fragment, size);
        }
    }

    if let Some(first) = fragments.first_mut() {
        if let Some(end) = LEADING_BLANK_LINE.find(first).map(|m| m.end()) {
            first.replace_range(..end, "");
        }
    }

    fragments
}

fn trim_trailing_blank_line(fragment: &str) -> &str {
    match TRAILING_BLANK_LINE.find(fragment) {
        Some(m) => &fragment[..m.start()],
        None => fragment,
    }
}

/// Remove exactly `size` tabs/spaces after each line break that is followed
/// by at least that many. Shorter runs are left alone.
fn strip_indent(fragment: &str, size: usize) -> String {
    let bytes = fragment.as_bytes();
    let mut out = String::with_capacity(fragment.len());
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(pos) = fragment[cursor..].find('\n') {
        let run_start = cursor + pos + 1;
        let run_end = run_start + size;
        let indented = bytes
            .get(run_start..run_end)
            .is_some_and(|run| run.iter().all(|b| matches!(b, b' ' | b'\t')));

        if indented {
            out.push_str(&fragment[copied..run_start]);
            copied = run_end;
            cursor = run_end;
        } else {
            cursor = run_start;
        }
    }

    out.push_str(&fragment[copied..]);
    out
}

fn interpolate(fragments: Vec<String>, values: &[&dyn Display]) -> String {
    let mut fragments = fragments.into_iter();
    let mut result = fragments.next().unwrap_or_default();
    for (value, fragment) in values.iter().zip(fragments) {
        result.push_str(&value.to_string());
        result.push_str(&fragment);
    }
    result
}
