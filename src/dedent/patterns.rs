//! Fixed patterns used by the transformer
//!
//! All patterns are compiled once on first use via `once_cell::sync::Lazy`.
//! The word class is spelled out as ASCII so that a line starting with a
//! non-ASCII letter is treated like any other punctuation: it neither
//! indents nor counts as flush-left.

use once_cell::sync::Lazy;
use regex::Regex;

/// A final line break, optionally preceded by a carriage return, followed by
/// nothing but tabs and spaces up to the end of the text.
pub(crate) static TRAILING_BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[\t ]*\z").unwrap());

/// A single leading line break, optionally preceded by a carriage return.
pub(crate) static LEADING_BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\r?\n").unwrap());

/// A line break followed either by an indentation run (captured as `indent`)
/// or by the first character of a flush-left word.
pub(crate) static LINE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:(?P<indent>[\t ]+)|[0-9A-Za-z_-])").unwrap());
