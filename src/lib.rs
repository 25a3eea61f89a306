//! # dedent
//!
//! Strips the common leading indentation from multi-line text, so that a
//! literal can be indented along with the code around it and still print
//! flush-left.
//!
//! ```rust
//! let usage = dedent::dedent("
//!     usage: tool [options]
//!
//!       -h  show help
//!     ");
//! assert_eq!(usage, "usage: tool [options]\n\n  -h  show help");
//! ```
//!
//! Text with interpolated values goes through [`dedent_template`] (fragments
//! and values passed separately), a parsed [`Template`], or the [`dedent!`]
//! macro. Values are inserted after the indentation has been stripped, so a
//! multi-line value keeps its own layout.
//!
//! ## Rules
//!
//! - A trailing line holding only tabs and spaces is dropped, along with the
//!   line break before it.
//! - The smallest indentation found after any line break is removed from
//!   every line.
//! - A flush-left line seen before any indented line turns dedenting off.
//! - A single leading line break is dropped.
//!
//! See [`IndentSurvey`] for how the indentation is measured.

mod dedent;

pub use crate::dedent::error::DedentError;
pub use crate::dedent::input::Input;
pub use crate::dedent::survey::{Candidate, IndentSurvey};
pub use crate::dedent::template::Template;
pub use crate::dedent::transform::{common_indent, dedent, dedent_template};
