//! Indentation survey
//!
//! Walks every line start of every fragment, in order, and records how far
//! each line is indented. The smallest recorded indentation is the amount the
//! transformer strips from every line.
//!
//! # Flush-left lines
//!
//! A line that starts directly with a word character, digit or hyphen is
//! flush against the margin. If such a line shows up before any indented line
//! has been recorded, a [`Candidate::FlushLeft`] sentinel is recorded and the
//! common size collapses to zero. Once an indented line has been recorded,
//! later flush-left lines are ignored, so the outcome depends on which kind of
//! line comes first.

use super::patterns::LINE_START;

/// One line start found by the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// A line break followed by `width` tabs and spaces.
    Indented { width: usize },
    /// A flush-left line seen before any indented line.
    FlushLeft,
}

impl Candidate {
    /// Length of the matched text, counting the line break itself.
    pub fn length(&self) -> usize {
        match self {
            Candidate::Indented { width } => width + 1,
            Candidate::FlushLeft => 1,
        }
    }
}

/// Accumulates indentation candidates across a sequence of fragments.
#[derive(Debug, Clone, Default)]
pub struct IndentSurvey {
    candidates: Vec<Candidate>,
}

impl IndentSurvey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Survey all fragments in sequence order.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut survey = Self::new();
        for fragment in fragments {
            survey.scan(fragment.as_ref());
        }
        survey
    }

    /// Record every line start in `fragment`.
    pub fn scan(&mut self, fragment: &str) {
        for caps in LINE_START.captures_iter(fragment) {
            match caps.name("indent") {
                Some(indent) => self.candidates.push(Candidate::Indented {
                    width: indent.as_str().len(),
                }),
                None if self.candidates.is_empty() => {
                    self.candidates.push(Candidate::FlushLeft);
                }
                None => {}
            }
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Whether a flush-left line disabled dedenting.
    pub fn is_suppressed(&self) -> bool {
        self.candidates.first() == Some(&Candidate::FlushLeft)
    }

    /// The number of tabs/spaces to strip after every line break, or `None`
    /// when no line start was recorded at all.
    pub fn common_size(&self) -> Option<usize> {
        self.candidates
            .iter()
            .map(Candidate::length)
            .min()
            .map(|length| length - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_indentation() {
        let survey = IndentSurvey::from_fragments(["\n    a\n    b"]);
        assert_eq!(
            survey.candidates(),
            &[
                Candidate::Indented { width: 4 },
                Candidate::Indented { width: 4 }
            ]
        );
        assert_eq!(survey.common_size(), Some(4));
    }

    #[test]
    fn test_smallest_indentation_wins() {
        let survey = IndentSurvey::from_fragments(["\n    a\n  b\n      c"]);
        assert_eq!(survey.common_size(), Some(2));
    }

    #[test]
    fn test_tabs_count_as_one_column() {
        let survey = IndentSurvey::from_fragments(["\n\t\ta\n\t\t\tb"]);
        assert_eq!(survey.common_size(), Some(2));
    }

    #[test]
    fn test_no_line_breaks_yields_nothing() {
        let survey = IndentSurvey::from_fragments(["single line"]);
        assert!(survey.candidates().is_empty());
        assert_eq!(survey.common_size(), None);
    }

    #[test]
    fn test_flush_left_first_suppresses() {
        let survey = IndentSurvey::from_fragments(["\nfoo\n  bar"]);
        assert!(survey.is_suppressed());
        assert_eq!(survey.common_size(), Some(0));
    }

    #[test]
    fn test_flush_left_after_indent_is_ignored() {
        let survey = IndentSurvey::from_fragments(["\n  foo\nbar"]);
        assert!(!survey.is_suppressed());
        assert_eq!(survey.candidates(), &[Candidate::Indented { width: 2 }]);
        assert_eq!(survey.common_size(), Some(2));
    }

    #[test]
    fn test_order_is_tracked_across_fragments() {
        // Indented line in the first fragment, flush-left line in the second
        let survey = IndentSurvey::from_fragments(["\n  a ", "\nb"]);
        assert_eq!(survey.common_size(), Some(2));

        // Flush-left line in the first fragment wins
        let survey = IndentSurvey::from_fragments(["\na ", "\n  b"]);
        assert_eq!(survey.common_size(), Some(0));
    }

    #[test]
    fn test_sentinel_recorded_once() {
        let survey = IndentSurvey::from_fragments(["\na\nb\nc"]);
        assert_eq!(survey.candidates(), &[Candidate::FlushLeft]);
    }

    #[test]
    fn test_punctuation_lines_are_neutral() {
        let survey = IndentSurvey::from_fragments(["\n(a)\n   b"]);
        assert!(!survey.is_suppressed());
        assert_eq!(survey.common_size(), Some(3));
    }
}
