#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::{self, Display};

use colored::Colorize;

use super::answer::QuestionRef;
use crate::constants::FLAG_MARKER;

/// A soft diagnostic raised while grading, printed for human review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    /// A multiple choice answer longer than a single character.
    AmbiguousChoice {
        /// Player who submitted the answer.
        player:   String,
        /// 1-based section number.
        section:  usize,
        /// 1-based question number.
        question: usize,
    },
    /// A submission with a different number of answers than the section.
    CountMismatch {
        /// Player who submitted the answers.
        player:    String,
        /// 1-based section number.
        section:   usize,
        /// Number of answers found in the submission.
        submitted: usize,
        /// Number of questions in the section.
        expected:  usize,
    },
}

impl Flag {
    /// Flags the answer at `at` as more than a single letter or digit.
    pub fn ambiguous_choice(at: QuestionRef<'_>) -> Self {
        Flag::AmbiguousChoice {
            player:   at.player.to_owned(),
            section:  at.section,
            question: at.question,
        }
    }

    /// Prints the flag on stdout, marker first.
    pub fn report(&self) {
        println!("{} {self}", FLAG_MARKER.yellow().bold());
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::AmbiguousChoice {
                player,
                section,
                question,
            } => write!(f, "{player} in section {section} question {question}"),
            Flag::CountMismatch {
                player,
                section,
                submitted,
                expected,
            } => write!(
                f,
                "{player} in section {section} has {submitted} submissions but section requires \
                 {expected}"
            ),
        }
    }
}
