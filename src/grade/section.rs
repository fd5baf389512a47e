#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::{self, Display},
    path::Path,
};

use itertools::Itertools;
use serde::Serialize;

use super::{
    answer::{Answer, QuestionRef},
    flag::Flag,
    review::Reviewer,
};
use crate::{constants::SUBMISSION_DELIMITERS, files};

/// An ordered group of questions, graded against one `sectionN` directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Questions, in the order students are expected to answer them.
    answers: Vec<Answer>,
}

/// What grading one player's submission produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionReport {
    /// Total points awarded.
    pub score: i64,
    /// Flags raised along the way, in the order they were printed.
    pub flags: Vec<Flag>,
}

/// Splits a submission into raw answers.
///
/// The first delimiter that yields more than one fragment wins. Without one,
/// the text is split into lines and the fragment after the final newline is
/// dropped. Fragments are returned untrimmed.
pub fn split_submission(contents: &str) -> Vec<&str> {
    for delimiter in SUBMISSION_DELIMITERS {
        let parts = contents.split(delimiter).collect_vec();
        if parts.len() > 1 {
            return parts;
        }
    }

    let mut lines = contents.split('\n').collect_vec();
    lines.pop();
    lines
}

/// Reads and splits the submission at `path`. Unreadable submissions have no
/// answers.
pub fn read_submission(path: &Path) -> Vec<String> {
    match files::read_file(path) {
        Ok(contents) => split_submission(&contents)
            .into_iter()
            .map(str::to_owned)
            .collect(),
        Err(e) => {
            tracing::warn!("Could not read submission {}: {e}", path.display());
            Vec::new()
        }
    }
}

impl Section {
    /// Creates a section from its questions.
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers }
    }

    /// The questions of this section.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the section has no questions.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Most points available without manual review.
    pub fn max_points(&self) -> i64 {
        self.answers
            .iter()
            .map(Answer::max_points)
            .fold(0, i64::saturating_add)
    }

    /// Grades the submission file at `path` for `player`.
    pub fn grade(
        &self,
        path: &Path,
        player: &str,
        section: usize,
        reviewer: &mut dyn Reviewer,
    ) -> SectionReport {
        let submitted = read_submission(path);
        self.grade_answers(&submitted, player, section, reviewer)
    }

    /// Grades already split raw answers, pairing them with questions by
    /// position. Extra answers are ignored and missing ones score nothing.
    pub fn grade_answers<S: AsRef<str>>(
        &self,
        submitted: &[S],
        player: &str,
        section: usize,
        reviewer: &mut dyn Reviewer,
    ) -> SectionReport {
        let mut report = SectionReport::default();

        if submitted.len() != self.answers.len() {
            let flag = Flag::CountMismatch {
                player: player.to_owned(),
                section,
                submitted: submitted.len(),
                expected: self.answers.len(),
            };
            flag.report();
            report.flags.push(flag);
        }

        for (index, (answer, raw)) in self.answers.iter().zip(submitted).enumerate() {
            let at = QuestionRef {
                player,
                section,
                question: index + 1,
            };
            let graded = answer.grade(raw.as_ref(), at, reviewer);
            if let Some(flag) = graded.flag {
                flag.report();
                report.flags.push(flag);
            }
            report.score = report.score.saturating_add(graded.points);
        }

        report
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.answers.iter().join("\n"))
    }
}
